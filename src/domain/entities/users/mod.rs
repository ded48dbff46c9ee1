//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! ### User Entity
//! - **로컬 인증**: 사용자명/패스워드 기반 인증
//! - **OAuth 인증**: Google 계정 식별자 기반 인증
//! - **Secret**: 사용자가 제출한 단일 텍스트
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let local = User::new_local("alice".to_string(), hashed_password);
//! let oauth = User::new_oauth("google_sub_123".to_string());
//! ```

pub mod user;
