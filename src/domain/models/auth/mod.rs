//! 인증 모델
//!
//! 세션 미들웨어가 요청 extension에 넣어주는 [`authenticated_user::SessionContext`]와
//! 이를 꺼내 쓰는 actix 추출자(extractor), 그리고 인증기 입력인
//! [`credentials::Credentials`]를 정의합니다.

pub mod authenticated_user;
pub mod credentials;

pub use authenticated_user::{AuthenticatedUser, OptionalUser, SessionContext};
pub use credentials::{Credentials, Identity};
