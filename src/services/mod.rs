//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 트레이트(`UserStore`, `SessionStore`)에만 의존하며,
//! 구체 구현은 애플리케이션 시작 시 [`crate::core::context::AppContext`]에서 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_store.clone());
//! let secrets = user_service.list_secrets().await?;
//! ```

pub mod users;
pub mod auth;
