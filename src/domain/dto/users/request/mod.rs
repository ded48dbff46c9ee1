//! 요청 DTO
//!
//! 모든 요청 DTO는 `validator::Validate`를 구현하며 핸들러에서 검증됩니다.

pub mod auth_request;
pub mod secret_request;

pub use auth_request::{LoginForm, OAuthCallbackQuery, RegisterForm};
pub use secret_request::SubmitSecretForm;
