//! 도메인 계층
//!
//! - [`entities`] - 저장소에 영구 저장되는 엔티티 (`User`)
//! - [`dto`] - HTTP 폼/쿼리 요청과 외부 API 응답 매핑
//! - [`models`] - 요청 범위 인증 컨텍스트, 자격 증명, 세션, OAuth 프로필

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::User;
pub use dto::users::request::{LoginForm, OAuthCallbackQuery, RegisterForm, SubmitSecretForm};
pub use models::auth::{AuthenticatedUser, Credentials, Identity, OptionalUser, SessionContext};
