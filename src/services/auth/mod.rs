//! 인증 및 세션 서비스 모듈
//!
//! 로컬(사용자명/비밀번호)과 Google OAuth 2.0 두 가지 인증 방식을 제공하고,
//! 인증 결과를 서버 측 세션으로 유지합니다.
//!
//! # Features
//!
//! - bcrypt 비밀번호 해싱과 검증
//! - Google OAuth 2.0 Authorization Code Flow
//! - 서명된 쿠키 기반 세션, 로그인 시 세션 ID 교체
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::domain::models::auth::Credentials;
//!
//! let identity = auth_service
//!     .authenticate(Credentials::local("alice", "wonderland"))
//!     .await?;
//! let session_id = session_service.login(None, &identity.user_id().unwrap()).await?;
//! ```

pub mod authenticator;
pub mod google_auth_service;
pub mod local_auth_service;
pub mod session_service;

pub use authenticator::{AuthService, Authenticator};
pub use google_auth_service::{DisabledOAuthClient, GoogleAuthenticator, GoogleOAuthClient, OAuthProviderClient};
pub use local_auth_service::LocalAuthenticator;
pub use session_service::{SessionCookie, SessionService};
