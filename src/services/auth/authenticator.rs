//! 인증기 계약과 자격 증명 분배
//!
//! 인증 방식마다 [`Authenticator`] 구현이 하나씩 있고, [`AuthService`]가
//! [`Credentials`] 변형에 맞는 구현으로 요청을 넘깁니다.

use async_trait::async_trait;
use crate::{
    config::AuthProvider,
    domain::{
        dto::users::request::RegisterForm,
        models::auth::credentials::{Credentials, Identity},
    },
    errors::errors::AppResult,
    services::auth::{
        google_auth_service::GoogleAuthenticator,
        local_auth_service::LocalAuthenticator,
    },
};

#[async_trait]
pub trait Authenticator: Send + Sync {
    fn provider(&self) -> AuthProvider;

    /// 성공하면 자격 증명에 해당하는 사용자를, 실패하면 `InvalidCredentials`
    /// 또는 `OAuthExchangeFailure`를 반환합니다.
    async fn authenticate(&self, credentials: &Credentials) -> AppResult<Identity>;
}

/// 인증 진입점
pub struct AuthService {
    local: LocalAuthenticator,
    google: GoogleAuthenticator,
}

impl AuthService {
    pub fn new(local: LocalAuthenticator, google: GoogleAuthenticator) -> Self {
        Self { local, google }
    }

    pub async fn authenticate(&self, credentials: Credentials) -> AppResult<Identity> {
        let authenticator: &dyn Authenticator = match credentials {
            Credentials::Local { .. } => &self.local,
            Credentials::OAuth { .. } => &self.google,
        };

        log::debug!("인증 시도: provider={}", authenticator.provider().as_str());
        authenticator.authenticate(&credentials).await
    }

    pub async fn register(&self, form: &RegisterForm) -> AppResult<Identity> {
        self.local.register(&form.username, &form.password).await
    }

    pub fn google_authorize_url(&self, state: &str) -> AppResult<String> {
        self.google.authorize_url(state)
    }
}
