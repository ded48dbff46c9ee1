//! # Google OAuth 2.0 인증 서비스
//!
//! Authorization Code Flow로 Google 계정을 확인하고, Google 식별자(`sub`)에
//! 연결된 사용자를 찾거나 새로 만듭니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! 브라우저                         우리 서버                          Google
//!    │ GET /auth/google               │                                 │
//!    ├───────────────────────────────►│ state 생성 후 세션에 저장         │
//!    │ 303 → accounts.google.com      │                                 │
//!    │◄───────────────────────────────┤                                 │
//!    │ 사용자 동의                                                       │
//!    ├─────────────────────────────────────────────────────────────────►│
//!    │ GET /auth/google/callback?code=..&state=..                        │
//!    ├───────────────────────────────►│ state 비교 (일회성)              │
//!    │                                │ code → access_token              │
//!    │                                ├────────────────────────────────►│
//!    │                                │ access_token → userinfo          │
//!    │                                ├────────────────────────────────►│
//!    │                                │ find-or-create(sub), 세션 로그인 │
//!    │ 303 → /secrets                 │                                 │
//!    │◄───────────────────────────────┤                                 │
//! ```
//!
//! ## 사용하는 Google API 엔드포인트
//!
//! | 용도 | 기본 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://accounts.google.com/o/oauth2/auth` | GET |
//! | **Token Exchange** | `https://oauth2.googleapis.com/token` | POST |
//! | **User Info** | `https://www.googleapis.com/oauth2/v3/userinfo` | GET |
//!
//! 모든 엔드포인트는 [`GoogleOAuthConfig`]를 통해 환경 변수로 바꿀 수 있습니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    config::{AuthProvider, GoogleOAuthConfig},
    domain::{
        dto::users::response::google_oauth_response::GoogleTokenResponse,
        models::{
            auth::credentials::{Credentials, Identity},
            oauth::google_user::GoogleUserInfo,
        },
    },
    errors::errors::{AppError, AppResult},
    repositories::users::user_store::UserStore,
    services::auth::authenticator::Authenticator,
};

/// 외부 OAuth 제공자와의 통신 계약
///
/// 라우트 테스트에서는 네트워크 없이 동작하는 가짜 구현을 주입합니다.
#[async_trait]
pub trait OAuthProviderClient: Send + Sync {
    /// 동의 화면 URL. `state`는 콜백에서 그대로 돌아옵니다.
    fn authorize_url(&self, state: &str) -> AppResult<String>;

    /// authorization code를 사용자 프로필로 교환합니다.
    async fn exchange_code(&self, code: &str) -> AppResult<GoogleUserInfo>;
}

/// reqwest 기반 Google OAuth 클라이언트
pub struct GoogleOAuthClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    auth_uri: String,
    token_uri: String,
    userinfo_uri: String,
    scope: String,
}

impl GoogleOAuthClient {
    /// `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`가 없으면 `AppError::ConfigError`
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            client_id: GoogleOAuthConfig::client_id()?,
            client_secret: GoogleOAuthConfig::client_secret()?,
            redirect_uri: GoogleOAuthConfig::redirect_uri(),
            auth_uri: GoogleOAuthConfig::auth_uri(),
            token_uri: GoogleOAuthConfig::token_uri(),
            userinfo_uri: GoogleOAuthConfig::userinfo_uri(),
            scope: GoogleOAuthConfig::scope(),
        })
    }

    async fn exchange_code_for_token(&self, code: &str) -> AppResult<GoogleTokenResponse> {
        let params = [
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(&self.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::OAuthExchangeFailure(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::OAuthExchangeFailure(format!(
                "Google 토큰 교환 실패 ({}): {}", status, error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::OAuthExchangeFailure(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    async fn fetch_user_info(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self.http
            .get(&self.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::OAuthExchangeFailure(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::OAuthExchangeFailure(format!(
                "Google 사용자 정보 조회 실패 ({}): {}", status, error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::OAuthExchangeFailure(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl OAuthProviderClient for GoogleOAuthClient {
    fn authorize_url(&self, state: &str) -> AppResult<String> {
        Ok(build_authorize_url(
            &self.auth_uri,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("scope", self.scope.as_str()),
                ("response_type", "code"),
                ("state", state),
            ],
        ))
    }

    async fn exchange_code(&self, code: &str) -> AppResult<GoogleUserInfo> {
        let token = self.exchange_code_for_token(code).await?;
        self.fetch_user_info(&token.access_token).await
    }
}

/// 클라이언트 자격 증명이 설정되지 않았을 때 사용하는 구현
///
/// 로컬 로그인은 그대로 동작하고, Google 로그인 시도는 모두 실패합니다.
pub struct DisabledOAuthClient;

#[async_trait]
impl OAuthProviderClient for DisabledOAuthClient {
    fn authorize_url(&self, _state: &str) -> AppResult<String> {
        Err(AppError::OAuthExchangeFailure("Google OAuth가 설정되지 않았습니다".to_string()))
    }

    async fn exchange_code(&self, _code: &str) -> AppResult<GoogleUserInfo> {
        Err(AppError::OAuthExchangeFailure("Google OAuth가 설정되지 않았습니다".to_string()))
    }
}

fn build_authorize_url(base: &str, params: &[(&str, &str)]) -> String {
    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query_string)
}

/// `Credentials::OAuth`를 처리하는 인증기
pub struct GoogleAuthenticator {
    client: Arc<dyn OAuthProviderClient>,
    users: Arc<dyn UserStore>,
}

impl GoogleAuthenticator {
    pub fn new(client: Arc<dyn OAuthProviderClient>, users: Arc<dyn UserStore>) -> Self {
        Self { client, users }
    }

    pub fn authorize_url(&self, state: &str) -> AppResult<String> {
        self.client.authorize_url(state)
    }
}

#[async_trait]
impl Authenticator for GoogleAuthenticator {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    async fn authenticate(&self, credentials: &Credentials) -> AppResult<Identity> {
        let Credentials::OAuth { code } = credentials else {
            return Err(AppError::InternalError(format!(
                "Google 인증기에 지원하지 않는 자격 증명: {:?}", credentials
            )));
        };

        let profile = self.client.exchange_code(code).await?;

        // 같은 Google 계정은 몇 번을 로그인해도 같은 사용자로 연결됩니다.
        let user = self.users.find_or_create_by_external_id(&profile.sub).await?;
        log::info!("Google 사용자 로그인: sub={}", profile.sub);

        Ok(Identity { user })
    }
}
