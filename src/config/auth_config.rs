//! 인증 관련 설정 모듈
//!
//! Google OAuth 클라이언트 정보와 세션 쿠키 설정을 환경 변수에서 읽어옵니다.

use std::env;
use crate::errors::errors::AppError;

/// Google OAuth 2.0 설정
///
/// 필수 값(`GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`)이 없으면
/// `AppError::ConfigError`를 반환합니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn client_id() -> Result<String, AppError> {
        required_var("GOOGLE_CLIENT_ID")
    }

    pub fn client_secret() -> Result<String, AppError> {
        required_var("GOOGLE_CLIENT_SECRET")
    }

    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:3000/auth/google/callback".to_string())
    }

    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/userinfo".to_string())
    }

    /// 요청할 OAuth scope. 프로필 식별자만 필요하므로 최소 권한인 `profile`
    pub fn scope() -> String {
        env::var("GOOGLE_SCOPE").unwrap_or_else(|_| "profile".to_string())
    }
}

/// 세션 쿠키 설정
pub struct SessionConfig;

impl SessionConfig {
    pub fn cookie_name() -> String {
        env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "secrets.sid".to_string())
    }

    /// 쿠키 서명에 사용할 비밀값
    pub fn secret() -> String {
        env::var("SESSION_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("SESSION_SECRET not set, using default (not secure for production!)");
                "Our little secret.".to_string()
            })
    }

    /// 세션 유효 시간(시간 단위). 기본값: 24
    pub fn ttl_hours() -> u64 {
        env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&h| h > 0)
            .unwrap_or(24)
    }

    pub fn ttl_seconds() -> u64 {
        hours_to_seconds(Self::ttl_hours())
    }
}

/// 사용자가 인증된 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    /// 사용자명/비밀번호 로컬 인증
    Local,

    /// Google OAuth 2.0
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
        }
    }
}

/// 범위를 넘으면 `u64::MAX`초로 고정합니다.
fn hours_to_seconds(hours: u64) -> u64 {
    hours.saturating_mul(60 * 60)
}

fn required_var(name: &str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::ConfigError(format!("{} must be set", name))),
    }
}
