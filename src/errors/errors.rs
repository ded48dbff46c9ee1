//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 브라우저를 상대하는 서비스이므로 인증 관련 에러는 구조화된 에러 응답 대신
//! 중립적인 페이지(`/login`, `/register`)로의 리다이렉트로 변환됩니다.
//! 저장소 에러는 명시적인 503 응답이 됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn register(&self, form: RegisterForm) -> Result<User, AppError> {
//!     if self.users.find_by_username(&form.username).await?.is_some() {
//!         return Err(AppError::DuplicateUsername);
//!     }
//!     // ...
//! }
//! ```

use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Username is already registered")]
    DuplicateUsername,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("OAuth exchange failed: {0}")]
    OAuthExchangeFailure(String),

    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    #[error("Authentication required")]
    UnauthenticatedAccess,

    #[error("Session store error: {0}")]
    SessionStoreError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 이 에러가 사용자를 돌려보낼 페이지. 리다이렉트 대상이 아니면 `None`
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            AppError::DuplicateUsername => Some("/register"),
            AppError::InvalidCredentials
            | AppError::OAuthExchangeFailure(_)
            | AppError::UnauthenticatedAccess => Some("/login"),
            _ => None,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateUsername
            | AppError::InvalidCredentials
            | AppError::OAuthExchangeFailure(_)
            | AppError::UnauthenticatedAccess => StatusCode::SEE_OTHER,
            AppError::DatabaseUnavailable(_) | AppError::SessionStoreError(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Some(location) = self.redirect_target() {
            return HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish();
        }

        // 내부 상세 정보는 로그에만 남기고 응답에는 노출하지 않습니다.
        log::error!("요청 처리 실패: {}", self);
        let message = match self {
            AppError::DatabaseUnavailable(_) | AppError::SessionStoreError(_) => {
                "Service temporarily unavailable. Please try again later."
            }
            AppError::ValidationError(_) => "The submitted form was not valid.",
            _ => "Something went wrong.",
        };

        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(message)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseUnavailable(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::SessionStoreError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
