//! 인증 요청관련 DTO
//!
//! 로그인/회원가입 폼과 OAuth 콜백 쿼리 파라미터를 매핑합니다.
use std::borrow::Cow;
use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

/// bcrypt가 실제로 해시에 반영하는 최대 입력 길이(바이트)
pub const MAX_PASSWORD_BYTES: usize = 72;

/// 글자 수가 아니라 UTF-8 바이트 수로 비밀번호 길이를 제한합니다.
fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message(Cow::from("비밀번호는 72바이트 이하여야 합니다")));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 64, message = "사용자명은 1-64자여야 합니다"))]
    pub username: String,

    #[validate(
        length(min = 1, message = "비밀번호를 입력해주세요"),
        custom(function = "validate_password_bytes")
    )]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(
        length(min = 1, message = "비밀번호를 입력해주세요"),
        custom(function = "validate_password_bytes")
    )]
    pub password: String,
}

/// Google이 리다이렉트하며 붙여주는 쿼리 파라미터
///
/// 사용자가 동의를 거부하면 `code` 대신 `error`가 옵니다.
#[derive(Debug, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error: Option<String>,
}
