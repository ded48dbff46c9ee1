//! Google OAuth 응답 DTO 모듈
//!
//! Authorization Code Grant의 토큰 교환 응답을 정의합니다.

use serde::Deserialize;

/// `https://oauth2.googleapis.com/token` 응답
///
/// 이 서비스는 프로필 조회에 `access_token`만 사용합니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}
