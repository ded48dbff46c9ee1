//! # Google OAuth 사용자 정보 모델
//!
//! userinfo 엔드포인트 응답 중 이 서비스가 사용하는 필드만 매핑합니다.
//! v3 엔드포인트는 `sub`, v2 엔드포인트는 `id`로 식별자를 내려주므로 둘 다 받습니다.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// 계정별로 고정된 Google 식별자
    #[serde(alias = "id")]
    pub sub: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub picture: Option<String>,
}
