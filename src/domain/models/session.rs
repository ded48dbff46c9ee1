//! 서버 측 세션 레코드
//!
//! 브라우저는 서명된 세션 ID만 쿠키로 가지고, 실제 상태는 세션 저장소에 있습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    /// 인증된 사용자의 ID (ObjectId hex)
    #[serde(default)]
    pub user_id: Option<String>,
    /// 진행 중인 OAuth 요청의 `state` 값. 콜백에서 한 번만 사용됩니다.
    #[serde(default)]
    pub oauth_state: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SessionData {
    pub fn new() -> Self {
        Self {
            user_id: None,
            oauth_state: None,
            created_at: Utc::now(),
        }
    }

    pub fn authenticated(user_id: String) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::new()
        }
    }

    /// 저장할 가치가 없는 빈 세션인지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.oauth_state.is_none()
    }
}

impl Default for SessionData {
    fn default() -> Self {
        Self::new()
    }
}
