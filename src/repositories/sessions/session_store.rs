//! 세션 저장소 계약

use async_trait::async_trait;
use crate::domain::models::session::SessionData;
use crate::errors::errors::AppResult;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 만료되었거나 없는 세션은 `Ok(None)`
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionData>>;

    /// 세션을 저장하고 만료 시간을 `ttl_seconds` 뒤로 갱신합니다.
    async fn save(&self, session_id: &str, data: &SessionData, ttl_seconds: u64) -> AppResult<()>;

    /// 없는 세션을 지워도 에러가 아닙니다.
    async fn destroy(&self, session_id: &str) -> AppResult<()>;
}
