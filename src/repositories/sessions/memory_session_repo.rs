//! 메모리 세션 저장소
//!
//! 만료된 세션은 조회 시점에 걸러지고, 저장할 때마다 한꺼번에 정리됩니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use crate::{
    domain::models::session::SessionData,
    errors::errors::{AppError, AppResult},
    repositories::sessions::session_store::SessionStore,
};

const MAX_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

struct SessionEntry {
    data: SessionData,
    expires_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 만료되지 않은 세션 수
    pub fn active_count(&self) -> usize {
        let now = Utc::now();
        self.sessions
            .read()
            .map(|sessions| sessions.values().filter(|e| e.expires_at > now).count())
            .unwrap_or(0)
    }
}

fn poisoned() -> AppError {
    AppError::SessionStoreError("세션 저장소 잠금 오염".to_string())
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionData>> {
        let sessions = self.sessions.read().map_err(|_| poisoned())?;
        Ok(sessions
            .get(session_id)
            .filter(|entry| entry.expires_at > Utc::now())
            .map(|entry| entry.data.clone()))
    }

    async fn save(&self, session_id: &str, data: &SessionData, ttl_seconds: u64) -> AppResult<()> {
        let now = Utc::now();
        let ttl = Duration::seconds(ttl_seconds.min(MAX_TTL_SECONDS) as i64);

        let mut sessions = self.sessions.write().map_err(|_| poisoned())?;
        sessions.retain(|_, entry| entry.expires_at > now);
        sessions.insert(
            session_id.to_string(),
            SessionEntry {
                data: data.clone(),
                expires_at: now + ttl,
            },
        );
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> AppResult<()> {
        self.sessions.write().map_err(|_| poisoned())?.remove(session_id);
        Ok(())
    }
}
