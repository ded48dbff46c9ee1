//! Redis 세션 저장소

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    caching::redis::RedisClient,
    domain::models::session::SessionData,
    errors::errors::AppResult,
    repositories::sessions::session_store::SessionStore,
};

pub struct RedisSessionStore {
    redis: Arc<RedisClient>,
}

impl RedisSessionStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    fn key(session_id: &str) -> String {
        format!("session:{}", session_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionData>> {
        Ok(self.redis.get::<SessionData>(&Self::key(session_id)).await?)
    }

    async fn save(&self, session_id: &str, data: &SessionData, ttl_seconds: u64) -> AppResult<()> {
        Ok(self.redis
            .set_with_expiry(&Self::key(session_id), data, ttl_seconds)
            .await?)
    }

    async fn destroy(&self, session_id: &str) -> AppResult<()> {
        Ok(self.redis.del(&Self::key(session_id)).await?)
    }
}
