//! Redis 연결 래퍼
//!
//! 값은 JSON 문자열로 저장합니다. 모든 요청이 [`ConnectionManager`] 하나의
//! 멀티플렉스 연결을 공유하며, 연결이 끊기면 매니저가 다시 연결합니다.

use redis::{aio::ConnectionManager, AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use crate::config::StorageConfig;

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL` 설정으로 연결하고 PING으로 서버 가용성을 확인합니다.
    pub async fn new() -> Result<Self, redis::RedisError> {
        Self::connect(&StorageConfig::redis_url()).await
    }

    pub async fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;

        let mut manager = client.get_connection_manager().await?;
        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }
}
