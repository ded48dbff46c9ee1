//! Redis 클라이언트 모듈
//!
//! 세션 저장소가 사용하는 Redis 연결과 JSON 기반 객체 직렬화를 제공합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let redis = RedisClient::new().await?;
//! redis.set_with_expiry("session:abc", &session, 3600).await?;
//! let session: Option<SessionData> = redis.get("session:abc").await?;
//! redis.del("session:abc").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
