//! 세션 저장소 모듈
//!
//! - [`session_store::SessionStore`] - 세션 ID → [`SessionData`](crate::domain::models::session::SessionData) 계약
//! - [`redis_session_repo::RedisSessionStore`] - Redis 구현 (키: `session:{id}`, TTL 적용)
//! - [`memory_session_repo::MemorySessionStore`] - 프로세스 메모리 구현

pub mod session_store;
pub mod redis_session_repo;
pub mod memory_session_repo;

pub use session_store::SessionStore;
pub use redis_session_repo::RedisSessionStore;
pub use memory_session_repo::MemorySessionStore;
