//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소마다 trait을 두고, 운영용 구현(MongoDB, Redis)과 메모리 구현을 함께 제공합니다.
//! 서비스 계층은 `Arc<dyn UserStore>`, `Arc<dyn SessionStore>`만 알고 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserStore, MemoryUserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
//! let user = users.find_by_username("alice").await?;
//! ```

pub mod users;
pub mod sessions;
