//! # Core Module
//!
//! 애플리케이션 전체에서 공유하는 실행 컨텍스트를 제공합니다.
//!
//! ### [`context`] - 의존성 조립
//! - **AppContext**: 서비스 묶음. `web::Data`로 요청 처리 계층에 전달
//! - **ContextSettings**: bcrypt cost, 세션 TTL, 쿠키 서명 키
//! - **저장소 선택**: `STORAGE_BACKEND`에 따라 MongoDB/Redis 또는 메모리

pub mod context;

pub use context::{AppContext, ContextSettings};
