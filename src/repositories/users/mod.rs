//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`user_store::UserStore`] - 자격 증명 저장소 계약
//! - [`user_repo::UserRepository`] - MongoDB `users` 컬렉션 구현
//! - [`memory_user_repo::MemoryUserStore`] - 프로세스 메모리 구현 (테스트, 로컬 개발)

pub mod user_store;
pub mod user_repo;
pub mod memory_user_repo;

pub use user_store::UserStore;
pub use user_repo::UserRepository;
pub use memory_user_repo::MemoryUserStore;
