//! 사용자 서비스 모듈
//!
//! 사용자가 제출한 비밀의 저장과 공개 목록 조회를 담당합니다.

pub mod user_service;

pub use user_service::UserService;
