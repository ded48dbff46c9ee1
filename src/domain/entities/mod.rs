//! 도메인 엔티티 모듈
//!
//! MongoDB에 영구 저장되는 엔티티를 정의합니다.

pub mod users;

pub use users::user::User;
