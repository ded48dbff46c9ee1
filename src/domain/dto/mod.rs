//! DTO (Data Transfer Object) 모듈
//!
//! HTML 폼/쿼리 스트링으로 들어오는 요청과 외부 OAuth API 응답을 매핑합니다.

pub mod users;

