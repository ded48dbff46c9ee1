//! 응답 DTO
//!
//! 외부 OAuth 프로바이더가 돌려주는 응답을 매핑합니다.

pub mod google_oauth_response;

pub use google_oauth_response::GoogleTokenResponse;
