//! 사용자 관련 DTO
//!
//! - [`request`] - 회원가입/로그인/Secret 제출 폼, OAuth 콜백 쿼리
//! - [`response`] - Google 토큰 엔드포인트 응답

pub mod request;
pub mod response;

