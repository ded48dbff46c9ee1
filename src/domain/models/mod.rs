//! 도메인 모델 모듈
//!
//! 저장소에 직접 매핑되는 엔티티가 아닌, 요청 처리 흐름에서 사용하는 모델들입니다.
//!
//! - [`auth`] - 요청 범위 인증 컨텍스트(`SessionContext`)와 자격 증명(`Credentials`)
//! - [`oauth`] - OAuth 프로바이더 프로필
//! - [`session`] - 서버 측 세션 레코드

pub mod auth;
pub mod oauth;
pub mod session;
