//! HTTP 미들웨어 모듈
//!
//! - [`session_middleware::SessionMiddleware`] - 세션 쿠키를 요청 범위 인증 컨텍스트로 변환

pub mod session_middleware;
mod session_inner;

pub use session_middleware::SessionMiddleware;
