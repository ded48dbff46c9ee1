//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽어오며, 개발 환경에서만 안전한 기본값을 가집니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 저장소, 서버, 패스워드 해싱, Rate Limiting 설정
//! - [`auth_config`] - Google OAuth, 세션 쿠키 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="3000"
//!
//! # 저장소 (mongo | memory)
//! export STORAGE_BACKEND="mongo"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="userDB"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 세션
//! export SESSION_SECRET="change-me"
//! export SESSION_TTL_HOURS="24"
//!
//! # Google OAuth (사용 시)
//! export GOOGLE_CLIENT_ID="your-client-id"
//! export GOOGLE_CLIENT_SECRET="your-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:3000/auth/google/callback"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
