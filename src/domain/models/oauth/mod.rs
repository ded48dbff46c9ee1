//! OAuth 프로바이더 모델
//!
//! 현재 지원하는 프로바이더는 Google 하나입니다.

pub mod google_user;

pub use google_user::GoogleUserInfo;
