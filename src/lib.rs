//! Secrets 백엔드
//!
//! 사용자가 익명으로 비밀을 공유하는 서버 렌더링 웹 애플리케이션입니다.
//! 사용자명/비밀번호 로그인과 Google OAuth 2.0 로그인을 지원하며,
//! 로그인 상태는 서명된 쿠키와 서버 측 세션으로 유지합니다.
//!
//! # Features
//!
//! - **로컬 인증**: bcrypt 해시 비밀번호, 가입 즉시 로그인
//! - **OAuth 2.0**: Google 로그인, Google 계정당 사용자 하나
//! - **세션**: Redis(또는 메모리)에 저장되는 서버 측 세션
//! - **MongoDB**: 사용자와 비밀 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지/폼 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middleware    │ ← 세션 쿠키 → SessionContext
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, askama 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 인증, 세션, 비밀 관리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use secrets_backend::core::AppContext;
//! use secrets_backend::domain::models::auth::Credentials;
//!
//! let context = AppContext::from_env().await?;
//! let identity = context.auth.authenticate(Credentials::local("alice", "wonderland")).await?;
//! let session_id = context.sessions.login(None, &identity.user_id().unwrap()).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
