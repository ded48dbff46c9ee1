//! 요청 범위 인증 컨텍스트
//!
//! 세션 미들웨어는 요청마다 [`SessionContext`]를 한 번 만들어 request extension에
//! 넣고, 이후 핸들러는 이 불변 값을 추출자로 꺼내 씁니다.

use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;

/// 현재 요청의 세션 상태
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// 서명 검증을 통과한 세션 ID. 쿠키가 없거나 위조되었으면 `None`
    pub session_id: Option<String>,
    /// 세션에 연결된 사용자. 익명이거나 사용자가 사라졌으면 `None`
    pub user: Option<User>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// 미들웨어가 없는 경로에서도 익명 컨텍스트로 동작합니다.
impl FromRequest for SessionContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let context = req
            .extensions()
            .get::<SessionContext>()
            .cloned()
            .unwrap_or_default();
        ready(Ok(context))
    }
}

/// 인증이 필요한 핸들러용 추출자
///
/// 세션에 사용자가 없으면 `AppError::UnauthenticatedAccess`로 실패하며,
/// 이 에러는 `/login` 리다이렉트로 응답됩니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<SessionContext>()
            .and_then(|context| context.user.clone());

        match user {
            Some(user) => ready(Ok(AuthenticatedUser(user))),
            None => {
                log::warn!("인증되지 않은 접근 거부: {} {}", req.method(), req.path());
                ready(Err(AppError::UnauthenticatedAccess))
            }
        }
    }
}

/// 인증 여부와 관계없이 현재 사용자를 꺼내는 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<User>);

impl FromRequest for OptionalUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<SessionContext>()
            .and_then(|context| context.user.clone());
        ready(Ok(OptionalUser(user)))
    }
}
