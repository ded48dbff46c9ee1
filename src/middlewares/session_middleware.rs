//! # 세션 미들웨어
//!
//! 요청마다 서명된 세션 쿠키를 확인하고, 세션이 가리키는 사용자를 조회하여
//! [`SessionContext`](crate::domain::models::auth::SessionContext)를 request
//! extension에 넣습니다.
//!
//! 이 미들웨어는 요청을 막지 않습니다. 인증이 필요한 핸들러는
//! [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser) 추출자로
//! 직접 거부합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(context))
//!     .wrap(SessionMiddleware)
//!     .configure(configure_all_routes)
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::session_inner::SessionMiddlewareService;

pub struct SessionMiddleware;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
