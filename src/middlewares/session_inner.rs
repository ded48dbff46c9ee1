use std::rc::Rc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::core::AppContext;
use crate::domain::models::auth::SessionContext;

pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let context = resolve_session(&req).await;
            req.extensions_mut().insert(context);

            service.call(req).await
        })
    }
}

/// 쿠키 → 세션 ID → 사용자 순으로 해석합니다. 어느 단계든 실패하면 익명입니다.
async fn resolve_session(req: &ServiceRequest) -> SessionContext {
    let Some(app) = req.app_data::<web::Data<AppContext>>().cloned() else {
        log::error!("AppContext가 등록되지 않았습니다: {}", req.path());
        return SessionContext::anonymous();
    };

    let sessions = &app.sessions;
    let Some(session_id) = req
        .cookie(sessions.cookie().name())
        .and_then(|cookie| sessions.cookie().verify(cookie))
    else {
        return SessionContext::anonymous();
    };

    match sessions.resolve(&session_id).await {
        Ok(user) => SessionContext {
            session_id: Some(session_id),
            user,
        },
        Err(e) => {
            // 세션 저장소 장애 시에도 공개 페이지는 계속 제공합니다.
            log::error!("세션 조회 실패, 익명으로 처리: {}", e);
            SessionContext::anonymous()
        }
    }
}
