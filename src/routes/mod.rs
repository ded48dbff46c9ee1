//! 라우트 설정 모듈
//!
//! 모든 HTTP 엔드포인트를 한 곳에서 등록합니다. 세션 해석은
//! [`SessionMiddleware`](crate::middlewares::SessionMiddleware)가 앱 전체에 대해
//! 수행하므로 여기서는 경로와 핸들러만 연결합니다.

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::login_page)
        .service(handlers::pages::register_page)
        .service(handlers::pages::secrets_page)
        .service(handlers::pages::submit_page)
        .service(handlers::pages::submit_secret);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    // 로컬 인증
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::logout);

    // Google OAuth. `/auth/google/secrets`는 Google 콘솔에 예전 콜백 주소가 등록된 경우용
    cfg.service(handlers::auth::google_start)
        .service(
            web::resource(["/auth/google/callback", "/auth/google/secrets"])
                .route(web::get().to(handlers::auth::google_callback)),
        );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "secrets_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{
        cookie::Cookie,
        dev::ServiceResponse,
        http::{header, StatusCode},
        test, App,
    };
    use async_trait::async_trait;
    use crate::{
        core::{AppContext, ContextSettings},
        domain::{
            entities::users::user::User,
            models::{oauth::google_user::GoogleUserInfo, session::SessionData},
        },
        errors::errors::{AppError, AppResult},
        middlewares::SessionMiddleware,
        repositories::{
            sessions::{MemorySessionStore, SessionStore},
            users::{MemoryUserStore, UserStore},
        },
        services::auth::{DisabledOAuthClient, OAuthProviderClient, SessionCookie},
    };

    const COOKIE_NAME: &str = "secrets.sid";

    /// `code-for-{sub}` 형태의 code만 받아주는 가짜 Google
    struct FakeGoogle;

    #[async_trait]
    impl OAuthProviderClient for FakeGoogle {
        fn authorize_url(&self, state: &str) -> AppResult<String> {
            Ok(format!("https://accounts.example.test/o/oauth2/auth?scope=profile&state={}", state))
        }

        async fn exchange_code(&self, code: &str) -> AppResult<GoogleUserInfo> {
            match code.strip_prefix("code-for-") {
                Some(sub) => Ok(GoogleUserInfo {
                    sub: sub.to_string(),
                    name: None,
                    picture: None,
                }),
                None => Err(AppError::OAuthExchangeFailure("invalid_grant".to_string())),
            }
        }
    }

    /// 모든 호출이 실패하는 사용자 저장소
    struct UnavailableUserStore;

    #[async_trait]
    impl UserStore for UnavailableUserStore {
        async fn find_by_id(&self, _id: &str) -> AppResult<Option<User>> {
            Err(AppError::DatabaseUnavailable("connection refused".to_string()))
        }

        async fn find_by_username(&self, _username: &str) -> AppResult<Option<User>> {
            Err(AppError::DatabaseUnavailable("connection refused".to_string()))
        }

        async fn create(&self, _user: User) -> AppResult<User> {
            Err(AppError::DatabaseUnavailable("connection refused".to_string()))
        }

        async fn find_or_create_by_external_id(&self, _external_id: &str) -> AppResult<User> {
            Err(AppError::DatabaseUnavailable("connection refused".to_string()))
        }

        async fn update_secret(&self, _id: &str, _secret: &str) -> AppResult<Option<User>> {
            Err(AppError::DatabaseUnavailable("connection refused".to_string()))
        }

        async fn find_with_secret(&self) -> AppResult<Vec<User>> {
            Err(AppError::DatabaseUnavailable("connection refused".to_string()))
        }
    }

    /// 모든 호출이 실패하는 세션 저장소
    struct UnavailableSessionStore;

    #[async_trait]
    impl SessionStore for UnavailableSessionStore {
        async fn load(&self, _session_id: &str) -> AppResult<Option<SessionData>> {
            Err(AppError::SessionStoreError("connection refused".to_string()))
        }

        async fn save(&self, _session_id: &str, _data: &SessionData, _ttl_seconds: u64) -> AppResult<()> {
            Err(AppError::SessionStoreError("connection refused".to_string()))
        }

        async fn destroy(&self, _session_id: &str) -> AppResult<()> {
            Err(AppError::SessionStoreError("connection refused".to_string()))
        }
    }

    fn settings() -> ContextSettings {
        ContextSettings {
            bcrypt_cost: 4,
            session_ttl_seconds: 3600,
            cookie: SessionCookie::new(COOKIE_NAME, "route test secret", 3600, false),
        }
    }

    fn test_context() -> (AppContext, Arc<MemoryUserStore>) {
        let users = Arc::new(MemoryUserStore::new());
        let context = AppContext::new(
            users.clone(),
            Arc::new(MemorySessionStore::new()),
            Arc::new(FakeGoogle),
            settings(),
        );
        (context, users)
    }

    macro_rules! test_app {
        ($context:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($context))
                    .wrap(SessionMiddleware)
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    fn location<B>(resp: &ServiceResponse<B>) -> String {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
        resp.response()
            .cookies()
            .find(|cookie| cookie.name() == COOKIE_NAME)
            .map(|cookie| cookie.into_owned())
    }

    async fn body_text<B: actix_web::body::MessageBody>(resp: ServiceResponse<B>) -> String {
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    fn form_post(uri: &str, fields: &[(&str, &str)], cookie: Option<&Cookie<'static>>) -> test::TestRequest {
        let req = test::TestRequest::post().uri(uri).set_form(fields);
        match cookie {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        }
    }

    fn get(uri: &str, cookie: Option<&Cookie<'static>>) -> test::TestRequest {
        let req = test::TestRequest::get().uri(uri);
        match cookie {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        }
    }

    #[actix_web::test]
    async fn test_health_check() {
        let (context, _) = test_context();
        let app = test_app!(context);

        let resp = test::call_service(&app, get("/health", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("healthy"));
    }

    #[actix_web::test]
    async fn test_public_pages_render_for_anonymous_visitors() {
        let (context, _) = test_context();
        let app = test_app!(context);

        for uri in ["/", "/login", "/register", "/secrets"] {
            let resp = test::call_service(&app, get(uri, None).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
            assert!(!body_text(resp).await.contains("Log Out"), "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_register_then_submit_without_separate_login() {
        let (context, _) = test_context();
        let app = test_app!(context);

        let resp = test::call_service(
            &app,
            form_post("/register", &[("username", "alice"), ("password", "wonderland")], None).to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/secrets");
        let cookie = session_cookie(&resp).expect("가입 직후 세션 쿠키");

        let resp = test::call_service(&app, get("/submit", Some(&cookie)).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("name=\"secret\""));

        let resp = test::call_service(
            &app,
            form_post("/submit", &[("secret", "hello")], Some(&cookie)).to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/secrets");

        // 로그아웃한 방문자도 목록을 볼 수 있습니다.
        let resp = test::call_service(&app, get("/secrets", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("hello"));
    }

    #[actix_web::test]
    async fn test_login_accepts_only_correct_password() {
        let (context, _) = test_context();
        let app = test_app!(context);

        test::call_service(
            &app,
            form_post("/register", &[("username", "alice"), ("password", "wonderland")], None).to_request(),
        ).await;

        let resp = test::call_service(
            &app,
            form_post("/login", &[("username", "alice"), ("password", "looking-glass")], None).to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login");
        assert!(session_cookie(&resp).is_none());

        let resp = test::call_service(
            &app,
            form_post("/login", &[("username", "nobody"), ("password", "wonderland")], None).to_request(),
        ).await;
        assert_eq!(location(&resp), "/login");

        let resp = test::call_service(
            &app,
            form_post("/login", &[("username", "alice"), ("password", "wonderland")], None).to_request(),
        ).await;
        assert_eq!(location(&resp), "/secrets");
        let cookie = session_cookie(&resp).unwrap();

        let resp = test::call_service(&app, get("/submit", Some(&cookie)).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_duplicate_registration_leaves_first_user_untouched() {
        let (context, users) = test_context();
        let app = test_app!(context);

        test::call_service(
            &app,
            form_post("/register", &[("username", "alice"), ("password", "first")], None).to_request(),
        ).await;
        let original = users.find_by_username("alice").await.unwrap().unwrap();

        let resp = test::call_service(
            &app,
            form_post("/register", &[("username", "alice"), ("password", "second")], None).to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/register");
        assert!(session_cookie(&resp).is_none());

        let stored = users.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.password_hash, original.password_hash);
        assert_eq!(users.user_count().unwrap(), 1);

        let resp = test::call_service(
            &app,
            form_post("/login", &[("username", "alice"), ("password", "first")], None).to_request(),
        ).await;
        assert_eq!(location(&resp), "/secrets");
    }

    #[actix_web::test]
    async fn test_invalid_registration_form_redirects_back() {
        let (context, users) = test_context();
        let app = test_app!(context);

        let resp = test::call_service(
            &app,
            form_post("/register", &[("username", "   "), ("password", "pw")], None).to_request(),
        ).await;
        assert_eq!(location(&resp), "/register");
        assert_eq!(users.user_count().unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_submit_requires_session() {
        let (context, users) = test_context();
        let app = test_app!(context);

        let resp = test::call_service(&app, get("/submit", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login");

        let resp = test::call_service(&app, form_post("/submit", &[("secret", "sneaky")], None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login");
        assert!(users.find_with_secret().await.unwrap().is_empty());

        // 서명되지 않은 쿠키는 없는 것과 같습니다.
        let forged = Cookie::new(COOKIE_NAME, "forged-session-id");
        let resp = test::call_service(&app, get("/submit", Some(&forged)).to_request()).await;
        assert_eq!(location(&resp), "/login");
    }

    #[actix_web::test]
    async fn test_logout_ends_session() {
        let (context, _) = test_context();
        let app = test_app!(context);

        let resp = test::call_service(
            &app,
            form_post("/register", &[("username", "alice"), ("password", "wonderland")], None).to_request(),
        ).await;
        let cookie = session_cookie(&resp).unwrap();

        let resp = test::call_service(&app, get("/logout", Some(&cookie)).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/");
        assert_eq!(session_cookie(&resp).map(|c| c.value().to_string()), Some(String::new()));

        // 이전 쿠키를 다시 보내도 세션은 이미 끝났습니다.
        let resp = test::call_service(&app, get("/submit", Some(&cookie)).to_request()).await;
        assert_eq!(location(&resp), "/login");
    }

    #[actix_web::test]
    async fn test_secrets_lists_exactly_users_with_secret() {
        let (context, users) = test_context();
        let app = test_app!(context);

        for (name, secret) in [("alice", Some("alice-secret")), ("bob", None), ("carol", Some("carol-secret"))] {
            let resp = test::call_service(
                &app,
                form_post("/register", &[("username", name), ("password", "pw")], None).to_request(),
            ).await;
            let cookie = session_cookie(&resp).unwrap();
            if let Some(secret) = secret {
                test::call_service(&app, form_post("/submit", &[("secret", secret)], Some(&cookie)).to_request()).await;
            }
        }
        assert_eq!(users.find_with_secret().await.unwrap().len(), 2);

        let body = body_text(test::call_service(&app, get("/secrets", None).to_request()).await).await;
        assert!(body.contains("alice-secret"));
        assert!(body.contains("carol-secret"));
        assert_eq!(body.matches("class=\"secret-text\"").count(), 2);
    }

    #[actix_web::test]
    async fn test_authenticated_pages_show_log_out() {
        let (context, _) = test_context();
        let app = test_app!(context);

        let resp = test::call_service(
            &app,
            form_post("/register", &[("username", "alice"), ("password", "pw")], None).to_request(),
        ).await;
        let cookie = session_cookie(&resp).unwrap();

        let resp = test::call_service(&app, get("/", Some(&cookie)).to_request()).await;
        assert!(body_text(resp).await.contains("Log Out"));
    }

    /// `/auth/google` 시작부터 콜백까지 한 번에 진행하고 콜백 응답을 돌려줍니다.
    macro_rules! google_login {
        ($app:expr, $sub:expr) => {{
            let resp = test::call_service(&$app, get("/auth/google", None).to_request()).await;
            assert_eq!(resp.status(), StatusCode::FOUND);
            let state = location(&resp).split("state=").nth(1).unwrap().to_string();
            let oauth_cookie = session_cookie(&resp).unwrap();

            let uri = format!("/auth/google/callback?code=code-for-{}&state={}", $sub, state);
            test::call_service(&$app, get(&uri, Some(&oauth_cookie)).to_request()).await
        }};
    }

    #[actix_web::test]
    async fn test_google_login_redirects_to_provider_with_state() {
        let (context, _) = test_context();
        let app = test_app!(context);

        let resp = test::call_service(&app, get("/auth/google", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert!(location(&resp).starts_with("https://accounts.example.test/o/oauth2/auth?"));
        assert!(location(&resp).contains("state="));
        assert!(session_cookie(&resp).is_some());
    }

    #[actix_web::test]
    async fn test_same_external_id_twice_maps_to_one_user() {
        let (context, users) = test_context();
        let app = test_app!(context);

        let first = google_login!(app, "google-sub-42");
        assert_eq!(first.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&first), "/secrets");
        let first_cookie = session_cookie(&first).unwrap();

        let second = google_login!(app, "google-sub-42");
        assert_eq!(location(&second), "/secrets");
        assert_eq!(users.user_count().unwrap(), 1);

        let resp = test::call_service(
            &app,
            form_post("/submit", &[("secret", "from google")], Some(&first_cookie)).to_request(),
        ).await;
        assert_eq!(location(&resp), "/secrets");

        let stored = users.find_or_create_by_external_id("google-sub-42").await.unwrap();
        assert_eq!(stored.secret.as_deref(), Some("from google"));
    }

    #[actix_web::test]
    async fn test_oauth_callback_rejections_redirect_to_login() {
        let (context, users) = test_context();
        let app = test_app!(context);

        // 시작하지 않은 흐름
        let resp = test::call_service(
            &app,
            get("/auth/google/callback?code=code-for-x&state=whatever", None).to_request(),
        ).await;
        assert_eq!(location(&resp), "/login");

        // state 불일치
        let resp = test::call_service(&app, get("/auth/google", None).to_request()).await;
        let cookie = session_cookie(&resp).unwrap();
        let resp = test::call_service(
            &app,
            get("/auth/google/callback?code=code-for-x&state=not-the-state", Some(&cookie)).to_request(),
        ).await;
        assert_eq!(location(&resp), "/login");

        // 제공자 거부
        let resp = test::call_service(&app, get("/auth/google", None).to_request()).await;
        let cookie = session_cookie(&resp).unwrap();
        let resp = test::call_service(
            &app,
            get("/auth/google/callback?error=access_denied", Some(&cookie)).to_request(),
        ).await;
        assert_eq!(location(&resp), "/login");

        assert_eq!(users.user_count().unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_oauth_state_cannot_be_replayed() {
        let (context, users) = test_context();
        let app = test_app!(context);

        let resp = test::call_service(&app, get("/auth/google", None).to_request()).await;
        let state = location(&resp).split("state=").nth(1).unwrap().to_string();
        let cookie = session_cookie(&resp).unwrap();

        let uri = format!("/auth/google/secrets?code=code-for-replay&state={}", state);
        let resp = test::call_service(&app, get(&uri, Some(&cookie)).to_request()).await;
        assert_eq!(location(&resp), "/secrets");

        let resp = test::call_service(&app, get(&uri, Some(&cookie)).to_request()).await;
        assert_eq!(location(&resp), "/login");
        assert_eq!(users.user_count().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_secrets_page_reports_database_outage() {
        let context = AppContext::new(
            Arc::new(UnavailableUserStore),
            Arc::new(MemorySessionStore::new()),
            Arc::new(FakeGoogle),
            settings(),
        );
        let app = test_app!(context);

        let resp = test::call_service(&app, get("/secrets", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_password_sharing_bcrypt_prefix_does_not_log_in() {
        let (context, users) = test_context();
        let app = test_app!(context);
        let prefix = "a".repeat(72);

        let long = format!("{}ONE", prefix);
        let resp = test::call_service(
            &app,
            form_post("/register", &[("username", "u"), ("password", long.as_str())], None).to_request(),
        ).await;
        assert_eq!(location(&resp), "/register");
        assert!(session_cookie(&resp).is_none());
        assert_eq!(users.user_count().unwrap(), 0);

        let resp = test::call_service(
            &app,
            form_post("/register", &[("username", "u"), ("password", prefix.as_str())], None).to_request(),
        ).await;
        assert_eq!(location(&resp), "/secrets");

        let other = format!("{}TWO-different", prefix);
        let resp = test::call_service(
            &app,
            form_post("/login", &[("username", "u"), ("password", other.as_str())], None).to_request(),
        ).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login");
        assert!(session_cookie(&resp).is_none());
    }

    #[actix_web::test]
    async fn test_disabled_google_login_leaves_no_session_behind() {
        let sessions = Arc::new(MemorySessionStore::new());
        let context = AppContext::new(
            Arc::new(MemoryUserStore::new()),
            sessions.clone(),
            Arc::new(DisabledOAuthClient),
            settings(),
        );
        let app = test_app!(context);

        for _ in 0..50 {
            let resp = test::call_service(&app, get("/auth/google", None).to_request()).await;
            assert_eq!(resp.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&resp), "/login");
            assert!(session_cookie(&resp).is_none());
        }
        assert_eq!(sessions.active_count(), 0);
    }

    #[actix_web::test]
    async fn test_session_store_outage_is_treated_as_anonymous() {
        let context = AppContext::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(UnavailableSessionStore),
            Arc::new(FakeGoogle),
            settings(),
        );
        let cookie = settings().cookie.issue("some-session-id").unwrap();
        let app = test_app!(context);

        let resp = test::call_service(&app, get("/secrets", Some(&cookie)).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(!body_text(resp).await.contains("Log Out"));

        let resp = test::call_service(&app, get("/submit", Some(&cookie)).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login");

        let resp = test::call_service(&app, form_post("/submit", &[("secret", "x")], Some(&cookie)).to_request()).await;
        assert_eq!(location(&resp), "/login");
    }

    #[actix_web::test]
    async fn test_whitespace_only_secret_is_rejected() {
        let (context, users) = test_context();
        let app = test_app!(context);

        let resp = test::call_service(
            &app,
            form_post("/register", &[("username", "alice"), ("password", "wonderland")], None).to_request(),
        ).await;
        let cookie = session_cookie(&resp).unwrap();

        let resp = test::call_service(&app, form_post("/submit", &[("secret", "   ")], Some(&cookie)).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(users.find_with_secret().await.unwrap().is_empty());
    }
}
