//! # 인증 핸들러
//!
//! 로컬 회원가입/로그인/로그아웃과 Google OAuth 2.0 로그인 흐름을 처리합니다.
//! 인증 실패는 JSON 에러 대신 폼 페이지로의 `303 See Other` 리다이렉트로 응답합니다.
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/register` | `/secrets` | `/register` |
//! | `POST` | `/login` | `/secrets` | `/login` |
//! | `GET` | `/logout` | `/` | - |
//! | `GET` | `/auth/google` | Google 동의 화면 | `/login` |
//! | `GET` | `/auth/google/callback` | `/secrets` | `/login` |
//!
//! 로그인에 성공하면 세션 ID가 새로 발급되고 이전 세션은 폐기됩니다.

use actix_web::{get, http::header, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::AppContext,
    domain::{
        dto::users::request::{LoginForm, OAuthCallbackQuery, RegisterForm},
        models::auth::{Credentials, Identity, SessionContext},
    },
    errors::errors::{AppError, AppResult},
    handlers::redirect_see_other,
    services::auth::SessionService,
};

#[post("/register")]
pub async fn register(
    app: web::Data<AppContext>,
    context: SessionContext,
    form: web::Form<RegisterForm>,
) -> Result<HttpResponse, AppError> {
    if let Err(e) = form.validate() {
        log::warn!("회원가입 입력 검증 실패: {}", e);
        return Ok(redirect_see_other("/register"));
    }

    let identity = match app.auth.register(&form).await {
        Ok(identity) => identity,
        Err(AppError::DuplicateUsername | AppError::ValidationError(_)) => {
            return Ok(redirect_see_other("/register"));
        }
        Err(e) => return Err(e),
    };

    // 가입 직후 별도 로그인 없이 세션을 만듭니다.
    establish_session(&app, &context, &identity, "/secrets").await
}

#[post("/login")]
pub async fn login(
    app: web::Data<AppContext>,
    context: SessionContext,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    if let Err(e) = form.validate() {
        log::warn!("로그인 입력 검증 실패: {}", e);
        return Ok(redirect_see_other("/login"));
    }

    let form = form.into_inner();
    let identity = match app.auth.authenticate(Credentials::local(form.username, form.password)).await {
        Ok(identity) => identity,
        Err(AppError::InvalidCredentials) => return Ok(redirect_see_other("/login")),
        Err(e) => return Err(e),
    };

    establish_session(&app, &context, &identity, "/secrets").await
}

#[get("/logout")]
pub async fn logout(app: web::Data<AppContext>, context: SessionContext) -> HttpResponse {
    if let Some(session_id) = context.session_id.as_deref() {
        if let Err(e) = app.sessions.logout(session_id).await {
            // 브라우저 쿠키는 어떤 경우에도 지웁니다.
            log::error!("세션 삭제 실패: {}", e);
        }
    }

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(app.sessions.cookie().removal())
        .finish()
}

/// Google 동의 화면으로 보냅니다.
#[get("/auth/google")]
pub async fn google_start(app: web::Data<AppContext>, context: SessionContext) -> HttpResponse {
    match start_google_login(&app, &context).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Google 로그인 시작 실패: {}", e);
            redirect_see_other("/login")
        }
    }
}

/// 동의 화면 URL을 먼저 만들고, 성공한 경우에만 state를 세션에 저장합니다.
async fn start_google_login(app: &AppContext, context: &SessionContext) -> AppResult<HttpResponse> {
    let state = SessionService::new_oauth_state();
    let authorize_url = app.auth.google_authorize_url(&state)?;
    let session_id = app.sessions.begin_oauth(context.session_id.as_deref(), &state).await?;
    let cookie = app.sessions.cookie().issue(&session_id)?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, authorize_url))
        .cookie(cookie)
        .finish())
}

/// Google OAuth 콜백. `/auth/google/callback`과 `/auth/google/secrets` 두 경로에 등록됩니다.
pub async fn google_callback(
    app: web::Data<AppContext>,
    context: SessionContext,
    query: web::Query<OAuthCallbackQuery>,
) -> HttpResponse {
    match complete_google_login(&app, &context, query.into_inner()).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Google 로그인 실패: {}", e);
            redirect_see_other("/login")
        }
    }
}

async fn complete_google_login(
    app: &AppContext,
    context: &SessionContext,
    query: OAuthCallbackQuery,
) -> AppResult<HttpResponse> {
    if let Some(error) = query.error {
        return Err(AppError::OAuthExchangeFailure(format!("제공자가 거부함: {}", error)));
    }

    let session_id = context
        .session_id
        .as_deref()
        .ok_or_else(|| AppError::OAuthExchangeFailure("OAuth 시작 세션이 없습니다".to_string()))?;

    // state는 일치 여부와 관계없이 한 번 꺼내면 사라집니다.
    let expected_state = app.sessions.take_oauth_state(session_id).await?;
    match (expected_state.as_deref(), query.state.as_deref()) {
        (Some(expected), Some(received)) if expected == received => {}
        _ => return Err(AppError::OAuthExchangeFailure("OAuth state 불일치".to_string())),
    }

    let code = query
        .code
        .ok_or_else(|| AppError::OAuthExchangeFailure("authorization code가 없습니다".to_string()))?;

    let identity = app.auth.authenticate(Credentials::oauth(code)).await?;

    establish_session(app, context, &identity, "/secrets").await
}

/// 새 세션을 만들고 서명된 쿠키와 함께 `location`으로 리다이렉트합니다.
async fn establish_session(
    app: &AppContext,
    context: &SessionContext,
    identity: &Identity,
    location: &str,
) -> AppResult<HttpResponse> {
    let user_id = identity
        .user_id()
        .ok_or_else(|| AppError::InternalError("인증된 사용자에 ID가 없습니다".to_string()))?;

    let session_id = app.sessions.login(context.session_id.as_deref(), &user_id).await?;
    let cookie = app.sessions.cookie().issue(&session_id)?;

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .cookie(cookie)
        .finish())
}
