//! # 페이지 핸들러
//!
//! 서버 렌더링 페이지를 제공합니다. `/submit`을 제외한 모든 페이지는 공개입니다.
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `GET` | `/` | - | 랜딩 페이지 |
//! | `GET` | `/login` | - | 로그인 폼 |
//! | `GET` | `/register` | - | 회원가입 폼 |
//! | `GET` | `/secrets` | - | 모든 사용자의 비밀 목록 |
//! | `GET` | `/submit` | 필수 | 비밀 제출 폼 |
//! | `POST` | `/submit` | 필수 | 비밀 저장 후 `/secrets`로 이동 |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::AppContext,
    domain::{
        dto::users::request::SubmitSecretForm,
        models::auth::{AuthenticatedUser, OptionalUser},
    },
    errors::errors::AppError,
    handlers::{
        redirect_see_other,
        views::{render, HomeTemplate, LoginTemplate, RegisterTemplate, SecretsTemplate, SubmitTemplate},
    },
};

#[get("/")]
pub async fn home(OptionalUser(user): OptionalUser) -> Result<HttpResponse, AppError> {
    render(&HomeTemplate { authenticated: user.is_some() })
}

#[get("/login")]
pub async fn login_page(OptionalUser(user): OptionalUser) -> Result<HttpResponse, AppError> {
    render(&LoginTemplate { authenticated: user.is_some() })
}

#[get("/register")]
pub async fn register_page(OptionalUser(user): OptionalUser) -> Result<HttpResponse, AppError> {
    render(&RegisterTemplate { authenticated: user.is_some() })
}

/// 데이터베이스를 사용할 수 없으면 `503 Service Unavailable`
#[get("/secrets")]
pub async fn secrets_page(
    app: web::Data<AppContext>,
    OptionalUser(user): OptionalUser,
) -> Result<HttpResponse, AppError> {
    let secrets = app.users.list_secrets().await?;

    render(&SecretsTemplate {
        authenticated: user.is_some(),
        secrets,
    })
}

#[get("/submit")]
pub async fn submit_page(_user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    render(&SubmitTemplate { authenticated: true })
}

#[post("/submit")]
pub async fn submit_secret(
    app: web::Data<AppContext>,
    AuthenticatedUser(user): AuthenticatedUser,
    form: web::Form<SubmitSecretForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()?;

    app.users.submit_secret(&user, &form.secret).await?;

    Ok(redirect_see_other("/secrets"))
}
