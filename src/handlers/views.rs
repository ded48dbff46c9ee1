//! HTML 뷰 모델
//!
//! `templates/` 아래 askama 템플릿과 1:1로 대응합니다. 모든 페이지는
//! 헤더 메뉴(로그인/로그아웃)를 위해 `authenticated`를 받습니다.

use actix_web::{http::header::ContentType, HttpResponse};
use askama::Template;
use crate::errors::errors::{AppResult, ErrorContext};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub authenticated: bool,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub authenticated: bool,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub authenticated: bool,
}

#[derive(Template)]
#[template(path = "secrets.html")]
pub struct SecretsTemplate {
    pub authenticated: bool,
    pub secrets: Vec<String>,
}

#[derive(Template)]
#[template(path = "submit.html")]
pub struct SubmitTemplate {
    pub authenticated: bool,
}

/// 템플릿을 `200 OK` HTML 응답으로 렌더링합니다.
pub fn render<T: Template>(template: &T) -> AppResult<HttpResponse> {
    let body = template.render().context("템플릿 렌더링 실패")?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
