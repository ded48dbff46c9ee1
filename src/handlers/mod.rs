//! HTTP 요청 핸들러 모듈
//!
//! - [`pages`] - 서버 렌더링 페이지와 비밀 제출
//! - [`auth`] - 로컬/Google 로그인, 회원가입, 로그아웃
//! - [`views`] - askama 템플릿 뷰 모델

pub mod auth;
pub mod pages;
pub mod views;

use actix_web::{http::header, HttpResponse};

/// 폼 제출 후 이동에 사용하는 `303 See Other`
pub fn redirect_see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}
