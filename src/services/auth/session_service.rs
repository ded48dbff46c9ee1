//! # 세션 서비스
//!
//! 서버 측 세션 레코드와 브라우저 쿠키를 연결합니다.
//!
//! ## 세션 구조
//!
//! - 쿠키에는 HMAC 서명된 세션 ID만 들어갑니다. 사용자 정보는 저장소에만 있습니다.
//! - 세션 레코드([`SessionData`])는 사용자 ID와 진행 중인 OAuth state를 가집니다.
//! - 로그인에 성공하면 항상 새 세션 ID를 발급하고 이전 세션은 폐기합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let session_id = session_service.login(context.session_id.as_deref(), &user_id).await?;
//! let cookie = session_service.cookie().issue(&session_id)?;
//! ```

use std::sync::Arc;
use actix_web::cookie::{time::Duration, Cookie, CookieJar, Key, SameSite};
use sha2::{Digest, Sha512};
use uuid::Uuid;
use crate::{
    config::{Environment, SessionConfig},
    domain::{entities::users::user::User, models::session::SessionData},
    errors::errors::{AppError, AppResult},
    repositories::{sessions::session_store::SessionStore, users::user_store::UserStore},
};

/// 세션 쿠키 발급/검증기
#[derive(Clone)]
pub struct SessionCookie {
    name: String,
    key: Key,
    max_age_seconds: u64,
    secure: bool,
}

impl SessionCookie {
    /// 임의 길이의 비밀값을 SHA-512로 늘려 64바이트 서명 키를 만듭니다.
    pub fn new(name: impl Into<String>, secret: &str, max_age_seconds: u64, secure: bool) -> Self {
        let digest = Sha512::digest(secret.as_bytes());
        Self {
            name: name.into(),
            key: Key::from(digest.as_slice()),
            max_age_seconds,
            secure,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            SessionConfig::cookie_name(),
            &SessionConfig::secret(),
            SessionConfig::ttl_seconds(),
            Environment::current().requires_secure_cookies(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 세션 ID를 서명한 쿠키
    pub fn issue(&self, session_id: &str) -> AppResult<Cookie<'static>> {
        let cookie = Cookie::build(self.name.clone(), session_id.to_string())
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(self.max_age_seconds.min(i64::MAX as u64) as i64))
            .finish();

        let mut jar = CookieJar::new();
        jar.signed_mut(&self.key).add(cookie);

        jar.get(&self.name)
            .cloned()
            .ok_or_else(|| AppError::InternalError("서명된 세션 쿠키를 만들지 못했습니다".to_string()))
    }

    /// 서명이 맞으면 세션 ID, 아니면 `None`
    pub fn verify(&self, cookie: Cookie<'static>) -> Option<String> {
        if cookie.name() != self.name {
            return None;
        }

        let mut jar = CookieJar::new();
        jar.add_original(cookie);
        jar.signed(&self.key)
            .get(&self.name)
            .map(|verified| verified.value().to_string())
            .filter(|session_id| !session_id.is_empty())
    }

    /// 브라우저의 세션 쿠키를 지우는 쿠키
    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.name.clone(), String::new())
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .finish();
        cookie.make_removal();
        cookie
    }
}

pub struct SessionService {
    store: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
    cookie: SessionCookie,
    ttl_seconds: u64,
}

impl SessionService {
    pub fn new(
        store: Arc<dyn SessionStore>,
        users: Arc<dyn UserStore>,
        cookie: SessionCookie,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            store,
            users,
            cookie,
            ttl_seconds,
        }
    }

    pub fn cookie(&self) -> &SessionCookie {
        &self.cookie
    }

    fn new_session_id() -> String {
        // 122비트 × 2의 난수
        format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
    }

    /// 사용자를 새 세션에 로그인시키고 새 세션 ID를 반환합니다.
    ///
    /// 로그인 전에 쓰던 세션이 있으면 폐기합니다.
    pub async fn login(&self, previous_session_id: Option<&str>, user_id: &str) -> AppResult<String> {
        if let Some(previous) = previous_session_id {
            self.store.destroy(previous).await?;
        }

        let session_id = Self::new_session_id();
        self.store
            .save(&session_id, &SessionData::authenticated(user_id.to_string()), self.ttl_seconds)
            .await?;

        log::debug!("세션 생성: user_id={}", user_id);
        Ok(session_id)
    }

    /// 추측할 수 없는 OAuth state 값
    pub fn new_oauth_state() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// OAuth state를 세션에 저장하고 그 세션 ID를 반환합니다.
    ///
    /// 유효한 기존 세션이 있으면 그 세션에 덧붙입니다.
    pub async fn begin_oauth(&self, current_session_id: Option<&str>, state: &str) -> AppResult<String> {
        let existing = match current_session_id {
            Some(session_id) => self.store
                .load(session_id)
                .await?
                .map(|data| (session_id.to_string(), data)),
            None => None,
        };

        let (session_id, mut data) = existing.unwrap_or_else(|| (Self::new_session_id(), SessionData::new()));

        data.oauth_state = Some(state.to_string());
        self.store.save(&session_id, &data, self.ttl_seconds).await?;

        Ok(session_id)
    }

    /// 세션에 저장된 OAuth state를 꺼내고 지웁니다. 같은 state는 두 번 쓰이지 않습니다.
    pub async fn take_oauth_state(&self, session_id: &str) -> AppResult<Option<String>> {
        let Some(mut data) = self.store.load(session_id).await? else {
            return Ok(None);
        };

        let state = data.oauth_state.take();
        if state.is_some() {
            if data.is_empty() {
                self.store.destroy(session_id).await?;
            } else {
                self.store.save(session_id, &data, self.ttl_seconds).await?;
            }
        }

        Ok(state)
    }

    /// 세션 ID를 현재 사용자로 해석합니다.
    ///
    /// 세션이 없거나 만료되었거나 사용자가 더 이상 존재하지 않으면 `Ok(None)`
    pub async fn resolve(&self, session_id: &str) -> AppResult<Option<User>> {
        let Some(data) = self.store.load(session_id).await? else {
            return Ok(None);
        };
        let Some(user_id) = data.user_id else {
            return Ok(None);
        };

        let user = self.users.find_by_id(&user_id).await?;
        if user.is_none() {
            log::warn!("세션이 가리키는 사용자가 없습니다: {}", user_id);
        }
        Ok(user)
    }

    pub async fn logout(&self, session_id: &str) -> AppResult<()> {
        self.store.destroy(session_id).await
    }
}
