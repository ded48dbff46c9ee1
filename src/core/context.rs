//! # 애플리케이션 컨텍스트
//!
//! 저장소와 서비스를 한 곳에서 조립하여 `web::Data<AppContext>`로
//! 핸들러와 미들웨어에 넘깁니다.
//!
//! ## 저장소 선택
//!
//! | `STORAGE_BACKEND` | 사용자 저장소 | 세션 저장소 |
//! |---|---|---|
//! | `mongo` (기본값) | MongoDB `users` 컬렉션 | Redis |
//! | `memory` | 프로세스 메모리 | 프로세스 메모리 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let context = AppContext::from_env().await?;
//!
//! App::new()
//!     .app_data(web::Data::new(context.clone()))
//!     .wrap(SessionMiddleware)
//!     .configure(configure_all_routes)
//! ```

use std::sync::Arc;
use log::{info, warn};
use crate::{
    caching::redis::RedisClient,
    config::{PasswordConfig, SessionConfig, StorageBackend, StorageConfig},
    db::Database,
    errors::errors::{AppError, AppResult},
    repositories::{
        sessions::{MemorySessionStore, RedisSessionStore, SessionStore},
        users::{MemoryUserStore, UserRepository, UserStore},
    },
    services::{
        auth::{
            AuthService, DisabledOAuthClient, GoogleAuthenticator, GoogleOAuthClient,
            LocalAuthenticator, OAuthProviderClient, SessionCookie, SessionService,
        },
        users::UserService,
    },
};

/// 서비스 조립에 필요한 설정값
#[derive(Clone)]
pub struct ContextSettings {
    pub bcrypt_cost: u32,
    pub session_ttl_seconds: u64,
    pub cookie: SessionCookie,
}

impl ContextSettings {
    pub fn from_env() -> Self {
        Self {
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
            session_ttl_seconds: SessionConfig::ttl_seconds(),
            cookie: SessionCookie::from_env(),
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<UserService>,
    pub auth: Arc<AuthService>,
    pub sessions: Arc<SessionService>,
}

impl AppContext {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        session_store: Arc<dyn SessionStore>,
        oauth_client: Arc<dyn OAuthProviderClient>,
        settings: ContextSettings,
    ) -> Self {
        let local = LocalAuthenticator::new(user_store.clone(), settings.bcrypt_cost);
        let google = GoogleAuthenticator::new(oauth_client, user_store.clone());

        Self {
            users: Arc::new(UserService::new(user_store.clone())),
            auth: Arc::new(AuthService::new(local, google)),
            sessions: Arc::new(SessionService::new(
                session_store,
                user_store,
                settings.cookie,
                settings.session_ttl_seconds,
            )),
        }
    }

    /// 메모리 저장소로 조립한 컨텍스트
    pub fn in_memory(oauth_client: Arc<dyn OAuthProviderClient>, settings: ContextSettings) -> Self {
        Self::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemorySessionStore::new()),
            oauth_client,
            settings,
        )
    }

    /// 환경 변수에 따라 저장소와 OAuth 클라이언트를 준비합니다.
    ///
    /// MongoDB/Redis 연결에 실패하면 에러를 반환하며 서버는 시작되지 않습니다.
    pub async fn from_env() -> AppResult<Self> {
        let settings = ContextSettings::from_env();
        let oauth_client = oauth_client_from_env();

        match StorageConfig::backend() {
            StorageBackend::Memory => {
                warn!("⚠️ 메모리 저장소 사용 중: 재시작하면 모든 데이터가 사라집니다");
                Ok(Self::in_memory(oauth_client, settings))
            }
            StorageBackend::Mongo => {
                info!("📡 데이터베이스 연결 중...");
                let database = Database::new().await?;

                let user_repo = UserRepository::new(&database);
                user_repo.create_indexes().await?;
                info!("✅ 사용자 컬렉션 인덱스 준비 완료");

                let redis = RedisClient::new()
                    .await
                    .map_err(|e| AppError::SessionStoreError(format!("Redis 연결 실패: {}", e)))?;
                info!("✅ Redis 연결 성공");

                Ok(Self::new(
                    Arc::new(user_repo),
                    Arc::new(RedisSessionStore::new(Arc::new(redis))),
                    oauth_client,
                    settings,
                ))
            }
        }
    }
}

fn oauth_client_from_env() -> Arc<dyn OAuthProviderClient> {
    match GoogleOAuthClient::from_env() {
        Ok(client) => {
            info!("✅ Google OAuth 클라이언트 설정됨");
            Arc::new(client)
        }
        Err(e) => {
            warn!("Google OAuth 비활성화: {}", e);
            Arc::new(DisabledOAuthClient)
        }
    }
}
