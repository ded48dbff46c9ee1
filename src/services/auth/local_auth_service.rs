//! 사용자명/비밀번호 인증
//!
//! 비밀번호는 bcrypt로 해시합니다. bcrypt 해시 문자열에는 cost와 salt가
//! 함께 들어 있으므로 별도로 저장하지 않습니다.
//!
//! bcrypt는 72바이트 이후의 입력을 무시하므로 해시와 검증 모두 잘라내지 않는
//! 변형을 사용합니다. 72바이트를 넘는 비밀번호는 가입도 로그인도 되지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use bcrypt::BcryptError;
use crate::{
    config::AuthProvider,
    domain::{
        entities::users::user::User,
        models::auth::credentials::{Credentials, Identity},
    },
    errors::errors::{AppError, AppResult},
    repositories::users::user_store::UserStore,
    services::auth::authenticator::Authenticator,
};

pub struct LocalAuthenticator {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl LocalAuthenticator {
    pub fn new(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 새 로컬 계정 생성
    ///
    /// 사용자명이 이미 있으면 `AppError::DuplicateUsername`을 반환하고 저장소는 바뀌지 않습니다.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<Identity> {
        if self.users.find_by_username(username).await?.is_some() {
            log::info!("이미 존재하는 사용자명으로 가입 시도: {}", username);
            return Err(AppError::DuplicateUsername);
        }

        let password_hash = bcrypt::non_truncating_hash(password, self.bcrypt_cost).map_err(|e| match e {
            BcryptError::Truncation(len) => {
                AppError::ValidationError(format!("비밀번호가 너무 깁니다: {}바이트", len))
            }
            other => AppError::InternalError(format!("비밀번호 해싱 실패: {}", other)),
        })?;

        let user = self.users
            .create(User::new_local(username.to_string(), password_hash))
            .await?;
        log::info!("새 로컬 사용자 등록: {}", username);

        Ok(Identity { user })
    }
}

#[async_trait]
impl Authenticator for LocalAuthenticator {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Local
    }

    async fn authenticate(&self, credentials: &Credentials) -> AppResult<Identity> {
        let Credentials::Local { username, password } = credentials else {
            return Err(AppError::InternalError(format!(
                "로컬 인증기에 지원하지 않는 자격 증명: {:?}", credentials
            )));
        };

        // 알 수 없는 사용자, OAuth 전용 계정, 틀린 비밀번호는 모두 같은 에러
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(AppError::InvalidCredentials);
        };
        let Some(password_hash) = user.password_hash.as_deref() else {
            return Err(AppError::InvalidCredentials);
        };

        let verified = match bcrypt::non_truncating_verify(password, password_hash) {
            Ok(verified) => verified,
            Err(BcryptError::Truncation(_)) => false,
            Err(e) => {
                log::error!("저장된 비밀번호 해시 검증 실패 ({}): {}", username, e);
                false
            }
        };

        if !verified {
            log::info!("로컬 로그인 실패: {}", username);
            return Err(AppError::InvalidCredentials);
        }

        Ok(Identity { user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::memory_user_repo::MemoryUserStore;

    fn authenticator() -> (LocalAuthenticator, Arc<MemoryUserStore>) {
        let users = Arc::new(MemoryUserStore::new());
        (LocalAuthenticator::new(users.clone(), 4), users)
    }

    #[actix_web::test]
    async fn test_register_then_login() {
        let (auth, users) = authenticator();

        let registered = auth.register("alice", "wonderland").await.unwrap();
        let stored = users.find_by_username("alice").await.unwrap().unwrap();
        assert_ne!(stored.password_hash.as_deref(), Some("wonderland"));

        let identity = auth
            .authenticate(&Credentials::local("alice", "wonderland"))
            .await
            .unwrap();
        assert_eq!(identity.user_id(), registered.user_id());
    }

    #[actix_web::test]
    async fn test_duplicate_registration_keeps_original_password() {
        let (auth, _) = authenticator();
        auth.register("alice", "first").await.unwrap();

        let second = auth.register("alice", "second").await;
        assert!(matches!(second, Err(AppError::DuplicateUsername)));

        assert!(auth.authenticate(&Credentials::local("alice", "first")).await.is_ok());
        assert!(matches!(
            auth.authenticate(&Credentials::local("alice", "second")).await,
            Err(AppError::InvalidCredentials)
        ));
    }

    #[actix_web::test]
    async fn test_unknown_user_and_oauth_only_user_are_invalid_credentials() {
        let (auth, users) = authenticator();
        users.find_or_create_by_external_id("google-sub").await.unwrap();

        assert!(matches!(
            auth.authenticate(&Credentials::local("nobody", "pw")).await,
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.authenticate(&Credentials::local("", "")).await,
            Err(AppError::InvalidCredentials)
        ));
    }

    #[actix_web::test]
    async fn test_corrupted_hash_is_rejected() {
        let (auth, users) = authenticator();
        users
            .create(User::new_local("bob".to_string(), "not-a-bcrypt-hash".to_string()))
            .await
            .unwrap();

        assert!(matches!(
            auth.authenticate(&Credentials::local("bob", "not-a-bcrypt-hash")).await,
            Err(AppError::InvalidCredentials)
        ));
    }

    #[actix_web::test]
    async fn test_password_sharing_first_72_bytes_is_rejected() {
        let (auth, users) = authenticator();
        let prefix = "a".repeat(72);

        auth.register("u", &prefix).await.unwrap();
        assert!(auth.authenticate(&Credentials::local("u", prefix.as_str())).await.is_ok());
        assert!(matches!(
            auth.authenticate(&Credentials::local("u", format!("{}TWO-different", prefix))).await,
            Err(AppError::InvalidCredentials)
        ));

        // 잘라내는 bcrypt로 만들어진 기존 해시도 긴 비밀번호로는 열리지 않습니다.
        let legacy = bcrypt::hash(format!("{}ONE", prefix), 4).unwrap();
        users.create(User::new_local("legacy".to_string(), legacy)).await.unwrap();
        assert!(matches!(
            auth.authenticate(&Credentials::local("legacy", format!("{}TWO-different", prefix))).await,
            Err(AppError::InvalidCredentials)
        ));
    }

    #[actix_web::test]
    async fn test_register_with_overlong_password_creates_no_user() {
        let (auth, users) = authenticator();

        let result = auth.register("u", &"a".repeat(75)).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(users.find_by_username("u").await.unwrap().is_none());
    }
}
