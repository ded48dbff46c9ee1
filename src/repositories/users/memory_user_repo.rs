//! 메모리 기반 사용자 저장소
//!
//! `STORAGE_BACKEND=memory`로 실행하거나 테스트에서 사용합니다. 프로세스가 끝나면 데이터도 사라집니다.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::{
    domain::entities::users::user::User,
    errors::errors::{AppError, AppResult},
    repositories::users::user_store::UserStore,
};

/// ObjectId 순(=생성 순)으로 정렬된 사용자 맵
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<BTreeMap<ObjectId, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, BTreeMap<ObjectId, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 오염".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, BTreeMap<ObjectId, User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 오염".to_string()))
    }

    fn insert(users: &mut BTreeMap<ObjectId, User>, mut user: User) -> User {
        let id = ObjectId::new();
        user.id = Some(id);
        users.insert(id, user.clone());
        user
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        Ok(self.read()?.get(&object_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.read()?
            .values()
            .find(|user| user.username.as_deref() == Some(username))
            .cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.write()?;

        if let Some(username) = user.username.as_deref() {
            if users.values().any(|u| u.username.as_deref() == Some(username)) {
                return Err(AppError::DuplicateUsername);
            }
        }

        Ok(Self::insert(&mut users, user))
    }

    async fn find_or_create_by_external_id(&self, external_id: &str) -> AppResult<User> {
        // 조회와 생성을 같은 쓰기 잠금 안에서 처리합니다.
        let mut users = self.write()?;

        if let Some(existing) = users
            .values()
            .find(|user| user.external_id.as_deref() == Some(external_id))
        {
            return Ok(existing.clone());
        }

        Ok(Self::insert(&mut users, User::new_oauth(external_id.to_string())))
    }

    async fn update_secret(&self, id: &str, secret: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut users = self.write()?;
        Ok(users.get_mut(&object_id).map(|user| {
            user.secret = Some(secret.to_string());
            user.updated_at = DateTime::now();
            user.clone()
        }))
    }

    async fn find_with_secret(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?
            .values()
            .filter(|user| user.has_secret())
            .cloned()
            .collect())
    }
}
