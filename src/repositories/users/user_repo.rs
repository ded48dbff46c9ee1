//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 사용하는 [`UserStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **유니크 인덱스**: `username`, `external_id` (sparse, 값이 있는 문서만 대상)
//! - **원자적 find-or-create**: `external_id` 기준 upsert 한 번으로 처리
//! - **중복 키 처리**: 인덱스 위반(E11000)을 도메인 에러로 변환

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::errors::{AppError, AppResult},
    repositories::users::user_store::UserStore,
};

const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Database::new().await?;
/// let repo = UserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// let user = repo.find_or_create_by_external_id("google-sub").await?;
/// repo.update_secret(&user.id_string().unwrap(), "I like pineapple pizza").await?;
/// ```
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION_NAME),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **사용자명 유니크 인덱스** (`username_unique`, sparse)
    /// 2. **외부 ID 유니크 인덱스** (`external_id_unique`, sparse)
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 같은 인덱스가 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let external_id_index = IndexModel::builder()
            .keys(doc! { "external_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("external_id_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([username_index, external_id_index])
            .await?;

        Ok(())
    }

    async fn find_by_external_id(&self, external_id: &str) -> AppResult<Option<User>> {
        Ok(self.collection
            .find_one(doc! { "external_id": external_id })
            .await?)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            log::debug!("유효하지 않은 사용자 ID 형식: {}", id);
            return Ok(None);
        };

        Ok(self.collection
            .find_one(doc! { "_id": object_id })
            .await?)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.collection
            .find_one(doc! { "username": username })
            .await?)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        if let Some(username) = user.username.as_deref() {
            if self.find_by_username(username).await?.is_some() {
                return Err(AppError::DuplicateUsername);
            }
        }

        // 사전 확인과 삽입 사이의 경쟁은 유니크 인덱스가 막아줍니다.
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::DuplicateUsername
                } else {
                    AppError::from(e)
                }
            })?;

        let id = result.inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_or_create_by_external_id(&self, external_id: &str) -> AppResult<User> {
        let now = DateTime::now();
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let result = self.collection
            .find_one_and_update(
                doc! { "external_id": external_id },
                doc! { "$setOnInsert": {
                    "external_id": external_id,
                    "created_at": now,
                    "updated_at": now,
                } },
            )
            .with_options(options)
            .await;

        match result {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::InternalError("upsert 후 사용자를 찾을 수 없습니다".to_string())),
            // 동시에 들어온 첫 로그인 두 건이 모두 upsert를 시도하면 한쪽은 중복 키로 실패합니다.
            Err(e) if is_duplicate_key(&e) => self
                .find_by_external_id(external_id)
                .await?
                .ok_or_else(|| AppError::InternalError("중복 키 이후 사용자를 찾을 수 없습니다".to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn update_secret(&self, id: &str, secret: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        Ok(self.collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "secret": secret, "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await?)
    }

    async fn find_with_secret(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection
            .find(doc! { "secret": { "$ne": null } })
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
