//! 자격 증명 저장소 계약

use async_trait::async_trait;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppResult;

/// 사용자 레코드 저장소
///
/// 구현체는 `username`과 `external_id`의 유일성을 보장해야 합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID(ObjectId hex)로 조회합니다. 형식이 잘못된 ID는 `Ok(None)`입니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 사용자를 반환합니다.
    ///
    /// 사용자명이 이미 있으면 `AppError::DuplicateUsername`이며 기존 레코드는 변경되지 않습니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// `external_id`로 사용자를 찾고, 없으면 해당 ID만 가진 사용자를 만듭니다.
    ///
    /// 같은 ID로 몇 번을 호출해도 항상 같은 사용자가 반환됩니다.
    async fn find_or_create_by_external_id(&self, external_id: &str) -> AppResult<User>;

    /// 사용자의 secret을 덮어씁니다. 사용자가 없으면 `Ok(None)`
    async fn update_secret(&self, id: &str, secret: &str) -> AppResult<Option<User>>;

    /// secret이 설정된 모든 사용자를 생성 순으로 반환합니다.
    async fn find_with_secret(&self) -> AppResult<Vec<User>>;
}
