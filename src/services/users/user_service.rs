//! 사용자 비밀 관리 서비스
//!
//! 사용자마다 비밀은 하나뿐이며, 새로 제출하면 이전 값을 덮어씁니다.

use std::sync::Arc;
use crate::{
    domain::entities::users::user::User,
    errors::errors::{AppError, AppResult},
    repositories::users::user_store::UserStore,
};

pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 비밀이 있는 모든 사용자의 비밀 목록 (사용자 생성 순)
    pub async fn list_secrets(&self) -> AppResult<Vec<String>> {
        let secrets = self.users
            .find_with_secret()
            .await?
            .into_iter()
            .filter_map(|user| user.secret)
            .collect();

        Ok(secrets)
    }

    /// 사용자의 비밀을 저장합니다. 마지막 제출이 남습니다.
    pub async fn submit_secret(&self, user: &User, secret: &str) -> AppResult<User> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let updated = self.users
            .update_secret(&user_id, secret)
            .await?
            // 세션 해석과 제출 사이에 사용자가 사라진 경우
            .ok_or(AppError::UnauthenticatedAccess)?;

        log::info!("비밀 저장: user_id={}", user_id);
        Ok(updated)
    }
}
