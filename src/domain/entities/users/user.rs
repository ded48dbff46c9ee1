//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증 사용자와 Google OAuth 사용자를 하나의 문서 모델로 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// `users` 컬렉션의 문서
///
/// 로컬 사용자는 `username`과 `password_hash`를, OAuth 사용자는 `external_id`를 가집니다.
/// 두 필드 중 최소 하나는 항상 채워져 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// bcrypt 해시. 솔트가 해시 문자열 안에 포함되어 있습니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Google 계정의 `sub` 식별자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: Some(username),
            password_hash: Some(password_hash),
            external_id: None,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn new_oauth(external_id: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: None,
            password_hash: None, // OAuth 사용자는 비밀번호 없음
            external_id: Some(external_id),
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }
}
