//! 인증 자격 증명 모델
//!
//! 인증 방식은 닫힌 집합(로컬, Google OAuth)이며, 각 변형은 자신에게 필요한
//! 입력만 가집니다.

use std::fmt;
use crate::domain::entities::users::user::User;

/// 인증기에 전달되는 자격 증명
#[derive(Clone)]
pub enum Credentials {
    /// 사용자명/비밀번호
    Local { username: String, password: String },
    /// Google이 콜백으로 돌려준 authorization code
    OAuth { code: String },
}

impl Credentials {
    pub fn local(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Local {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn oauth(code: impl Into<String>) -> Self {
        Credentials::OAuth { code: code.into() }
    }
}

// 비밀번호와 authorization code가 로그에 찍히지 않도록 직접 구현합니다.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Local { username, .. } => f
                .debug_struct("Local")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Credentials::OAuth { .. } => f.debug_struct("OAuth").field("code", &"***").finish(),
        }
    }
}

/// 인증에 성공한 사용자
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: User,
}

impl Identity {
    pub fn user_id(&self) -> Option<String> {
        self.user.id_string()
    }
}
