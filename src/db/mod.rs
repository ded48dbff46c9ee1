//! Database Connection Management Module
//!
//! MongoDB 연결을 만들고 애플리케이션 수명 동안 공유합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="userDB"
//! ```

use mongodb::{bson::doc, options::ClientOptions, Client};
use log::info;
use crate::config::StorageConfig;
use crate::errors::errors::AppError;

/// MongoDB 데이터베이스 연결 래퍼
///
/// `mongodb::Client`는 내부적으로 커넥션 풀을 가지므로 복제해도 같은 풀을 공유합니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수 설정으로 연결하고 `ping`으로 가용성을 확인합니다.
    pub async fn new() -> Result<Self, AppError> {
        Self::connect(&StorageConfig::mongodb_uri(), &StorageConfig::database_name()).await
    }

    pub async fn connect(mongodb_uri: &str, database_name: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(mongodb_uri).await?;

        // 애플리케이션 이름 설정 (서버 로그에서 식별용)
        client_options.app_name = Some("secrets_backend".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// 리포지토리에서 컬렉션에 접근할 때 사용합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
