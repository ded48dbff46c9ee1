//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소 백엔드, 서버 바인딩, 패스워드 해싱, Rate Limiting 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// HTTPS 전용 쿠키를 사용해야 하는 환경인지 확인합니다.
    pub fn requires_secure_cookies(&self) -> bool {
        matches!(self, Environment::Staging | Environment::Production)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위로 설정되어 있으면 그 값을 우선합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 3000
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(4)
    }
}

/// 사용자/세션 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// MongoDB(사용자) + Redis(세션)
    Mongo,
    /// 프로세스 메모리. 재시작 시 모든 데이터가 사라집니다.
    Memory,
}

/// 저장소 설정
pub struct StorageConfig;

impl StorageConfig {
    /// `STORAGE_BACKEND` 환경 변수에서 백엔드를 결정합니다. 기본값: `mongo`
    pub fn backend() -> StorageBackend {
        Self::backend_from_str(&env::var("STORAGE_BACKEND").unwrap_or_else(|_| "mongo".to_string()))
    }

    pub fn backend_from_str(s: &str) -> StorageBackend {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }

    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017"
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름. 기본값: "userDB"
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "userDB".to_string())
    }

    /// Redis 연결 URL. 기본값: "redis://localhost:6379"
    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }
}

/// Rate Limiting 설정
#[derive(Debug)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패하면 경고를 남기고 기본값을 사용합니다.
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self { per_second, burst_size }
    }
}
