//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, HTTP 서버, 저장소, 요청 제한 설정을 환경 변수에서 읽습니다.
//! 값이 없거나 파싱할 수 없으면 기본값을 사용합니다.

use std::env;
use std::str::FromStr;

use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Development`를 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Development)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (`PORT`, 기본값 8000)
    pub fn port() -> u16 {
        parse_or("PORT", env::var("PORT").ok(), 8000)
    }

    /// 서버가 바인딩할 호스트 주소 (`HOST`, 기본값 "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수 (`HTTP_WORKERS`, 기본값 4)
    pub fn workers() -> usize {
        parse_or("HTTP_WORKERS", env::var("HTTP_WORKERS").ok(), 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// `MONGODB_URI` (기본값 "mongodb://localhost:27017")
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// `DATABASE_NAME` → `MONGODB_DB_NAME` → "university_dev"
    pub fn database_name() -> String {
        Self::resolve_database_name(env::var("DATABASE_NAME").ok(), env::var("MONGODB_DB_NAME").ok())
    }

    /// 모니터링에 표시되는 클라이언트 이름
    pub fn app_name() -> String {
        env!("CARGO_PKG_NAME").to_string()
    }

    fn resolve_database_name(primary: Option<String>, fallback: Option<String>) -> String {
        primary
            .filter(|name| !name.trim().is_empty())
            .or(fallback.filter(|name| !name.trim().is_empty()))
            .unwrap_or_else(|| "university_dev".to_string())
    }
}

/// 저장소 백엔드 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB (기본값)
    Mongo,
    /// 프로세스 내 인메모리 저장소. 재시작하면 데이터가 사라집니다.
    Memory,
}

impl StorageBackend {
    /// `STORAGE_BACKEND` = mongo | memory
    pub fn current() -> Self {
        Self::from_setting(env::var("STORAGE_BACKEND").ok())
    }

    fn from_setting(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("memory") => StorageBackend::Memory,
            None | Some("") => StorageBackend::Mongo,
            Some(v) if v.eq_ignore_ascii_case("mongo") || v.eq_ignore_ascii_case("mongodb") => {
                StorageBackend::Mongo
            }
            Some(other) => {
                warn!("알 수 없는 STORAGE_BACKEND '{}', mongo 사용", other);
                StorageBackend::Mongo
            }
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND` (기본값 100), `RATE_LIMIT_BURST_SIZE` (기본값 200)
    pub fn from_env() -> Self {
        Self {
            per_second: parse_or(
                "RATE_LIMIT_PER_SECOND",
                env::var("RATE_LIMIT_PER_SECOND").ok(),
                100,
            ),
            burst_size: parse_or(
                "RATE_LIMIT_BURST_SIZE",
                env::var("RATE_LIMIT_BURST_SIZE").ok(),
                200,
            ),
        }
    }
}

fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|e| {
            warn!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
    }
}
