//! 대학 행정 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소와 서비스를 조립합니다.
//! MongoDB(또는 메모리 저장소)에 연결한 뒤 사용자, 과정, 과목, 문서 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use university_backend::config::{
    DatabaseConfig, Environment, RateLimitConfig, ServerConfig, StorageBackend,
};
use university_backend::core::registry::ServiceRegistry;
use university_backend::db::{Database, DocumentStore, MemoryStore};
use university_backend::routes::configure_all_routes;
use university_backend::utils::display_terminal::{print_boxed_title, print_step_start};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("University Backend");
    info!("🚀 대학 행정 백엔드 시작중... (환경: {})", Environment::current().as_str());

    print_step_start(1, "데이터 저장소 연결");
    let store = initialize_store().await?;

    print_step_start(2, "인덱스 보장");
    let registry = ServiceRegistry::new(store.clone());
    registry.ensure_indexes().await;

    print_step_start(3, "서비스 등록");
    registry.print_summary();

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    let result = start_http_server(registry).await;

    store.close().await;
    info!("👋 서버 종료");
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(registry: ServiceRegistry) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            error!("❌ Rate Limiting 설정이 올바르지 않습니다: {:?}", rate_limit_config);
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "invalid rate limiting configuration",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let registry = registry.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| registry.register(cfg))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    };

    match filename {
        Some(name) => match dotenv::from_filename(name) {
            Ok(_) => eprintln!("[{}] {} 파일 로드 됨", profile, name),
            Err(e) => eprintln!("[{}] {} 파일 로드 실패: {}", profile, name, e),
        },
        None => {
            dotenv().ok();
            eprintln!("[{}] 기본 .env 파일 로드", profile);
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=university_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// `STORAGE_BACKEND`에 따라 저장소를 엽니다.
///
/// MongoDB 연결에 실패하면 시작을 중단합니다.
async fn initialize_store() -> std::io::Result<Arc<dyn DocumentStore>> {
    match StorageBackend::current() {
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중... ({})", DatabaseConfig::database_name());

            let database = Database::connect().await.map_err(|e| {
                error!("❌ MongoDB 연결 실패: {}", e);
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
            })?;

            Ok(Arc::new(database))
        }
        StorageBackend::Memory => {
            info!("🧪 메모리 저장소 사용 (재시작 시 데이터 초기화)");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버(3000)와 자체 서버 포트를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8000")
        .allowed_origin("http://127.0.0.1:8000")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .max_age(3600)
}
