//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 한곳에서 관리합니다.
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8000"
//! export HTTP_WORKERS="4"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongo"          # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="university_dev"   # 없으면 MONGODB_DB_NAME
//!
//! # 요청 제한
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # 환경
//! export ENVIRONMENT="development"        # development, test, staging, production
//! ```
//!
//! `PROFILE=dev|prod`이면 `.env.dev`/`.env.prod`, 그 외에는 `.env`를 먼저 읽습니다.

pub mod data_config;

pub use data_config::*;
