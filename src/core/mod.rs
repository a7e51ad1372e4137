//! # Core Module
//!
//! 애플리케이션 전반에서 쓰이는 기반 구성요소입니다.
//!
//! - [`errors`] - `AppError`, HTTP 응답 매핑, 서비스 경계 재포장
//! - [`registry`] - 저장소 → 리포지토리 → 서비스 의존성 그래프 조립

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
