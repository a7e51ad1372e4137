//! # Application Error Handling System
//!
//! 대학 행정 백엔드의 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 JSON 응답(`{"error": "..."}`)으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 열거값/범위/형식 검증 실패 |
//! | `MalformedReference` | 400 Bad Request | 네이티브 참조(ObjectId) 파싱 실패 |
//! | `OperationFailed` | 400 Bad Request | 서비스 경계에서 재포장된 저장소 오류 |
//! | `NotFound` | 404 Not Found | 엔티티 없음 또는 변경 없음 |
//! | `ConflictError` | 409 Conflict | 이메일 중복 (사용자 전용) |
//! | `DatabaseError` | 500 Internal Server Error | 경계를 거치지 않은 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 서비스 경계 규칙
//!
//! 저장소 계층에서 올라온 `DatabaseError`/`InternalError`는 서비스의 공개 메서드를
//! 빠져나가기 전에 [`AppError::at_boundary`]를 통해 `OperationFailed`로 재포장됩니다.
//! 원본 메시지는 그대로 보존되며, 재시도는 하지 않습니다.
//!
//! ```rust,ignore
//! use crate::core::errors::{AppResult, BoundaryExt};
//!
//! pub async fn list_courses(&self) -> AppResult<Vec<CourseResponse>> {
//!     let courses = self.course_repo.list_all().await.at_boundary("과목 과정 목록 조회 실패")?;
//!     Ok(courses.into_iter().map(CourseResponse::from).collect())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 에러 종류를 포괄합니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 네이티브 레코드 참조 파싱 실패 (400 Bad Request)
    #[error("Malformed reference: {0}")]
    MalformedReference(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 서비스 경계에서 재포장된 일반 실패 (400 Bad Request)
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 서비스 경계에서 예상치 못한 저장소 오류를 일반 실패로 재포장합니다.
    ///
    /// `DatabaseError`와 `InternalError`만 `OperationFailed`로 바뀌고,
    /// 나머지 에러 종류(검증, 없음, 충돌, 참조 오류)는 그대로 통과합니다.
    pub fn at_boundary(self, action: &str) -> AppError {
        match self {
            AppError::DatabaseError(msg) | AppError::InternalError(msg) => {
                log::error!("{}: {}", action, msg);
                AppError::OperationFailed(format!("{}: {}", action, msg))
            }
            other => other,
        }
    }

    /// "찾을 수 없음" 에러를 엔티티 라벨과 함께 생성합니다.
    pub fn not_found(label: &str, id: i64) -> AppError {
        AppError::NotFound(format!("{} with id {} not found", label, id))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_)
            | AppError::MalformedReference(_)
            | AppError::OperationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// BSON 직렬화/역직렬화처럼 도메인 밖에서 발생한 에러를
/// `InternalError`로 변환할 때 사용합니다.
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

/// `AppResult`에 서비스 경계 재포장을 적용하는 확장 trait
pub trait BoundaryExt<T> {
    fn at_boundary(self, action: &str) -> AppResult<T>;
}

impl<T> BoundaryExt<T> for AppResult<T> {
    fn at_boundary(self, action: &str) -> AppResult<T> {
        self.map_err(|e| e.at_boundary(action))
    }
}
