//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다. 엔티티와 DTO를 분리하여
//! 내부 저장 형태(`ObjectId`, BSON `DateTime`)가 그대로 노출되지 않도록 합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── patch.rs            # 부분 수정 필드(Patch<T>)
//! ├── users/              # request.rs(생성/수정), response.rs
//! ├── courses/
//! ├── subjects/
//! └── documents/
//! ```
//!
//! ## 요청 검증 흐름
//!
//! 1. **생성 요청**: `validator` derive 규칙 → 열거값 파싱 → 엔티티 생성
//! 2. **수정 요청**: `Patch::Value`인 필드만 같은 규칙으로 검증 → `$set` 문서 생성
//!
//! 수정 요청에서 적용할 필드가 하나도 남지 않으면 [`no_valid_fields`] 에러입니다.
//!
//! ## 응답 규칙
//!
//! 할당 id는 정수(`id`), 네이티브 참조는 16진수 문자열(`_id`, `owner`)로만 렌더링됩니다.

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::core::errors::AppError;

pub mod patch;
pub mod users;
pub mod courses;
pub mod subjects;
pub mod documents;

pub use patch::Patch;

/// 삭제 등 본문 없는 작업의 확인 메시지
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted(label: &str, id: i64) -> Self {
        Self {
            message: format!("{} {} deleted successfully", label, id),
        }
    }
}

/// 적용할 필드가 없는 수정 요청
pub fn no_valid_fields() -> AppError {
    AppError::ValidationError("No valid fields to update".to_string())
}

/// `validator` 검증 실패를 `ValidationError`로 변환합니다.
pub fn validation_failed(errors: ValidationErrors) -> AppError {
    AppError::ValidationError(errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_message() {
        assert_eq!(
            MessageResponse::deleted("Subject", 4).message,
            "Subject 4 deleted successfully"
        );
    }
}
