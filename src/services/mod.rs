//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 요청 DTO를 검증하여 엔티티/변경 문서로 바꾸고, 리포지토리를 호출한 뒤
//! 응답 DTO로 변환합니다. 저장소 오류는 여기서 `OperationFailed`로 재포장됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{relations::ReferenceResolver, users::UserService};
//!
//! let resolver = ReferenceResolver::new(store.clone());
//! let user_service = UserService::new(UserRepository::new(store.clone()), resolver);
//! let teachers = user_service.users_by_type("teacher").await?;
//! ```

pub mod relations;
pub mod users;
pub mod courses;
pub mod subjects;
pub mod documents;
