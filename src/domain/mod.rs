//! # Domain Layer Module
//!
//! 대학 행정 데이터의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 컬렉션과 대응하는 엔티티 (User, Course, Subject, Document)
//! └── dto       - API 요청/응답 (생성 요청, Patch 기반 수정 요청, 응답)
//!      │
//!      ▼
//! Services → Repositories → DocumentStore
//! ```
//!
//! 엔티티는 저장 형태를, DTO는 API 계약을 표현합니다. 두 계층 사이의 변환은
//! DTO 쪽(`into_user`, `into_changes`, `From<User> for UserResponse` 등)에 있습니다.

pub mod entities;
pub mod dto;
