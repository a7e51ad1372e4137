//! 대학 행정 백엔드
//!
//! 사용자(교수/학생), 과정, 과목, 학습 문서를 관리하는 REST API입니다.
//! 각 레코드는 저장소가 부여한 네이티브 참조(`_id`)와 별도로
//! 컬렉션별 순차 정수 `id`를 가집니다.
//!
//! # Features
//!
//! - **엔티티 CRUD**: 네 컬렉션 모두 목록, 조회, 생성, 부분 수정, 삭제
//! - **Identity 할당**: 컬렉션 최대 `id` + 1
//! - **참조 해석**: 과정 → 과목, 과목 → 과정, 사용자 → 문서
//! - **검증**: `validator` 기반 입력 규칙과 세 상태 패치(Absent/Null/Value)
//! - **MongoDB**: 기본 저장소, `STORAGE_BACKEND=memory`로 메모리 저장소 사용 가능
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 참조 해석
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← id 할당, 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DocumentStore  │ ← MongoDB / 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use university_backend::core::registry::ServiceRegistry;
//! use university_backend::db::MemoryStore;
//!
//! let registry = ServiceRegistry::new(Arc::new(MemoryStore::new()));
//! let user = registry.users.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
