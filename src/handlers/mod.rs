//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 호출로 연결하는 actix-web 핸들러들입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 추출/상태 코드             ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 참조 해석, 에러 재포장          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - id 할당, 컬렉션 접근             ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   DocumentStore - MongoDB / 메모리               ← Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 [`ServiceRegistry::register`](crate::core::registry::ServiceRegistry::register)가
//! 등록한 `web::Data<...Service>`로 주입받습니다. 핸들러는 `Result<HttpResponse, AppError>`를
//! 반환하고, 에러는 `AppError`의 `ResponseError` 구현이 `{"error": ...}` 본문으로 바꿉니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: `/users` - 유형별 조회 포함
//! - **`courses`**: `/courses` - 과목 기준 역조회
//! - **`subjects`**: `/subjects` - 과정 기준 조회
//! - **`documents`**: `/documents` - 유형/교수/과목/소유자 기준 조회
//!
//! 생성은 `201 Created`, 나머지 성공은 `200 OK`입니다.

pub mod courses;
pub mod documents;
pub mod subjects;
pub mod users;
