//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 [`CollectionRepository`]의 타입 별칭이며, 공유된
//! `Arc<dyn DocumentStore>`를 통해 저장소에 접근합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::CourseRepository;
//!
//! let course_repo = CourseRepository::new(store.clone());
//! let courses = course_repo.find_by_subject(3).await?;
//! ```

pub mod base;
pub mod identity;
pub mod users;
pub mod courses;
pub mod subjects;
pub mod documents;

pub use base::CollectionRepository;
pub use identity::IdentityAllocator;
pub use users::UserRepository;
pub use courses::CourseRepository;
pub use subjects::SubjectRepository;
pub use documents::DocumentRepository;
