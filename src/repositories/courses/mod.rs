//! 과정 데이터 액세스 계층

pub mod course_repo;

pub use course_repo::CourseRepository;
