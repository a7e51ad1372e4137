//! 과정 관리 서비스

pub mod course_service;

pub use course_service::CourseService;
