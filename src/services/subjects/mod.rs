//! 과목 관리 서비스

pub mod subject_service;

pub use subject_service::SubjectService;
