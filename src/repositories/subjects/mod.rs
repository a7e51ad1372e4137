//! 과목 데이터 액세스 계층

pub mod subject_repo;

pub use subject_repo::SubjectRepository;
