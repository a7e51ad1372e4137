//! 문서 데이터 액세스 계층

pub mod document_repo;

pub use document_repo::DocumentRepository;
