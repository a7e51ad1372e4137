//! 문서 관리 서비스

pub mod document_service;

pub use document_service::DocumentService;
