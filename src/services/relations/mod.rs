//! 엔티티 간 참조 해석

pub mod reference_resolver;

pub use reference_resolver::ReferenceResolver;
