//! 문서 리포지토리
//!
//! 문서는 유형, 담당 교수, 과목, 소유자별로 조회됩니다. 소유자는 할당 id가 아니라
//! 사용자의 네이티브 참조로 저장됩니다.

use crate::{
    core::errors::AppResult,
    db::Filter,
    domain::entities::{
        documents::{Document, DocumentType},
        NativeRef,
    },
    repositories::base::CollectionRepository,
};

pub type DocumentRepository = CollectionRepository<Document>;

impl CollectionRepository<Document> {
    pub async fn find_by_type(&self, doc_type: DocumentType) -> AppResult<Vec<Document>> {
        self.find_where(&Filter::eq("type", doc_type.as_str())).await
    }

    pub async fn find_by_teacher(&self, teacher_id: i64) -> AppResult<Vec<Document>> {
        self.find_where(&Filter::eq("teacher_id", teacher_id)).await
    }

    pub async fn find_by_subject(&self, subject_id: i64) -> AppResult<Vec<Document>> {
        self.find_where(&Filter::eq("subject_id", subject_id)).await
    }

    /// 소유자의 네이티브 참조로 문서 조회
    pub async fn find_by_owner(&self, owner: NativeRef) -> AppResult<Vec<Document>> {
        self.find_where(&Filter::eq("owner", owner)).await
    }
}
