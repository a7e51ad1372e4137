//! # 문서 관리 서비스
//!
//! 업로드된 학습 문서의 CRUD와 유형/교수/과목/소유자별 조회를 담당합니다.
//! 점수 범위와 문서 유형은 저장소에 닿기 전에 검증됩니다.

use log::info;

use crate::{
    core::errors::{AppError, AppResult, BoundaryExt},
    domain::{
        dto::{
            documents::{CreateDocumentRequest, DocumentResponse, UpdateDocumentRequest},
            MessageResponse,
        },
        entities::{
            documents::{Document, DocumentType},
            Entity, NativeRef,
        },
    },
    repositories::DocumentRepository,
    services::relations::ReferenceResolver,
};

#[derive(Clone)]
pub struct DocumentService {
    document_repo: DocumentRepository,
    resolver: ReferenceResolver,
}

fn to_responses(documents: Vec<Document>) -> Vec<DocumentResponse> {
    documents.into_iter().map(DocumentResponse::from).collect()
}

impl DocumentService {
    pub fn new(document_repo: DocumentRepository, resolver: ReferenceResolver) -> Self {
        Self {
            document_repo,
            resolver,
        }
    }

    pub async fn list_documents(&self) -> AppResult<Vec<DocumentResponse>> {
        self.document_repo
            .list_all()
            .await
            .at_boundary("Error fetching documents")
            .map(to_responses)
    }

    pub async fn get_document(&self, id: i64) -> AppResult<DocumentResponse> {
        self.document_repo
            .get_by_id(id)
            .await
            .at_boundary("Error fetching document")?
            .map(DocumentResponse::from)
            .ok_or_else(|| AppError::not_found(Document::LABEL, id))
    }

    pub async fn get_document_by_ref(&self, raw_ref: &str) -> AppResult<DocumentResponse> {
        let not_found = || AppError::NotFound(format!("Document with reference {} not found", raw_ref));

        let Ok(native_ref) = NativeRef::parse(raw_ref) else {
            return Err(not_found());
        };

        self.document_repo
            .get_by_native_ref(native_ref)
            .await
            .at_boundary("Error fetching document")?
            .map(DocumentResponse::from)
            .ok_or_else(not_found)
    }

    /// 유형별 문서. 알 수 없는 유형은 허용값을 나열한 `ValidationError`입니다.
    pub async fn documents_by_type(&self, raw_type: &str) -> AppResult<Vec<DocumentResponse>> {
        let doc_type: DocumentType = raw_type.parse()?;
        self.document_repo
            .find_by_type(doc_type)
            .await
            .at_boundary("Error fetching documents by type")
            .map(to_responses)
    }

    pub async fn documents_by_teacher(&self, teacher_id: i64) -> AppResult<Vec<DocumentResponse>> {
        self.resolver
            .documents_by_teacher(teacher_id)
            .await
            .at_boundary("Error fetching documents by teacher")
            .map(to_responses)
    }

    pub async fn documents_by_subject(&self, subject_id: i64) -> AppResult<Vec<DocumentResponse>> {
        self.resolver
            .documents_by_subject(subject_id)
            .await
            .at_boundary("Error fetching documents by subject")
            .map(to_responses)
    }

    /// 소유자 참조로 문서 조회. 참조 형식이 잘못되면 빈 목록입니다.
    pub async fn documents_by_owner(&self, owner_ref: &str) -> AppResult<Vec<DocumentResponse>> {
        self.resolver
            .documents_by_owner(owner_ref)
            .await
            .at_boundary("Error fetching documents by owner")
            .map(to_responses)
    }

    pub async fn create_document(&self, request: CreateDocumentRequest) -> AppResult<DocumentResponse> {
        let document = request.into_document()?;
        let created = self
            .document_repo
            .create(document)
            .await
            .at_boundary("Error creating document")?;

        info!("📄 문서 생성: id={} type={}", created.id, created.doc_type);
        Ok(DocumentResponse::from(created))
    }

    pub async fn update_document(
        &self,
        id: i64,
        request: UpdateDocumentRequest,
    ) -> AppResult<DocumentResponse> {
        let changes = request.into_changes()?;
        let updated = self
            .document_repo
            .update(id, changes)
            .await
            .at_boundary("Error updating document")?
            .ok_or_else(|| AppError::not_found(Document::LABEL, id))?;

        info!("📄 문서 수정: id={}", id);
        Ok(DocumentResponse::from(updated))
    }

    pub async fn delete_document(&self, id: i64) -> AppResult<MessageResponse> {
        if !self
            .document_repo
            .delete(id)
            .await
            .at_boundary("Error deleting document")?
        {
            return Err(AppError::not_found(Document::LABEL, id));
        }

        info!("🗑️ 문서 삭제: id={}", id);
        Ok(MessageResponse::deleted(Document::LABEL, id))
    }
}
