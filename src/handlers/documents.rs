//! # Document HTTP Handlers
//!
//! 학습 문서 엔드포인트입니다 (`/documents`).
//!
//! 조회용 하위 경로:
//!
//! - `/documents/type/{type}` - "Lecture Notes" 등 공백이 있는 유형은 URL 인코딩하여 전달
//! - `/documents/teacher/{teacher_id}`
//! - `/documents/subject/{subject_id}`
//! - `/documents/owner/{native_ref}` - 형식이 잘못된 참조는 빈 목록

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::documents::{CreateDocumentRequest, UpdateDocumentRequest};
use crate::services::documents::DocumentService;

#[get("")]
pub async fn list_documents(service: web::Data<DocumentService>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_documents().await?))
}

#[get("/mongo/{native_ref}")]
pub async fn get_document_by_ref(
    service: web::Data<DocumentService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_document_by_ref(&path.into_inner()).await?))
}

#[get("/type/{doc_type}")]
pub async fn get_documents_by_type(
    service: web::Data<DocumentService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.documents_by_type(&path.into_inner()).await?))
}

#[get("/teacher/{teacher_id}")]
pub async fn get_documents_by_teacher(
    service: web::Data<DocumentService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.documents_by_teacher(path.into_inner()).await?))
}

#[get("/subject/{subject_id}")]
pub async fn get_documents_by_subject(
    service: web::Data<DocumentService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.documents_by_subject(path.into_inner()).await?))
}

#[get("/owner/{owner_ref}")]
pub async fn get_documents_by_owner(
    service: web::Data<DocumentService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.documents_by_owner(&path.into_inner()).await?))
}

#[get("/{id}")]
pub async fn get_document(
    service: web::Data<DocumentService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_document(path.into_inner()).await?))
}

/// 문서 생성 핸들러
///
/// ```bash
/// curl -X POST http://localhost:8000/documents/ \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Week 1", "file_url": "https://files.uni.edu/w1.pdf", "type": "Lecture Notes",
///        "teacher_id": 1, "subject_id": 2, "owner": "665f1c2e9b1d4a3f8c0e1a2b"}'
/// ```
///
/// `grade`가 0-100 범위를 벗어나면 저장 전에 400으로 거부됩니다.
#[post("")]
pub async fn create_document(
    service: web::Data<DocumentService>,
    payload: web::Json<CreateDocumentRequest>,
) -> Result<HttpResponse, AppError> {
    let document = service.create_document(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(document))
}

/// `"grade": null`은 점수를 지웁니다.
#[put("/{id}")]
pub async fn update_document(
    service: web::Data<DocumentService>,
    path: web::Path<i64>,
    payload: web::Json<UpdateDocumentRequest>,
) -> Result<HttpResponse, AppError> {
    let document = service
        .update_document(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(document))
}

#[delete("/{id}")]
pub async fn delete_document(
    service: web::Data<DocumentService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.delete_document(path.into_inner()).await?))
}
