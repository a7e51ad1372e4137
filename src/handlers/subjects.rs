//! 과목 HTTP 핸들러 (`/subjects`)

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::subjects::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::services::subjects::SubjectService;

#[get("")]
pub async fn list_subjects(service: web::Data<SubjectService>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_subjects().await?))
}

#[get("/mongo/{native_ref}")]
pub async fn get_subject_by_ref(
    service: web::Data<SubjectService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_subject_by_ref(&path.into_inner()).await?))
}

/// 과정에 속한 과목 목록
///
/// 과정이 없거나, 목록의 과목이 모두 삭제되어 남은 것이 없으면 404입니다.
#[get("/course/{course_id}")]
pub async fn get_subjects_by_course(
    service: web::Data<SubjectService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.subjects_by_course(path.into_inner()).await?))
}

#[get("/{id}")]
pub async fn get_subject(
    service: web::Data<SubjectService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_subject(path.into_inner()).await?))
}

#[post("")]
pub async fn create_subject(
    service: web::Data<SubjectService>,
    payload: web::Json<CreateSubjectRequest>,
) -> Result<HttpResponse, AppError> {
    let subject = service.create_subject(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(subject))
}

#[put("/{id}")]
pub async fn update_subject(
    service: web::Data<SubjectService>,
    path: web::Path<i64>,
    payload: web::Json<UpdateSubjectRequest>,
) -> Result<HttpResponse, AppError> {
    let subject = service
        .update_subject(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(subject))
}

#[delete("/{id}")]
pub async fn delete_subject(
    service: web::Data<SubjectService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.delete_subject(path.into_inner()).await?))
}
