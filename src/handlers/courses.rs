//! 과정 HTTP 핸들러 (`/courses`)

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::courses::{CreateCourseRequest, UpdateCourseRequest};
use crate::services::courses::CourseService;

#[get("")]
pub async fn list_courses(service: web::Data<CourseService>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_courses().await?))
}

#[get("/mongo/{native_ref}")]
pub async fn get_course_by_ref(
    service: web::Data<CourseService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_course_by_ref(&path.into_inner()).await?))
}

/// 과목을 포함한 과정 목록. 없으면 404입니다.
#[get("/subject/{subject_id}")]
pub async fn get_courses_by_subject(
    service: web::Data<CourseService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.courses_by_subject(path.into_inner()).await?))
}

#[get("/{id}")]
pub async fn get_course(
    service: web::Data<CourseService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_course(path.into_inner()).await?))
}

#[post("")]
pub async fn create_course(
    service: web::Data<CourseService>,
    payload: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = service.create_course(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(course))
}

#[put("/{id}")]
pub async fn update_course(
    service: web::Data<CourseService>,
    path: web::Path<i64>,
    payload: web::Json<UpdateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = service
        .update_course(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(course))
}

#[delete("/{id}")]
pub async fn delete_course(
    service: web::Data<CourseService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.delete_course(path.into_inner()).await?))
}
