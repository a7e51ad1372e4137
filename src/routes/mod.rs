//! API 라우트 설정 모듈
//!
//! 엔티티별 스코프(`/users`, `/courses`, `/subjects`, `/documents`)와
//! 서비스 배너, 헬스체크 엔드포인트를 등록합니다.
//!
//! 경로 끝의 `/`는 `NormalizePath::trim` 미들웨어가 제거하므로
//! 각 스코프의 목록/생성 핸들러는 빈 경로(`""`)로 등록됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{middleware, App};
//!
//! let app = App::new()
//!     .wrap(middleware::NormalizePath::trim())
//!     .configure(|cfg| registry.register(cfg))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use log::error;
use serde_json::json;

use crate::core::errors::AppError;
use crate::db::DocumentStore;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 본문과 경로 파라미터 추출 실패는 `ValidationError`(400)로 변환됩니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(path_config());

    cfg.service(root).service(health_check);

    configure_user_routes(cfg);
    configure_course_routes(cfg);
    configure_subject_routes(cfg);
    configure_document_routes(cfg);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid path parameter: {}", err)).into()
    })
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user_by_ref)
            .service(handlers::users::get_users_by_type)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/courses")
            .service(handlers::courses::list_courses)
            .service(handlers::courses::create_course)
            .service(handlers::courses::get_course_by_ref)
            .service(handlers::courses::get_courses_by_subject)
            .service(handlers::courses::get_course)
            .service(handlers::courses::update_course)
            .service(handlers::courses::delete_course),
    );
}

fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/subjects")
            .service(handlers::subjects::list_subjects)
            .service(handlers::subjects::create_subject)
            .service(handlers::subjects::get_subject_by_ref)
            .service(handlers::subjects::get_subjects_by_course)
            .service(handlers::subjects::get_subject)
            .service(handlers::subjects::update_subject)
            .service(handlers::subjects::delete_subject),
    );
}

/// 문서 라우트
///
/// - `GET /documents/type/{type}`
/// - `GET /documents/teacher/{teacher_id}`
/// - `GET /documents/subject/{subject_id}`
/// - `GET /documents/owner/{native_ref}`
fn configure_document_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/documents")
            .service(handlers::documents::list_documents)
            .service(handlers::documents::create_document)
            .service(handlers::documents::get_document_by_ref)
            .service(handlers::documents::get_documents_by_type)
            .service(handlers::documents::get_documents_by_teacher)
            .service(handlers::documents::get_documents_by_subject)
            .service(handlers::documents::get_documents_by_owner)
            .service(handlers::documents::get_document)
            .service(handlers::documents::update_document)
            .service(handlers::documents::delete_document),
    );
}

#[get("/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "University administration API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 저장소에 ping을 보내 응답하지 않으면 `503 Service Unavailable`을 돌려줍니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "university_backend",
///   "version": "0.1.0",
///   "storage": "mongodb",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
async fn health_check(store: web::Data<dyn DocumentStore>) -> HttpResponse {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "storage": store.backend_name(),
            "timestamp": timestamp,
        })),
        Err(e) => {
            error!("❌ 헬스체크 실패: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unhealthy",
                "service": env!("CARGO_PKG_NAME"),
                "storage": store.backend_name(),
                "error": e.to_string(),
                "timestamp": timestamp,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{middleware, test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::core::registry::ServiceRegistry;
    use crate::db::MemoryStore;

    macro_rules! app {
        () => {{
            let registry = ServiceRegistry::new(Arc::new(MemoryStore::new()));
            test::init_service(
                App::new()
                    .wrap(middleware::NormalizePath::trim())
                    .configure(move |cfg| registry.register(cfg))
                    .configure(configure_all_routes),
            )
            .await
        }};
    }

    fn teacher_body() -> Value {
        json!({
            "name": "ada lovelace",
            "email": "ada@uni.edu",
            "type": "teacher"
        })
    }

    #[actix_web::test]
    async fn test_root_and_health() {
        let app = app!();

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "running");

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"], "memory");
    }

    #[actix_web::test]
    async fn test_user_lifecycle() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/users/")
            .set_json(teacher_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["name"], "Ada Lovelace");
        let native_ref = created["_id"].as_str().unwrap().to_string();
        assert_eq!(native_ref.len(), 24);

        let req = test::TestRequest::get()
            .uri(&format!("/users/mongo/{}", native_ref))
            .to_request();
        let by_ref: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(by_ref["id"], 1);

        let req = test::TestRequest::put()
            .uri("/users/1")
            .set_json(json!({ "name": "ada king" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["name"], "Ada King");
        assert_eq!(updated["email"], "ada@uni.edu");

        let req = test::TestRequest::delete().uri("/users/1").to_request();
        let deleted: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted["message"], "User 1 deleted successfully");

        let req = test::TestRequest::get().uri("/users/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("User with id 1 not found"));
    }

    #[actix_web::test]
    async fn test_duplicate_email_conflict() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(teacher_body())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({
                "name": "Someone Else",
                "email": "ADA@uni.edu",
                "type": "student"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_bad_requests() {
        let app = app!();

        let req = test::TestRequest::get().uri("/users/type/admin").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/users/abc").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Validation error"));

        let req = test::TestRequest::put()
            .uri("/users/1")
            .set_json(json!({}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/users/mongo/not-a-ref")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_course_subject_relations() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/subjects")
            .set_json(json!({ "name": "Algebra", "description": "Linear algebra basics" }))
            .to_request();
        let subject: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(subject["id"], 1);

        let req = test::TestRequest::post()
            .uri("/courses")
            .set_json(json!({ "name": "Mathematics", "subjects": [1, 99] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/subjects/course/1").to_request();
        let subjects: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(subjects.as_array().unwrap().len(), 1);

        let req = test::TestRequest::get().uri("/courses/subject/1").to_request();
        let courses: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(courses[0]["name"], "Mathematics");

        let req = test::TestRequest::get().uri("/courses/subject/42").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_document_endpoints() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(teacher_body())
            .to_request();
        let owner: Value = test::call_and_read_body_json(&app, req).await;
        let owner_ref = owner["_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/documents")
            .set_json(json!({
                "title": "Week 1",
                "file_url": "https://files.uni.edu/w1.pdf",
                "type": "Lecture Notes",
                "grade": 90.0,
                "teacher_id": 1,
                "subject_id": 2,
                "owner": owner_ref
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["owner"], owner_ref.as_str());

        let req = test::TestRequest::get()
            .uri("/documents/type/Lecture%20Notes")
            .to_request();
        let by_type: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(by_type.as_array().unwrap().len(), 1);

        let req = test::TestRequest::get()
            .uri(&format!("/documents/owner/{}", owner_ref))
            .to_request();
        let by_owner: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(by_owner.as_array().unwrap().len(), 1);

        let req = test::TestRequest::get().uri("/documents/owner/garbage").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let empty: Value = test::read_body_json(resp).await;
        assert!(empty.as_array().unwrap().is_empty());

        let req = test::TestRequest::put()
            .uri("/documents/1")
            .set_json(json!({ "grade": null }))
            .to_request();
        let cleared: Value = test::call_and_read_body_json(&app, req).await;
        assert!(cleared["grade"].is_null());

        let req = test::TestRequest::put()
            .uri("/documents/1")
            .set_json(json!({ "grade": 120 }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/documents/type/Essay").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }
}
