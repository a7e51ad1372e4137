//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 및 조회 엔드포인트입니다. 모든 경로는 `/users` 스코프 아래에 있습니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | GET | `/users` | 전체 목록 |
//! | GET | `/users/{id}` | 할당 id로 조회 |
//! | GET | `/users/mongo/{ref}` | 네이티브 참조로 조회 |
//! | GET | `/users/type/{type}` | 유형별 목록 (teacher, student) |
//! | POST | `/users` | 생성 (201, 이메일 중복 시 409) |
//! | PUT | `/users/{id}` | 부분 수정 |
//! | DELETE | `/users/{id}` | 삭제 |

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::services::users::UserService;

#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// 네이티브 참조(24자리 16진수)로 사용자 조회
///
/// 형식이 잘못된 참조도 404로 응답합니다.
#[get("/mongo/{native_ref}")]
pub async fn get_user_by_ref(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_ref(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/type/{user_type}")]
pub async fn get_users_by_type(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let users = service.users_by_type(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성 핸들러
///
/// # 요청 예시
///
/// ```bash
/// curl -X POST http://localhost:8000/users/ \
///   -H "Content-Type: application/json" \
///   -d '{"name": "ada lovelace", "email": "ada@uni.edu", "type": "teacher", "courses": [1]}'
/// ```
///
/// # 응답
///
/// - `201 Created`: 저장된 사용자 (이름은 타이틀 케이스)
/// - `400 Bad Request`: 검증 실패
/// - `409 Conflict`: 대소문자만 다른 이메일 포함, 이미 등록된 이메일
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// 사용자 부분 수정 핸들러
///
/// 요청 본문에 있는 필드만 반영됩니다. 바뀐 값이 없으면 404입니다.
#[put("/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    path: web::Path<i64>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service
        .update_user(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let message = service.delete_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(message))
}
