//! # 사용자 관리 서비스 구현
//!
//! 교수/학생 계정의 생성, 조회, 수정, 삭제를 담당합니다.
//!
//! ## 이메일 유일성
//!
//! 이메일은 대소문자를 무시하고 전체 사용자 사이에서 유일해야 합니다.
//!
//! - 생성: 같은 이메일(대소문자 무시)이 있으면 `ConflictError` (409)
//! - 수정: 요청의 이메일이 저장된 값과 다를 때만 다시 확인하며, 자기 자신과의 일치는 무시
//!
//! 확인과 삽입 사이에는 잠금이 없습니다. 동시에 들어온 두 요청이 모두 확인을 통과하면
//! `users.email` 유니크 인덱스가 두 번째 삽입을 거부합니다.
//!
//! ## 에러 처리
//!
//! 리포지토리 호출 결과에는 모두 `at_boundary`가 적용되어, 예상치 못한 저장소 오류는
//! `OperationFailed`(400)로 재포장됩니다.

use log::{info, warn};

use crate::{
    core::errors::{AppError, AppResult, BoundaryExt},
    domain::{
        dto::{
            users::{CreateUserRequest, UpdateUserRequest, UserResponse},
            MessageResponse,
        },
        entities::{
            users::{User, UserType},
            Entity, NativeRef,
        },
    },
    repositories::UserRepository,
    services::relations::ReferenceResolver,
};

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    resolver: ReferenceResolver,
}

impl UserService {
    pub fn new(user_repo: UserRepository, resolver: ReferenceResolver) -> Self {
        Self { user_repo, resolver }
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self
            .user_repo
            .list_all()
            .await
            .at_boundary("Error fetching users")?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user(&self, id: i64) -> AppResult<UserResponse> {
        self.find_user(id).await.map(UserResponse::from)
    }

    /// 네이티브 참조로 조회합니다. 파싱할 수 없는 참조는 "없음"으로 처리됩니다.
    pub async fn get_user_by_ref(&self, raw_ref: &str) -> AppResult<UserResponse> {
        let not_found = || AppError::NotFound(format!("User with reference {} not found", raw_ref));

        let Ok(native_ref) = NativeRef::parse(raw_ref) else {
            return Err(not_found());
        };

        self.user_repo
            .get_by_native_ref(native_ref)
            .await
            .at_boundary("Error fetching user")?
            .map(UserResponse::from)
            .ok_or_else(not_found)
    }

    /// 유형별 사용자 목록. 알 수 없는 유형은 `ValidationError`입니다.
    pub async fn users_by_type(&self, raw_type: &str) -> AppResult<Vec<UserResponse>> {
        let user_type: UserType = raw_type.parse()?;
        let users = self
            .user_repo
            .find_by_type(user_type)
            .await
            .at_boundary("Error fetching users by type")?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let user = request.into_user()?;

        if self
            .resolver
            .email_in_use(&user.email, None)
            .await
            .at_boundary("Error creating user")?
        {
            warn!("⚠️ 이메일 중복으로 사용자 생성 거부: {}", user.email);
            return Err(AppError::ConflictError("Email already registered".to_string()));
        }

        let created = self
            .user_repo
            .create(user)
            .await
            .at_boundary("Error creating user")?;

        info!("👤 사용자 생성: id={} type={}", created.id, created.user_type);
        Ok(UserResponse::from(created))
    }

    pub async fn update_user(&self, id: i64, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let changes = request.into_changes()?;
        let existing = self.find_user(id).await?;

        if let Ok(email) = changes.get_str("email") {
            if email != existing.email
                && self
                    .resolver
                    .email_in_use(email, Some(id))
                    .await
                    .at_boundary("Error updating user")?
            {
                warn!("⚠️ 이메일 중복으로 사용자 {} 수정 거부: {}", id, email);
                return Err(AppError::ConflictError("Email already registered".to_string()));
            }
        }

        let updated = self
            .user_repo
            .update(id, changes)
            .await
            .at_boundary("Error updating user")?
            .ok_or_else(|| AppError::not_found(User::LABEL, id))?;

        info!("👤 사용자 수정: id={}", id);
        Ok(UserResponse::from(updated))
    }

    pub async fn delete_user(&self, id: i64) -> AppResult<MessageResponse> {
        let deleted = self
            .user_repo
            .delete(id)
            .await
            .at_boundary("Error deleting user")?;

        if !deleted {
            return Err(AppError::not_found(User::LABEL, id));
        }

        info!("🗑️ 사용자 삭제: id={}", id);
        Ok(MessageResponse::deleted(User::LABEL, id))
    }

    async fn find_user(&self, id: i64) -> AppResult<User> {
        self.user_repo
            .get_by_id(id)
            .await
            .at_boundary("Error fetching user")?
            .ok_or_else(|| AppError::not_found(User::LABEL, id))
    }
}
