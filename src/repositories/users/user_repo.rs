//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스입니다. 공통 CRUD는
//! [`CollectionRepository`]가 제공하고, 이 모듈은 사용자 전용 조회를 추가합니다.
//!
//! ## 인덱스
//!
//! - `id`: 유니크
//! - `email`: 유니크 (collation strength 2, 대소문자 무시)

use crate::{
    core::errors::AppResult,
    db::Filter,
    domain::entities::users::{User, UserType},
    repositories::base::CollectionRepository,
};

/// 사용자 데이터 액세스 리포지토리
pub type UserRepository = CollectionRepository<User>;

impl CollectionRepository<User> {
    /// 유형(teacher/student)별 사용자 목록
    pub async fn find_by_type(&self, user_type: UserType) -> AppResult<Vec<User>> {
        self.find_where(&Filter::eq("type", user_type.as_str())).await
    }

    /// 이메일로 사용자 조회 (대소문자 무시)
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 대소문자만 다른 이메일도 일치로 봅니다
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    pub async fn find_by_email_ignore_case(&self, email: &str) -> AppResult<Option<User>> {
        self.find_first(&Filter::eq_ignore_case("email", email)).await
    }
}
