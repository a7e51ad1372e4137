use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{User, UserType};
use crate::utils::string_utils::to_title_case;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// 네이티브 참조 (16진수 문자열)
    #[serde(rename = "_id")]
    pub mongo_id: String,
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub courses: Vec<i64>,
    pub documents: Vec<i64>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            mongo_id,
            id,
            name,
            email,
            user_type,
            courses,
            documents,
        } = user;

        Self {
            mongo_id: mongo_id.map(|r| r.to_hex()).unwrap_or_default(),
            id,
            // 정규화 이전에 저장된 데이터도 타이틀 케이스로 렌더링
            name: to_title_case(&name),
            email,
            user_type,
            courses,
            documents,
        }
    }
}
