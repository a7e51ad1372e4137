//! User Entity Implementation
//!
//! 교수(teacher)와 학생(student)을 표현하는 사용자 엔티티입니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::entities::{Entity, NativeRef};

/// 사용자 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Teacher,
    Student,
}

impl UserType {
    pub const ALLOWED: [&'static str; 2] = ["teacher", "student"];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Teacher => "teacher",
            UserType::Student => "student",
        }
    }
}

impl FromStr for UserType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(UserType::Teacher),
            "student" => Ok(UserType::Student),
            _ => Err(AppError::ValidationError(
                "User type must be 'teacher' or 'student'".to_string(),
            )),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<NativeRef>,
    /// 할당된 정수 id
    #[serde(default)]
    pub id: i64,
    /// 표시 이름 (타이틀 케이스로 저장)
    pub name: String,
    /// 이메일 (대소문자 무시 유니크)
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    /// 수강/담당 과정 id 목록 (중복 허용)
    #[serde(default)]
    pub courses: Vec<i64>,
    /// 문서 id 목록
    #[serde(default)]
    pub documents: Vec<i64>,
}

impl User {
    /// 아직 저장되지 않은 새 사용자를 만듭니다. `id`는 생성 시 할당됩니다.
    pub fn new(
        name: String,
        email: String,
        user_type: UserType,
        courses: Vec<i64>,
        documents: Vec<i64>,
    ) -> Self {
        Self {
            mongo_id: None,
            id: 0,
            name,
            email,
            user_type,
            courses,
            documents,
        }
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "User";

    fn allocated_id(&self) -> i64 {
        self.id
    }

    fn native_ref(&self) -> Option<NativeRef> {
        self.mongo_id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_user_type_parsing() {
        assert_eq!("teacher".parse::<UserType>().unwrap(), UserType::Teacher);
        assert_eq!("student".parse::<UserType>().unwrap(), UserType::Student);
        assert!("Teacher".parse::<UserType>().is_err());
        assert!("admin".parse::<UserType>().is_err());
    }

    #[test]
    fn test_new_user_has_no_native_ref_in_bson() {
        let user = User::new(
            "Ada Lovelace".to_string(),
            "ada@uni.edu".to_string(),
            UserType::Teacher,
            vec![],
            vec![],
        );
        let document = bson::to_document(&user).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("type").unwrap(), "teacher");
    }

    #[test]
    fn test_user_reads_seeded_document_without_lists() {
        let stored = doc! {
            "_id": bson::oid::ObjectId::new(),
            "id": 3_i32,
            "name": "Grace Hopper",
            "email": "grace@uni.edu",
            "type": "student",
        };
        let user: User = bson::from_document(stored).unwrap();

        assert_eq!(user.id, 3);
        assert!(user.courses.is_empty());
        assert!(user.mongo_id.is_some());
    }
}
