//! 사용자 생성/수정 요청 DTO

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::{no_valid_fields, validation_failed, Patch};
use crate::domain::entities::users::{User, UserType};
use crate::utils::string_utils::{
    is_valid_person_name, to_title_case, validate_length, validate_person_name,
    validate_required_string,
};

/// 사용자 생성 요청
///
/// ```json
/// { "name": "ada lovelace", "email": "ada@uni.edu", "type": "teacher", "courses": [1] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 2-100자, 영문/숫자/공백/하이픈/마침표
    #[validate(
        length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"),
        custom(function = "validate_person_name")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// "teacher" | "student"
    #[serde(rename = "type")]
    pub user_type: String,

    #[serde(default)]
    pub courses: Vec<i64>,

    #[serde(default)]
    pub documents: Vec<i64>,
}

impl CreateUserRequest {
    /// 검증 후 저장할 엔티티로 변환합니다. 이름은 타이틀 케이스로 정규화됩니다.
    pub fn into_user(self) -> AppResult<User> {
        self.validate().map_err(validation_failed)?;
        let name = validate_length(&self.name, "Name", 2, 100)?;
        let user_type: UserType = self.user_type.parse()?;

        Ok(User::new(
            to_title_case(&name),
            self.email.trim().to_string(),
            user_type,
            self.courses,
            self.documents,
        ))
    }
}

/// 사용자 부분 수정 요청
///
/// 모든 필드는 null을 허용하지 않으므로 `null`은 "변경 없음"으로 취급됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default, rename = "type")]
    pub user_type: Patch<String>,
    #[serde(default)]
    pub courses: Patch<Vec<i64>>,
    #[serde(default)]
    pub documents: Patch<Vec<i64>>,
}

impl UpdateUserRequest {
    /// 값이 있는 필드만 검증하여 `$set` 문서로 만듭니다.
    pub fn into_changes(self) -> AppResult<Document> {
        let mut changes = Document::new();

        if let Some(name) = self.name.into_value() {
            let name = validate_length(&name, "Name", 2, 100)?;
            if !is_valid_person_name(&name) {
                return Err(AppError::ValidationError(
                    "Name can only contain letters, numbers, spaces, hyphens, and periods"
                        .to_string(),
                ));
            }
            changes.insert("name", to_title_case(&name));
        }

        if let Some(email) = self.email.into_value() {
            let email = validate_required_string(&email, "Email")?;
            if !email.validate_email() {
                return Err(AppError::ValidationError("Invalid email address".to_string()));
            }
            changes.insert("email", email);
        }

        if let Some(user_type) = self.user_type.into_value() {
            let user_type: UserType = user_type.parse()?;
            changes.insert("type", user_type.as_str());
        }

        if let Some(courses) = self.courses.into_value() {
            changes.insert("courses", courses);
        }

        if let Some(documents) = self.documents.into_value() {
            changes.insert("documents", documents);
        }

        if changes.is_empty() {
            return Err(no_valid_fields());
        }
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, email: &str, user_type: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            user_type: user_type.to_string(),
            courses: vec![],
            documents: vec![],
        }
    }

    #[test]
    fn test_create_normalizes_name() {
        let user = create("grace  HOPPER", "grace@uni.edu", "student").into_user().unwrap();
        assert_eq!(user.name, "Grace  Hopper");
        assert_eq!(user.user_type, UserType::Student);
    }

    #[test]
    fn test_create_rejects_invalid_fields() {
        assert!(matches!(
            create("Ada", "ada@uni.edu", "admin").into_user(),
            Err(AppError::ValidationError(_))
        ));
        assert!(create("Ada", "not-an-email", "teacher").into_user().is_err());
        assert!(create("A", "ada@uni.edu", "teacher").into_user().is_err());
        assert!(create("Ada_L", "ada@uni.edu", "teacher").into_user().is_err());
    }

    #[test]
    fn test_create_measures_trimmed_name() {
        assert!(matches!(
            create("   ", "blank@uni.edu", "student").into_user(),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            create("  a  ", "short@uni.edu", "student").into_user(),
            Err(AppError::ValidationError(_))
        ));

        let user = create("  ab  ", "ab@uni.edu", "student").into_user().unwrap();
        assert_eq!(user.name, "Ab");
    }

    #[test]
    fn test_create_defaults_lists() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{"name": "Alan Turing", "email": "alan@uni.edu", "type": "teacher"}"#,
        )
        .unwrap();
        let user = request.into_user().unwrap();
        assert!(user.courses.is_empty());
        assert!(user.documents.is_empty());
    }

    #[test]
    fn test_patch_keeps_only_present_fields() {
        let patch: UpdateUserRequest =
            serde_json::from_str(r#"{"name": "ada byron", "email": null}"#).unwrap();
        let changes = patch.into_changes().unwrap();

        assert_eq!(changes.len(), 1);
        assert_eq!(changes.get_str("name").unwrap(), "Ada Byron");
    }

    #[test]
    fn test_empty_or_null_patch_has_no_valid_fields() {
        for body in ["{}", r#"{"name": null, "type": null}"#] {
            let patch: UpdateUserRequest = serde_json::from_str(body).unwrap();
            let err = patch.into_changes().unwrap_err();
            assert_eq!(err.to_string(), "Validation error: No valid fields to update");
        }
    }

    #[test]
    fn test_patch_validates_present_fields() {
        let bad_type: UpdateUserRequest = serde_json::from_str(r#"{"type": "dean"}"#).unwrap();
        assert!(bad_type.into_changes().is_err());

        let bad_email: UpdateUserRequest = serde_json::from_str(r#"{"email": "nope"}"#).unwrap();
        assert!(bad_email.into_changes().is_err());
    }
}
