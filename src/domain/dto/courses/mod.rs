//! 과정 요청/응답 DTO

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::dto::{no_valid_fields, validation_failed, Patch};
use crate::domain::entities::courses::Course;
use crate::utils::string_utils::validate_length;

/// 과정 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    /// 소속 과목 id 목록 (필수)
    pub subjects: Vec<i64>,
}

impl CreateCourseRequest {
    pub fn into_course(self) -> AppResult<Course> {
        self.validate().map_err(validation_failed)?;
        let name = validate_length(&self.name, "Name", 1, 100)?;
        Ok(Course::new(name, self.subjects))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub subjects: Patch<Vec<i64>>,
}

impl UpdateCourseRequest {
    pub fn into_changes(self) -> AppResult<Document> {
        let mut changes = Document::new();

        if let Some(name) = self.name.into_value() {
            changes.insert("name", validate_length(&name, "Name", 1, 100)?);
        }
        if let Some(subjects) = self.subjects.into_value() {
            changes.insert("subjects", subjects);
        }

        if changes.is_empty() {
            return Err(no_valid_fields());
        }
        Ok(changes)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResponse {
    #[serde(rename = "_id")]
    pub mongo_id: String,
    pub id: i64,
    pub name: String,
    pub subjects: Vec<i64>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            mongo_id: course.mongo_id.map(|r| r.to_hex()).unwrap_or_default(),
            id: course.id,
            name: course.name,
            subjects: course.subjects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_subjects() {
        let missing = serde_json::from_str::<CreateCourseRequest>(r#"{"name": "CS"}"#);
        assert!(missing.is_err());

        let course = serde_json::from_str::<CreateCourseRequest>(r#"{"name": " CS ", "subjects": [1]}"#)
            .unwrap()
            .into_course()
            .unwrap();
        assert_eq!(course.name, "CS");
        assert_eq!(course.subjects, vec![1]);
    }

    #[test]
    fn test_patch_rejects_blank_name() {
        let patch: UpdateCourseRequest = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        assert!(patch.into_changes().is_err());

        let patch: UpdateCourseRequest = serde_json::from_str(r#"{"subjects": []}"#).unwrap();
        let changes = patch.into_changes().unwrap();
        assert!(changes.get_array("subjects").unwrap().is_empty());
    }
}
