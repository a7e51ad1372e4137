//! 과목 요청/응답 DTO

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::dto::{no_valid_fields, validation_failed, Patch};
use crate::domain::entities::subjects::Subject;
use crate::utils::string_utils::validate_length;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSubjectRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 500,
        message = "Description must be between 1 and 500 characters"
    ))]
    pub description: String,
}

impl CreateSubjectRequest {
    pub fn into_subject(self) -> AppResult<Subject> {
        self.validate().map_err(validation_failed)?;
        Ok(Subject::new(
            validate_length(&self.name, "Name", 1, 100)?,
            validate_length(&self.description, "Description", 1, 500)?,
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubjectRequest {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
}

impl UpdateSubjectRequest {
    pub fn into_changes(self) -> AppResult<Document> {
        let mut changes = Document::new();

        if let Some(name) = self.name.into_value() {
            changes.insert("name", validate_length(&name, "Name", 1, 100)?);
        }
        if let Some(description) = self.description.into_value() {
            changes.insert(
                "description",
                validate_length(&description, "Description", 1, 500)?,
            );
        }

        if changes.is_empty() {
            return Err(no_valid_fields());
        }
        Ok(changes)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectResponse {
    #[serde(rename = "_id")]
    pub mongo_id: String,
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<Subject> for SubjectResponse {
    fn from(subject: Subject) -> Self {
        Self {
            mongo_id: subject.mongo_id.map(|r| r.to_hex()).unwrap_or_default(),
            id: subject.id,
            name: subject.name,
            description: subject.description,
        }
    }
}
