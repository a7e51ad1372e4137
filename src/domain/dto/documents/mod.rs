//! 문서 요청/응답 DTO
//!
//! `grade`는 유일하게 null을 허용하는 필드입니다. 수정 요청에서 `"grade": null`은
//! 점수를 지우고, 키가 없으면 그대로 둡니다.

use mongodb::bson::{Bson, Document as BsonDocument};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::{no_valid_fields, validation_failed, Patch};
use crate::domain::entities::documents::{Document, DocumentType};
use crate::domain::entities::NativeRef;
use crate::utils::string_utils::{validate_length, validate_required_string};

const GRADE_RANGE_MESSAGE: &str = "Grade must be between 0 and 100";

/// 문서 생성 요청
///
/// `owner`는 소유 사용자의 네이티브 참조(24자리 16진수)입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "File URL must not be empty"))]
    pub file_url: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "Grade must be between 0 and 100"))]
    pub grade: Option<f64>,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub owner: String,
}

impl CreateDocumentRequest {
    /// 검증 후 업로드 시각을 찍은 엔티티로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 제목/URL/유형/점수 규칙 위반
    /// * `MalformedReference` - `owner`가 네이티브 참조 형식이 아님
    pub fn into_document(self) -> AppResult<Document> {
        self.validate().map_err(validation_failed)?;
        let doc_type: DocumentType = self.doc_type.parse()?;
        let owner = NativeRef::parse(&self.owner)?;

        Ok(Document::new(
            validate_length(&self.title, "Title", 1, 200)?,
            validate_required_string(&self.file_url, "File URL")?,
            doc_type,
            self.grade,
            self.teacher_id,
            self.subject_id,
            owner,
        ))
    }
}

/// 문서 부분 수정 요청 (`upload_date`는 수정할 수 없습니다)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDocumentRequest {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub file_url: Patch<String>,
    #[serde(default, rename = "type")]
    pub doc_type: Patch<String>,
    #[serde(default)]
    pub grade: Patch<f64>,
    #[serde(default)]
    pub teacher_id: Patch<i64>,
    #[serde(default)]
    pub subject_id: Patch<i64>,
    #[serde(default)]
    pub owner: Patch<String>,
}

impl UpdateDocumentRequest {
    pub fn into_changes(self) -> AppResult<BsonDocument> {
        let mut changes = BsonDocument::new();

        if let Some(title) = self.title.into_value() {
            changes.insert("title", validate_length(&title, "Title", 1, 200)?);
        }
        if let Some(file_url) = self.file_url.into_value() {
            changes.insert("file_url", validate_required_string(&file_url, "File URL")?);
        }
        if let Some(doc_type) = self.doc_type.into_value() {
            let doc_type: DocumentType = doc_type.parse()?;
            changes.insert("type", doc_type.as_str());
        }
        match self.grade {
            Patch::Absent => {}
            Patch::Null => {
                changes.insert("grade", Bson::Null);
            }
            Patch::Value(grade) => {
                changes.insert("grade", validate_grade(grade)?);
            }
        }
        if let Some(teacher_id) = self.teacher_id.into_value() {
            changes.insert("teacher_id", teacher_id);
        }
        if let Some(subject_id) = self.subject_id.into_value() {
            changes.insert("subject_id", subject_id);
        }
        if let Some(owner) = self.owner.into_value() {
            changes.insert("owner", NativeRef::parse(&owner)?);
        }

        if changes.is_empty() {
            return Err(no_valid_fields());
        }
        Ok(changes)
    }
}

fn validate_grade(grade: f64) -> AppResult<f64> {
    if !(0.0..=100.0).contains(&grade) {
        return Err(AppError::ValidationError(GRADE_RANGE_MESSAGE.to_string()));
    }
    Ok(grade)
}

/// 문서 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    #[serde(rename = "_id")]
    pub mongo_id: String,
    pub id: i64,
    pub title: String,
    pub file_url: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub grade: Option<f64>,
    pub teacher_id: i64,
    pub subject_id: i64,
    /// 소유 사용자의 네이티브 참조 (16진수 문자열)
    pub owner: String,
    /// RFC 3339
    pub upload_date: String,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            mongo_id: document.mongo_id.map(|r| r.to_hex()).unwrap_or_default(),
            id: document.id,
            title: document.title,
            file_url: document.file_url,
            doc_type: document.doc_type,
            grade: document.grade,
            teacher_id: document.teacher_id,
            subject_id: document.subject_id,
            owner: document.owner.to_hex(),
            upload_date: document.upload_date.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(grade: Option<f64>, owner: &str, doc_type: &str) -> CreateDocumentRequest {
        CreateDocumentRequest {
            title: "Midterm".to_string(),
            file_url: "https://files.uni.edu/midterm.pdf".to_string(),
            doc_type: doc_type.to_string(),
            grade,
            teacher_id: 1,
            subject_id: 2,
            owner: owner.to_string(),
        }
    }

    #[test]
    fn test_grade_out_of_range_is_rejected() {
        let owner = NativeRef::generate().to_hex();
        assert!(matches!(
            create(Some(150.0), &owner, "Exam").into_document(),
            Err(AppError::ValidationError(_))
        ));
        assert!(create(Some(-0.5), &owner, "Exam").into_document().is_err());
        assert!(create(None, &owner, "Exam").into_document().is_ok());
        assert!(create(Some(100.0), &owner, "Exam").into_document().is_ok());
    }

    #[test]
    fn test_owner_must_be_native_reference() {
        assert!(matches!(
            create(None, "user-42", "Exam").into_document(),
            Err(AppError::MalformedReference(_))
        ));
    }

    #[test]
    fn test_unknown_type_lists_allowed_values() {
        let owner = NativeRef::generate().to_hex();
        let err = create(None, &owner, "Essay").into_document().unwrap_err();
        assert!(err.to_string().contains("Study Guide"));
    }

    #[test]
    fn test_grade_patch_null_clears_and_absent_keeps() {
        let clear: UpdateDocumentRequest = serde_json::from_str(r#"{"grade": null}"#).unwrap();
        assert_eq!(clear.into_changes().unwrap().get("grade"), Some(&Bson::Null));

        let untouched: UpdateDocumentRequest = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(untouched.into_changes().is_err());

        let too_high: UpdateDocumentRequest = serde_json::from_str(r#"{"grade": 101}"#).unwrap();
        assert!(too_high.into_changes().is_err());
    }

    #[test]
    fn test_response_renders_references_as_strings() {
        let owner = NativeRef::generate();
        let document = create(Some(75.0), &owner.to_hex(), "Lecture Notes")
            .into_document()
            .unwrap();
        let json = serde_json::to_value(DocumentResponse::from(document)).unwrap();

        assert_eq!(json["owner"], owner.to_hex());
        assert_eq!(json["type"], "Lecture Notes");
        assert!(json["upload_date"].as_str().unwrap().contains('T'));
    }
}
