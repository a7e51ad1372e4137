//! Document Entity
//!
//! 강의 자료, 과제, 시험 등 업로드된 학습 문서를 표현합니다.
//! `teacher_id`/`subject_id`는 할당 id로, `owner`는 사용자의 네이티브 참조로
//! 연결됩니다.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::entities::{Entity, NativeRef};

/// 문서 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Lecture Notes")]
    LectureNotes,
    Assignment,
    Exam,
    Project,
    #[serde(rename = "Study Guide")]
    StudyGuide,
}

impl DocumentType {
    pub const ALLOWED: [&'static str; 5] =
        ["Lecture Notes", "Assignment", "Exam", "Project", "Study Guide"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::LectureNotes => "Lecture Notes",
            DocumentType::Assignment => "Assignment",
            DocumentType::Exam => "Exam",
            DocumentType::Project => "Project",
            DocumentType::StudyGuide => "Study Guide",
        }
    }
}

impl FromStr for DocumentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lecture Notes" => Ok(DocumentType::LectureNotes),
            "Assignment" => Ok(DocumentType::Assignment),
            "Exam" => Ok(DocumentType::Exam),
            "Project" => Ok(DocumentType::Project),
            "Study Guide" => Ok(DocumentType::StudyGuide),
            _ => Err(AppError::ValidationError(format!(
                "Document type must be one of: {}",
                DocumentType::ALLOWED.join(", ")
            ))),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 문서 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<NativeRef>,
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub file_url: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// 채점 전이면 None
    #[serde(default)]
    pub grade: Option<f64>,
    pub teacher_id: i64,
    pub subject_id: i64,
    /// 소유 사용자의 네이티브 참조
    pub owner: NativeRef,
    pub upload_date: DateTime,
}

impl Document {
    /// 업로드 시각을 현재로 찍은 새 문서를 만듭니다.
    pub fn new(
        title: String,
        file_url: String,
        doc_type: DocumentType,
        grade: Option<f64>,
        teacher_id: i64,
        subject_id: i64,
        owner: NativeRef,
    ) -> Self {
        Self {
            mongo_id: None,
            id: 0,
            title,
            file_url,
            doc_type,
            grade,
            teacher_id,
            subject_id,
            owner,
            upload_date: DateTime::now(),
        }
    }
}

impl Entity for Document {
    const COLLECTION: &'static str = "documents";
    const LABEL: &'static str = "Document";

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
    use mongodb::bson::{self, Bson};

    #[test]
    fn test_document_type_wire_names() {
        for name in DocumentType::ALLOWED {
            let parsed: DocumentType = name.parse().unwrap();
            assert_eq!(parsed.as_str(), name);
            assert_eq!(bson::to_bson(&parsed).unwrap(), Bson::String(name.to_string()));
        }
    }

    #[test]
    fn test_unknown_document_type_names_allowed_values() {
        let err = "Essay".parse::<DocumentType>().unwrap_err();
        assert!(err.to_string().contains("Lecture Notes, Assignment, Exam, Project, Study Guide"));
    }

    #[test]
    fn test_owner_is_stored_as_object_id() {
        let owner = NativeRef::generate();
        let document = Document::new(
            "Final Exam".to_string(),
            "https://example.com/exam.pdf".to_string(),
            DocumentType::Exam,
            None,
            1,
            1,
            owner,
        );
        let stored = bson::to_document(&document).unwrap();

        assert_eq!(stored.get_object_id("owner").unwrap(), owner.object_id());
        assert_eq!(stored.get("grade"), Some(&Bson::Null));
    }
}
