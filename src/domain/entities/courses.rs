//! Course Entity
//!
//! 과정은 `subjects` 목록(과목의 할당 id)으로 과목 소속을 정의합니다.
//! 과목 쪽에는 역방향 목록이 없습니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Entity, NativeRef};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<NativeRef>,
    #[serde(default)]
    pub id: i64,
    pub name: String,
    /// 소속 과목의 할당 id 목록
    #[serde(default)]
    pub subjects: Vec<i64>,
}

impl Course {
    pub fn new(name: String, subjects: Vec<i64>) -> Self {
        Self {
            mongo_id: None,
            id: 0,
            name,
            subjects,
        }
    }

    /// 과목이 이 과정에 속하는지 확인합니다.
    pub fn includes_subject(&self, subject_id: i64) -> bool {
        self.subjects.contains(&subject_id)
    }
}

impl Entity for Course {
    const COLLECTION: &'static str = "courses";
    const LABEL: &'static str = "Course";

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
