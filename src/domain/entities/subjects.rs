//! Subject Entity

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Entity, NativeRef};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<NativeRef>,
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Subject {
    pub fn new(name: String, description: String) -> Self {
        Self {
            mongo_id: None,
            id: 0,
            name,
            description,
        }
    }
}

impl Entity for Subject {
    const COLLECTION: &'static str = "subjects";
    const LABEL: &'static str = "Subject";

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
