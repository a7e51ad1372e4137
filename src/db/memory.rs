//! 인메모리 문서 저장소
//!
//! MongoDB와 같은 필터 의미를 갖는 프로세스 내 저장소입니다. 컬렉션은 삽입 순서를
//! 유지하는 `Vec<Document>`이며, 프로세스가 끝나면 데이터도 사라집니다.
//! `STORAGE_BACKEND=memory`로 실행하거나 테스트에서 사용합니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use log::debug;
use mongodb::bson::{Bson, Document};

use crate::core::errors::{AppError, AppResult};
use crate::db::store::{DocumentStore, Filter, Sort, UpdateOutcome};
use crate::domain::entities::NativeRef;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<String, Vec<Document>>>> {
        self.collections
            .read()
            .map_err(|_| AppError::DatabaseError("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<String, Vec<Document>>>> {
        self.collections
            .write()
            .map_err(|_| AppError::DatabaseError("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> AppResult<()> {
        self.read().map(|_| ())
    }

    async fn find(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>> {
        let collections = self.read()?;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
        sort: Option<&Sort>,
    ) -> AppResult<Option<Document>> {
        let collections = self.read()?;
        let Some(docs) = collections.get(collection) else {
            return Ok(None);
        };

        let mut candidates = docs.iter().filter(|d| filter.matches(d));
        let found = match sort {
            None => candidates.next(),
            Some(sort) => {
                let key = |d: &&Document| sort_key(d.get(&sort.field));
                if sort.descending {
                    candidates.max_by(|a, b| key(a).total_cmp(&key(b)))
                } else {
                    candidates.min_by(|a, b| key(a).total_cmp(&key(b)))
                }
            }
        };

        Ok(found.cloned())
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> AppResult<NativeRef> {
        let native_ref = match document.get("_id") {
            Some(Bson::ObjectId(oid)) => NativeRef::from(*oid),
            _ => {
                let generated = NativeRef::generate();
                document.insert("_id", generated);
                generated
            }
        };

        self.write()?
            .entry(collection.to_string())
            .or_default()
            .push(document);

        debug!("memory insert: {} {}", collection, native_ref);
        Ok(native_ref)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        changes: Document,
    ) -> AppResult<UpdateOutcome> {
        let mut collections = self.write()?;
        let Some(target) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| filter.matches(d)))
        else {
            return Ok(UpdateOutcome::default());
        };

        let mut modified = false;
        for (key, value) in changes {
            if target.get(&key) != Some(&value) {
                target.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let mut collections = self.write()?;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };

        match docs.iter().position(|d| filter.matches(d)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ensure_unique_index(
        &self,
        collection: &str,
        field: &str,
        _case_insensitive: bool,
    ) -> AppResult<()> {
        debug!("memory store: index {}.{} skipped", collection, field);
        Ok(())
    }

    async fn close(&self) {
        debug!("memory store closed");
    }
}

// 정렬 키가 숫자가 아니면 가장 작은 값으로 취급합니다.
fn sort_key(value: Option<&Bson>) -> f64 {
    match value {
        Some(Bson::Int32(v)) => f64::from(*v),
        Some(Bson::Int64(v)) => *v as f64,
        Some(Bson::Double(v)) => *v,
        _ => f64::NEG_INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[actix_web::test]
    async fn test_insert_assigns_native_ref_and_find_keeps_order() {
        let store = MemoryStore::new();
        let first = store.insert_one("users", doc! { "id": 1_i64 }).await.unwrap();
        store.insert_one("users", doc! { "id": 2_i64 }).await.unwrap();

        let all = store.find("users", &Filter::all()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].get_object_id("_id").unwrap(), first.object_id());
        assert_eq!(all[1].get_i64("id").unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_find_one_sorted_descending_returns_max() {
        let store = MemoryStore::new();
        for id in [3_i64, 7, 5] {
            store.insert_one("courses", doc! { "id": id }).await.unwrap();
        }

        let max = store
            .find_one("courses", &Filter::all(), Some(&Sort::descending("id")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(max.get_i64("id").unwrap(), 7);

        let missing = store
            .find_one("subjects", &Filter::all(), Some(&Sort::descending("id")))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[actix_web::test]
    async fn test_update_reports_unmodified_when_values_equal() {
        let store = MemoryStore::new();
        store
            .insert_one("subjects", doc! { "id": 1_i64, "name": "Algebra" })
            .await
            .unwrap();

        let same = store
            .update_one("subjects", &Filter::eq("id", 1_i64), doc! { "name": "Algebra" })
            .await
            .unwrap();
        assert_eq!(same, UpdateOutcome { matched_count: 1, modified_count: 0 });

        let changed = store
            .update_one("subjects", &Filter::eq("id", 1_i64), doc! { "name": "Geometry" })
            .await
            .unwrap();
        assert_eq!(changed.modified_count, 1);

        let missing = store
            .update_one("subjects", &Filter::eq("id", 9_i64), doc! { "name": "X" })
            .await
            .unwrap();
        assert_eq!(missing.matched_count, 0);
    }

    #[actix_web::test]
    async fn test_delete_removes_only_first_match() {
        let store = MemoryStore::new();
        store.insert_one("documents", doc! { "id": 1_i64 }).await.unwrap();
        store.insert_one("documents", doc! { "id": 2_i64 }).await.unwrap();

        assert_eq!(store.delete_one("documents", &Filter::eq("id", 1_i64)).await.unwrap(), 1);
        assert_eq!(store.delete_one("documents", &Filter::eq("id", 1_i64)).await.unwrap(), 0);
        assert_eq!(store.find("documents", &Filter::all()).await.unwrap().len(), 1);
    }
}
