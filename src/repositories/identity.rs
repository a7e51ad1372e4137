//! 순차 정수 id 할당기
//!
//! 컬렉션의 현재 최대 `id`를 읽어 +1을 반환합니다. 컬렉션이 비어 있으면 1입니다.
//!
//! 조회와 삽입 사이에 잠금이 없으므로 동시 생성 시 같은 id가 나올 수 있습니다.
//! 시작 시 생성하는 `id` 유니크 인덱스가 이 경우 두 번째 삽입을 실패시킵니다.
//! 최대 id를 가진 엔티티가 삭제되면 그 id는 다음 생성에서 다시 쓰입니다.

use std::sync::Arc;

use log::debug;
use mongodb::bson::Bson;

use crate::core::errors::{AppError, AppResult};
use crate::db::{DocumentStore, Filter, Sort};

#[derive(Clone)]
pub struct IdentityAllocator {
    store: Arc<dyn DocumentStore>,
}

impl IdentityAllocator {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// 컬렉션의 다음 id를 반환합니다.
    pub async fn next_id(&self, collection: &str) -> AppResult<i64> {
        let top = self
            .store
            .find_one(collection, &Filter::all(), Some(&Sort::descending("id")))
            .await?;

        let current = match top.as_ref().and_then(|doc| doc.get("id")) {
            None | Some(Bson::Null) => 0,
            Some(Bson::Int32(v)) => i64::from(*v),
            Some(Bson::Int64(v)) => *v,
            Some(Bson::Double(v)) => *v as i64,
            Some(other) => {
                return Err(AppError::InternalError(format!(
                    "{} 컬렉션의 id 값이 정수가 아닙니다: {}",
                    collection, other
                )));
            }
        };

        let next = current.checked_add(1).ok_or_else(|| {
            AppError::InternalError(format!("{} 컬렉션의 id가 최댓값에 도달했습니다", collection))
        })?;

        debug!("🔢 {} 다음 id: {}", collection, next);
        Ok(next)
    }
}
