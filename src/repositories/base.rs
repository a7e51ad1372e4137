//! # 컬렉션 리포지토리 공통 구현
//!
//! 모든 엔티티 리포지토리가 공유하는 CRUD 연산입니다. 엔티티별 조회 메서드는
//! 각 엔티티 모듈에서 `impl CollectionRepository<User>`처럼 추가됩니다.
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `AppResult<T>`를 반환합니다. 저장소 오류는 `DatabaseError`,
//! BSON 변환 오류는 `InternalError`로 올라가며, 서비스 경계에서 재포장됩니다.

use std::marker::PhantomData;
use std::sync::Arc;

use log::debug;
use mongodb::bson::{self, Document};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::{DocumentStore, Filter};
use crate::domain::entities::{Entity, NativeRef};
use crate::repositories::identity::IdentityAllocator;

/// 단일 컬렉션에 대한 데이터 액세스 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(store.clone());
///
/// let created = repo.create(User::new(name, email, UserType::Student, vec![], vec![])).await?;
/// let found = repo.get_by_id(created.id).await?;
/// let updated = repo.update(created.id, doc! { "name": "Grace Hopper" }).await?;
/// let deleted = repo.delete(created.id).await?;
/// ```
pub struct CollectionRepository<E: Entity> {
    store: Arc<dyn DocumentStore>,
    allocator: IdentityAllocator,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Clone for CollectionRepository<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            allocator: self.allocator.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> CollectionRepository<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            allocator: IdentityAllocator::new(store.clone()),
            store,
            _entity: PhantomData,
        }
    }

    /// 컬렉션 전체를 저장 순서대로 조회합니다.
    pub async fn list_all(&self) -> AppResult<Vec<E>> {
        self.find_where(&Filter::all()).await
    }

    /// 조건에 맞는 엔티티를 조회합니다.
    pub async fn find_where(&self, filter: &Filter) -> AppResult<Vec<E>> {
        let documents = self.store.find(E::COLLECTION, filter).await?;
        documents.into_iter().map(Self::decode).collect()
    }

    /// 조건에 맞는 첫 엔티티를 조회합니다.
    pub async fn find_first(&self, filter: &Filter) -> AppResult<Option<E>> {
        self.store
            .find_one(E::COLLECTION, filter, None)
            .await?
            .map(Self::decode)
            .transpose()
    }

    /// 할당 id로 조회합니다.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<E>> {
        self.find_first(&Filter::eq("id", id)).await
    }

    /// 네이티브 참조로 조회합니다.
    pub async fn get_by_native_ref(&self, native_ref: NativeRef) -> AppResult<Option<E>> {
        self.find_first(&Filter::eq("_id", native_ref)).await
    }

    /// 새 id를 할당하여 저장하고, 저장된 엔티티를 다시 읽어 반환합니다.
    pub async fn create(&self, mut entity: E) -> AppResult<E> {
        let id = self.allocator.next_id(E::COLLECTION).await?;
        entity.assign_id(id);

        let document = bson::to_document(&entity)
            .with_context(|| format!("{} 직렬화 실패", E::LABEL))?;
        let native_ref = self.store.insert_one(E::COLLECTION, document).await?;

        let created = self.get_by_native_ref(native_ref).await?.ok_or_else(|| {
            AppError::DatabaseError(format!(
                "{} {}를 저장한 직후 다시 읽지 못했습니다",
                E::LABEL,
                id
            ))
        })?;

        if created.native_ref() != Some(native_ref) || created.allocated_id() != id {
            return Err(AppError::DatabaseError(format!(
                "{} {} 저장 결과가 요청과 다릅니다",
                E::LABEL,
                id
            )));
        }

        debug!("{} 생성: id={} _id={}", E::LABEL, created.allocated_id(), native_ref);
        Ok(created)
    }

    /// 존재하는 엔티티의 필드를 덮어씁니다.
    ///
    /// 엔티티가 없거나 실제로 바뀐 값이 없으면 `None`을 반환합니다.
    pub async fn update(&self, id: i64, changes: Document) -> AppResult<Option<E>> {
        if self.get_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let outcome = self
            .store
            .update_one(E::COLLECTION, &Filter::eq("id", id), changes)
            .await?;

        if outcome.modified_count == 0 {
            debug!("{} {} 변경 없음", E::LABEL, id);
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// 엔티티를 삭제합니다. 없으면 `false`를 반환합니다.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        if self.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let deleted = self
            .store
            .delete_one(E::COLLECTION, &Filter::eq("id", id))
            .await?;

        Ok(deleted > 0)
    }

    fn decode(document: Document) -> AppResult<E> {
        bson::from_document(document).with_context(|| format!("{} 역직렬화 실패", E::LABEL))
    }
}
