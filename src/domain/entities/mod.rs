//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 대응되는 도메인 엔티티들을 정의합니다.
//!
//! ## 이중 식별자
//!
//! 모든 엔티티는 두 가지 식별자를 가집니다.
//!
//! - **할당 id** (`id: i64`): `IdentityAllocator`가 부여하는 순차 정수. 외부에서
//!   엔티티를 가리킬 때 주로 사용합니다.
//! - **네이티브 참조** (`_id`): MongoDB가 부여하는 `ObjectId`. [`NativeRef`]로
//!   감싸져 있으며 응답에서는 문자열로만 노출됩니다.
//!
//! 두 식별자는 하나의 "ID" 타입으로 합쳐지지 않습니다. `Document.owner`는
//! 사용자의 네이티브 참조를 가리키는 유일한 필드입니다.
//!
//! ```text
//! users      { _id, id, name, email, type, courses[], documents[] }
//! courses    { _id, id, name, subjects[] }
//! subjects   { _id, id, name, description }
//! documents  { _id, id, title, file_url, type, grade?, teacher_id, subject_id, owner, upload_date }
//! ```

use serde::{de::DeserializeOwned, Serialize};

pub mod native_ref;
pub mod users;
pub mod courses;
pub mod subjects;
pub mod documents;

pub use native_ref::NativeRef;

/// 컬렉션에 저장되는 엔티티의 공통 인터페이스
///
/// 제네릭 리포지토리([`CollectionRepository`](crate::repositories::CollectionRepository))가
/// 컬렉션 이름과 식별자에 접근하기 위해 사용합니다.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// MongoDB 컬렉션 이름
    const COLLECTION: &'static str;

    /// 로그와 에러 메시지에 쓰이는 엔티티 이름
    const LABEL: &'static str;

    /// 할당된 정수 id
    fn allocated_id(&self) -> i64;

    /// 영속화된 경우의 네이티브 참조
    fn native_ref(&self) -> Option<NativeRef>;

    /// 생성 시 할당된 id를 기록합니다.
    fn assign_id(&mut self, id: i64);
}
