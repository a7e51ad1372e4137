//! # Service Registry
//!
//! 저장소 핸들에서 시작하는 의존성 그래프를 명시적으로 조립합니다.
//!
//! ```text
//! Arc<dyn DocumentStore>
//!     ├── IdentityAllocator (리포지토리 내부)
//!     ├── UserRepository / CourseRepository / SubjectRepository / DocumentRepository
//!     ├── ReferenceResolver
//!     └── UserService / CourseService / SubjectService / DocumentService
//! ```
//!
//! 전역 싱글톤은 없습니다. `main`이 저장소를 열어 레지스트리를 만들고,
//! 각 워커의 `App`에 [`ServiceRegistry::register`]로 `app_data`를 등록합니다.
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::new(store.clone());
//! registry.ensure_indexes().await;
//!
//! HttpServer::new(move || {
//!     let registry = registry.clone();
//!     App::new().configure(move |cfg| registry.register(cfg))
//! })
//! ```

use std::sync::Arc;

use actix_web::web;
use log::{info, warn};

use crate::db::DocumentStore;
use crate::domain::entities::{
    courses::Course, documents::Document, subjects::Subject, users::User, Entity,
};
use crate::repositories::{CourseRepository, DocumentRepository, SubjectRepository, UserRepository};
use crate::services::{
    courses::CourseService, documents::DocumentService, relations::ReferenceResolver,
    subjects::SubjectService, users::UserService,
};
use crate::utils::display_terminal::{print_registry_summary, print_sub_task};

/// 관리 대상 컬렉션 이름
pub const COLLECTIONS: [&str; 4] = [
    User::COLLECTION,
    Course::COLLECTION,
    Subject::COLLECTION,
    Document::COLLECTION,
];

/// 애플리케이션 서비스 묶음
#[derive(Clone)]
pub struct ServiceRegistry {
    store: Arc<dyn DocumentStore>,
    pub users: UserService,
    pub courses: CourseService,
    pub subjects: SubjectService,
    pub documents: DocumentService,
}

impl ServiceRegistry {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let resolver = ReferenceResolver::new(store.clone());

        Self {
            users: UserService::new(UserRepository::new(store.clone()), resolver.clone()),
            courses: CourseService::new(CourseRepository::new(store.clone()), resolver.clone()),
            subjects: SubjectService::new(SubjectRepository::new(store.clone()), resolver.clone()),
            documents: DocumentService::new(DocumentRepository::new(store.clone()), resolver),
            store,
        }
    }

    pub fn store(&self) -> Arc<dyn DocumentStore> {
        self.store.clone()
    }

    /// 모든 컬렉션의 `id` 유니크 인덱스와 `users.email` 대소문자 무시 유니크 인덱스를 보장합니다.
    ///
    /// 기존 데이터에 중복이 있어 생성에 실패하면 경고만 남기고 계속 진행합니다.
    pub async fn ensure_indexes(&self) {
        let mut targets: Vec<(&str, &str, bool)> =
            COLLECTIONS.iter().map(|collection| (*collection, "id", false)).collect();
        targets.push((User::COLLECTION, "email", true));

        for (collection, field, case_insensitive) in targets {
            let label = format!("{}.{}", collection, field);
            match self
                .store
                .ensure_unique_index(collection, field, case_insensitive)
                .await
            {
                Ok(()) => print_sub_task(&label, "unique ✓"),
                Err(e) => {
                    warn!("⚠️ 인덱스 생성 실패 ({}): {}", label, e);
                    print_sub_task(&label, "skipped");
                }
            }
        }
    }

    /// 각 서비스와 저장소 핸들을 actix `app_data`로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.store.clone()))
            .app_data(web::Data::new(self.users.clone()))
            .app_data(web::Data::new(self.courses.clone()))
            .app_data(web::Data::new(self.subjects.clone()))
            .app_data(web::Data::new(self.documents.clone()));
    }

    pub fn print_summary(&self) {
        info!("✅ 서비스 레지스트리 구성 완료 ({})", self.store.backend_name());
        print_registry_summary(
            self.store.backend_name(),
            &COLLECTIONS,
            &["UserService", "CourseService", "SubjectService", "DocumentService"],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[actix_web::test]
    async fn test_services_share_one_store() {
        let registry = ServiceRegistry::new(Arc::new(MemoryStore::new()));
        registry.ensure_indexes().await;

        registry
            .subjects
            .create_subject(crate::domain::dto::subjects::CreateSubjectRequest {
                name: "Algebra".to_string(),
                description: "Intro".to_string(),
            })
            .await
            .unwrap();

        let stored = registry
            .store()
            .find(Subject::COLLECTION, &crate::db::Filter::all())
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(registry.subjects.list_subjects().await.unwrap().len(), 1);
    }
}
