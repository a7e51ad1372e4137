//! # 참조 관계 해석기
//!
//! 컬렉션 사이의 참조를 따라가는 읽기 전용 조회입니다.
//!
//! ```text
//! Course.subjects[] ──(id)──▶ Subject
//! Document.teacher_id ─(id)─▶ User
//! Document.subject_id ─(id)─▶ Subject
//! Document.owner ──(_id)────▶ User
//! ```
//!
//! 삭제 시 연쇄 정리는 하지 않으므로, 참조 대상이 사라진 id는 조회 결과에서
//! 조용히 빠집니다.

use std::sync::Arc;

use log::{debug, warn};

use crate::{
    core::errors::AppResult,
    db::DocumentStore,
    domain::entities::{courses::Course, documents::Document, subjects::Subject, NativeRef},
    repositories::{CourseRepository, DocumentRepository, SubjectRepository, UserRepository},
};

#[derive(Clone)]
pub struct ReferenceResolver {
    user_repo: UserRepository,
    course_repo: CourseRepository,
    subject_repo: SubjectRepository,
    document_repo: DocumentRepository,
}

impl ReferenceResolver {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            user_repo: UserRepository::new(store.clone()),
            course_repo: CourseRepository::new(store.clone()),
            subject_repo: SubjectRepository::new(store.clone()),
            document_repo: DocumentRepository::new(store),
        }
    }

    /// 과정에 속한 과목들. 과정이 없으면 빈 목록입니다.
    pub async fn subjects_by_course(&self, course_id: i64) -> AppResult<Vec<Subject>> {
        let Some(course) = self.course_repo.get_by_id(course_id).await? else {
            debug!("course {} 없음: 과목 없음으로 처리", course_id);
            return Ok(Vec::new());
        };

        self.subject_repo.find_by_ids(&course.subjects).await
    }

    /// `subjects`에 과목 id를 포함한 과정들
    pub async fn courses_by_subject(&self, subject_id: i64) -> AppResult<Vec<Course>> {
        self.course_repo.find_by_subject(subject_id).await
    }

    /// 소유자의 네이티브 참조 문자열로 문서 조회
    ///
    /// 참조 문자열을 파싱할 수 없으면 에러 대신 빈 목록을 반환합니다.
    pub async fn documents_by_owner(&self, owner_ref: &str) -> AppResult<Vec<Document>> {
        match NativeRef::parse(owner_ref) {
            Ok(owner) => self.document_repo.find_by_owner(owner).await,
            Err(e) => {
                warn!("⚠️ 소유자 참조 파싱 실패, 빈 결과 반환: {}", e);
                Ok(Vec::new())
            }
        }
    }

    pub async fn documents_by_teacher(&self, teacher_id: i64) -> AppResult<Vec<Document>> {
        self.document_repo.find_by_teacher(teacher_id).await
    }

    pub async fn documents_by_subject(&self, subject_id: i64) -> AppResult<Vec<Document>> {
        self.document_repo.find_by_subject(subject_id).await
    }

    /// 이메일이 다른 사용자에게 이미 쓰이고 있는지 확인합니다. (대소문자 무시)
    ///
    /// `exclude_id`가 주어지면 해당 사용자 자신과의 일치는 무시합니다.
    pub async fn email_in_use(&self, email: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let owner = self.user_repo.find_by_email_ignore_case(email).await?;
        Ok(owner.is_some_and(|user| Some(user.id) != exclude_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::domain::entities::documents::DocumentType;
    use crate::domain::entities::users::{User, UserType};

    struct Fixture {
        store: Arc<dyn DocumentStore>,
        resolver: ReferenceResolver,
    }

    fn fixture() -> Fixture {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        Fixture {
            resolver: ReferenceResolver::new(store.clone()),
            store,
        }
    }

    #[actix_web::test]
    async fn test_subjects_by_course_returns_listed_subjects() {
        let f = fixture();
        let subjects = SubjectRepository::new(f.store.clone());
        for name in ["Algebra", "Geometry", "Calculus", "Statistics", "Logic"] {
            subjects.create(Subject::new(name.to_string(), "Intro".to_string())).await.unwrap();
        }
        CourseRepository::new(f.store.clone())
            .create(Course::new("Mathematics".to_string(), vec![1, 2, 3, 4]))
            .await
            .unwrap();

        let found = f.resolver.subjects_by_course(1).await.unwrap();
        let ids: Vec<i64> = found.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        assert!(f.resolver.subjects_by_course(99).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_deleted_subject_leaves_dangling_reference() {
        let f = fixture();
        let subjects = SubjectRepository::new(f.store.clone());
        let courses = CourseRepository::new(f.store.clone());

        let subject = subjects
            .create(Subject::new("Programming Fundamentals".to_string(), "Intro".to_string()))
            .await
            .unwrap();
        let course = courses.create(Course::new("CS".to_string(), vec![subject.id])).await.unwrap();
        assert_eq!((subject.id, course.id), (1, 1));
        assert_eq!(f.resolver.subjects_by_course(1).await.unwrap().len(), 1);

        assert!(subjects.delete(1).await.unwrap());

        assert!(f.resolver.subjects_by_course(1).await.unwrap().is_empty());
        let course = courses.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(course.subjects, vec![1]);
        assert_eq!(f.resolver.courses_by_subject(1).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_documents_by_owner_degrades_on_malformed_ref() {
        let f = fixture();
        let owner = NativeRef::generate();
        DocumentRepository::new(f.store.clone())
            .create(Document::new(
                "Notes".to_string(),
                "https://files.uni.edu/notes.pdf".to_string(),
                DocumentType::LectureNotes,
                None,
                1,
                1,
                owner,
            ))
            .await
            .unwrap();

        assert_eq!(f.resolver.documents_by_owner(&owner.to_hex()).await.unwrap().len(), 1);
        assert!(f.resolver.documents_by_owner("not-a-ref").await.unwrap().is_empty());
        assert!(f
            .resolver
            .documents_by_owner(&NativeRef::generate().to_hex())
            .await
            .unwrap()
            .is_empty());
        assert_eq!(f.resolver.documents_by_teacher(1).await.unwrap().len(), 1);
        assert!(f.resolver.documents_by_subject(2).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_email_in_use_ignores_case_and_self() {
        let f = fixture();
        let user = UserRepository::new(f.store.clone())
            .create(User::new(
                "Ada Lovelace".to_string(),
                "X@Y.com".to_string(),
                UserType::Teacher,
                vec![],
                vec![],
            ))
            .await
            .unwrap();

        assert!(f.resolver.email_in_use("x@y.com", None).await.unwrap());
        assert!(!f.resolver.email_in_use("x@y.com", Some(user.id)).await.unwrap());
        assert!(!f.resolver.email_in_use("z@y.com", None).await.unwrap());
    }
}
