//! 과목 관리 서비스

use log::info;

use crate::{
    core::errors::{AppError, AppResult, BoundaryExt},
    domain::{
        dto::{
            subjects::{CreateSubjectRequest, SubjectResponse, UpdateSubjectRequest},
            MessageResponse,
        },
        entities::{subjects::Subject, Entity, NativeRef},
    },
    repositories::SubjectRepository,
    services::relations::ReferenceResolver,
};

#[derive(Clone)]
pub struct SubjectService {
    subject_repo: SubjectRepository,
    resolver: ReferenceResolver,
}

impl SubjectService {
    pub fn new(subject_repo: SubjectRepository, resolver: ReferenceResolver) -> Self {
        Self { subject_repo, resolver }
    }

    pub async fn list_subjects(&self) -> AppResult<Vec<SubjectResponse>> {
        let subjects = self
            .subject_repo
            .list_all()
            .await
            .at_boundary("Error fetching subjects")?;
        Ok(subjects.into_iter().map(SubjectResponse::from).collect())
    }

    pub async fn get_subject(&self, id: i64) -> AppResult<SubjectResponse> {
        self.subject_repo
            .get_by_id(id)
            .await
            .at_boundary("Error fetching subject")?
            .map(SubjectResponse::from)
            .ok_or_else(|| AppError::not_found(Subject::LABEL, id))
    }

    pub async fn get_subject_by_ref(&self, raw_ref: &str) -> AppResult<SubjectResponse> {
        let not_found = || AppError::NotFound(format!("Subject with reference {} not found", raw_ref));

        let Ok(native_ref) = NativeRef::parse(raw_ref) else {
            return Err(not_found());
        };

        self.subject_repo
            .get_by_native_ref(native_ref)
            .await
            .at_boundary("Error fetching subject")?
            .map(SubjectResponse::from)
            .ok_or_else(not_found)
    }

    /// 과정에 속한 과목들. 과정이 없거나 남은 과목이 없으면 `NotFound`입니다.
    pub async fn subjects_by_course(&self, course_id: i64) -> AppResult<Vec<SubjectResponse>> {
        let subjects = self
            .resolver
            .subjects_by_course(course_id)
            .await
            .at_boundary("Error fetching subjects by course")?;

        if subjects.is_empty() {
            return Err(AppError::NotFound(format!(
                "No subjects found for course {}",
                course_id
            )));
        }
        Ok(subjects.into_iter().map(SubjectResponse::from).collect())
    }

    pub async fn create_subject(&self, request: CreateSubjectRequest) -> AppResult<SubjectResponse> {
        let subject = request.into_subject()?;
        let created = self
            .subject_repo
            .create(subject)
            .await
            .at_boundary("Error creating subject")?;

        info!("📘 과목 생성: id={}", created.id);
        Ok(SubjectResponse::from(created))
    }

    pub async fn update_subject(
        &self,
        id: i64,
        request: UpdateSubjectRequest,
    ) -> AppResult<SubjectResponse> {
        let changes = request.into_changes()?;
        let updated = self
            .subject_repo
            .update(id, changes)
            .await
            .at_boundary("Error updating subject")?
            .ok_or_else(|| AppError::not_found(Subject::LABEL, id))?;

        info!("📘 과목 수정: id={}", id);
        Ok(SubjectResponse::from(updated))
    }

    pub async fn delete_subject(&self, id: i64) -> AppResult<MessageResponse> {
        if !self
            .subject_repo
            .delete(id)
            .await
            .at_boundary("Error deleting subject")?
        {
            return Err(AppError::not_found(Subject::LABEL, id));
        }

        info!("🗑️ 과목 삭제: id={}", id);
        Ok(MessageResponse::deleted(Subject::LABEL, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DocumentStore, MemoryStore};
    use crate::domain::entities::courses::Course;
    use crate::repositories::CourseRepository;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_subjects_by_course_after_subject_deleted() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let service = SubjectService::new(
            SubjectRepository::new(store.clone()),
            ReferenceResolver::new(store.clone()),
        );

        let subject = service
            .create_subject(CreateSubjectRequest {
                name: "Programming Fundamentals".to_string(),
                description: "Intro".to_string(),
            })
            .await
            .unwrap();
        CourseRepository::new(store)
            .create(Course::new("CS".to_string(), vec![subject.id]))
            .await
            .unwrap();

        let found = service.subjects_by_course(1).await.unwrap();
        assert_eq!(found[0].name, "Programming Fundamentals");

        service.delete_subject(subject.id).await.unwrap();
        assert!(matches!(
            service.subjects_by_course(1).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_subject(subject.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
