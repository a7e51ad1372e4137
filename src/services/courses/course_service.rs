//! 과정 관리 서비스

use log::info;

use crate::{
    core::errors::{AppError, AppResult, BoundaryExt},
    domain::{
        dto::{
            courses::{CourseResponse, CreateCourseRequest, UpdateCourseRequest},
            MessageResponse,
        },
        entities::{courses::Course, Entity, NativeRef},
    },
    repositories::CourseRepository,
    services::relations::ReferenceResolver,
};

#[derive(Clone)]
pub struct CourseService {
    course_repo: CourseRepository,
    resolver: ReferenceResolver,
}

impl CourseService {
    pub fn new(course_repo: CourseRepository, resolver: ReferenceResolver) -> Self {
        Self { course_repo, resolver }
    }

    pub async fn list_courses(&self) -> AppResult<Vec<CourseResponse>> {
        let courses = self
            .course_repo
            .list_all()
            .await
            .at_boundary("Error fetching courses")?;
        Ok(courses.into_iter().map(CourseResponse::from).collect())
    }

    pub async fn get_course(&self, id: i64) -> AppResult<CourseResponse> {
        self.course_repo
            .get_by_id(id)
            .await
            .at_boundary("Error fetching course")?
            .map(CourseResponse::from)
            .ok_or_else(|| AppError::not_found(Course::LABEL, id))
    }

    pub async fn get_course_by_ref(&self, raw_ref: &str) -> AppResult<CourseResponse> {
        let not_found = || AppError::NotFound(format!("Course with reference {} not found", raw_ref));

        let Ok(native_ref) = NativeRef::parse(raw_ref) else {
            return Err(not_found());
        };

        self.course_repo
            .get_by_native_ref(native_ref)
            .await
            .at_boundary("Error fetching course")?
            .map(CourseResponse::from)
            .ok_or_else(not_found)
    }

    /// 과목을 포함한 과정들. 하나도 없으면 `NotFound`입니다.
    pub async fn courses_by_subject(&self, subject_id: i64) -> AppResult<Vec<CourseResponse>> {
        let courses = self
            .resolver
            .courses_by_subject(subject_id)
            .await
            .at_boundary("Error fetching courses by subject")?;

        if courses.is_empty() {
            return Err(AppError::NotFound(format!(
                "No courses found for subject {}",
                subject_id
            )));
        }
        Ok(courses.into_iter().map(CourseResponse::from).collect())
    }

    pub async fn create_course(&self, request: CreateCourseRequest) -> AppResult<CourseResponse> {
        let course = request.into_course()?;
        let created = self
            .course_repo
            .create(course)
            .await
            .at_boundary("Error creating course")?;

        info!("📚 과정 생성: id={} subjects={:?}", created.id, created.subjects);
        Ok(CourseResponse::from(created))
    }

    pub async fn update_course(
        &self,
        id: i64,
        request: UpdateCourseRequest,
    ) -> AppResult<CourseResponse> {
        let changes = request.into_changes()?;
        let updated = self
            .course_repo
            .update(id, changes)
            .await
            .at_boundary("Error updating course")?
            .ok_or_else(|| AppError::not_found(Course::LABEL, id))?;

        info!("📚 과정 수정: id={}", id);
        Ok(CourseResponse::from(updated))
    }

    pub async fn delete_course(&self, id: i64) -> AppResult<MessageResponse> {
        if !self
            .course_repo
            .delete(id)
            .await
            .at_boundary("Error deleting course")?
        {
            return Err(AppError::not_found(Course::LABEL, id));
        }

        info!("🗑️ 과정 삭제: id={}", id);
        Ok(MessageResponse::deleted(Course::LABEL, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DocumentStore, MemoryStore};
    use crate::domain::dto::Patch;
    use std::sync::Arc;

    fn service() -> CourseService {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        CourseService::new(CourseRepository::new(store.clone()), ReferenceResolver::new(store))
    }

    fn request(name: &str, subjects: Vec<i64>) -> CreateCourseRequest {
        CreateCourseRequest {
            name: name.to_string(),
            subjects,
        }
    }

    #[actix_web::test]
    async fn test_courses_by_subject_not_found_when_empty() {
        let service = service();
        service.create_course(request("CS", vec![1, 2])).await.unwrap();
        service.create_course(request("Math", vec![2])).await.unwrap();

        assert_eq!(service.courses_by_subject(2).await.unwrap().len(), 2);
        assert!(matches!(
            service.courses_by_subject(5).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_replaces_only_present_fields() {
        let service = service();
        let created = service.create_course(request("CS", vec![1])).await.unwrap();

        let patch = UpdateCourseRequest {
            subjects: Patch::Value(vec![1, 2, 3]),
            ..Default::default()
        };
        let updated = service.update_course(created.id, patch).await.unwrap();
        assert_eq!(updated.name, "CS");
        assert_eq!(updated.subjects, vec![1, 2, 3]);
        assert_eq!(updated.mongo_id, created.mongo_id);
    }

    #[actix_web::test]
    async fn test_next_id_follows_last_created() {
        let service = service();
        for expected in 1..=3 {
            let created = service.create_course(request("Course", vec![])).await.unwrap();
            assert_eq!(created.id, expected);
        }
        service.delete_course(2).await.unwrap();
        assert_eq!(service.create_course(request("Course", vec![])).await.unwrap().id, 4);
        assert!(matches!(service.get_course(2).await, Err(AppError::NotFound(_))));
    }
}
