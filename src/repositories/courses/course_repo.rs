//! 과정 리포지토리

use crate::{
    core::errors::AppResult,
    db::Filter,
    domain::entities::courses::Course,
    repositories::base::CollectionRepository,
};

pub type CourseRepository = CollectionRepository<Course>;

impl CollectionRepository<Course> {
    /// `subjects` 목록에 해당 과목 id를 포함한 과정들
    pub async fn find_by_subject(&self, subject_id: i64) -> AppResult<Vec<Course>> {
        self.find_where(&Filter::eq("subjects", subject_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_find_by_subject_uses_membership() {
        let repo = CourseRepository::new(Arc::new(MemoryStore::new()));
        repo.create(Course::new("Engineering".to_string(), vec![1, 2])).await.unwrap();
        repo.create(Course::new("Medicine".to_string(), vec![3])).await.unwrap();
        repo.create(Course::new("Physics".to_string(), vec![2, 3])).await.unwrap();

        let names: Vec<String> = repo
            .find_by_subject(2)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Engineering", "Physics"]);
        assert!(repo.find_by_subject(7).await.unwrap().is_empty());
    }
}
