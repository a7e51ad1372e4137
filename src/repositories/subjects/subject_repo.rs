//! 과목 리포지토리

use crate::{
    core::errors::AppResult,
    db::Filter,
    domain::entities::subjects::Subject,
    repositories::base::CollectionRepository,
};

pub type SubjectRepository = CollectionRepository<Subject>;

impl CollectionRepository<Subject> {
    /// 주어진 id 집합에 속한 과목들을 저장 순서대로 반환합니다.
    ///
    /// 존재하지 않는 id는 조용히 무시됩니다.
    pub async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Subject>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.find_where(&Filter::any_of("id", ids.iter().copied())).await
    }
}
