//! 저장소 게이트웨이 인터페이스
//!
//! 리포지토리가 의존하는 유일한 저장소 추상화입니다. 컬렉션 이름과 필터만으로
//! 조회/삽입/수정/삭제를 수행하며, 트랜잭션이나 잠금은 제공하지 않습니다.

use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};

use crate::core::errors::AppResult;
use crate::domain::entities::NativeRef;

/// 컬렉션 조회 조건
///
/// MongoDB 필터 문서로 변환되며([`Filter::to_document`]), 인메모리 저장소에서는
/// 동일한 의미로 직접 평가됩니다([`Filter::matches`]).
///
/// 배열 필드에 대한 `Eq`는 MongoDB와 같이 "원소 중 하나와 일치"를 의미합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    Eq { field: String, value: Bson },
    In { field: String, values: Vec<Bson> },
    EqIgnoreCase { field: String, value: String },
}

impl Filter {
    pub fn all() -> Self {
        Filter::All
    }

    pub fn eq(field: &str, value: impl Into<Bson>) -> Self {
        Filter::Eq {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn any_of<I, V>(field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Bson>,
    {
        Filter::In {
            field: field.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn eq_ignore_case(field: &str, value: &str) -> Self {
        Filter::EqIgnoreCase {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// MongoDB 쿼리 필터 문서로 변환합니다.
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        match self {
            Filter::All => {}
            Filter::Eq { field, value } => {
                filter.insert(field.clone(), value.clone());
            }
            Filter::In { field, values } => {
                filter.insert(field.clone(), doc! { "$in": values.clone() });
            }
            Filter::EqIgnoreCase { field, value } => {
                filter.insert(
                    field.clone(),
                    doc! {
                        "$regex": format!("^{}$", escape_regex(value)),
                        "$options": "i",
                    },
                );
            }
        }
        filter
    }

    /// 문서가 조건을 만족하는지 평가합니다.
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq { field, value } => field_matches(document.get(field), value),
            Filter::In { field, values } => values
                .iter()
                .any(|value| field_matches(document.get(field), value)),
            Filter::EqIgnoreCase { field, value } => match document.get(field) {
                Some(Bson::String(stored)) => stored.to_lowercase() == value.to_lowercase(),
                _ => false,
            },
        }
    }
}

/// 단일 문서 조회 시 정렬 기준
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub field: String,
    pub descending: bool,
}

impl Sort {
    pub fn descending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: true,
        }
    }

    pub fn to_document(&self) -> Document {
        let mut sort = Document::new();
        sort.insert(self.field.clone(), if self.descending { -1 } else { 1 });
        sort
    }
}

/// `update_one` 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// 문서 저장소 게이트웨이
///
/// 프로세스 시작 시 한 번 생성되어 `Arc<dyn DocumentStore>`로 모든 리포지토리에
/// 주입되고, 종료 시 [`DocumentStore::close`]로 해제됩니다.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 로그용 백엔드 이름
    fn backend_name(&self) -> &'static str;

    /// 연결 상태를 확인합니다.
    async fn ping(&self) -> AppResult<()>;

    /// 조건에 맞는 모든 문서를 저장 순서대로 반환합니다.
    async fn find(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>>;

    /// 조건에 맞는 첫 문서를 반환합니다. `sort`가 주어지면 정렬 후 첫 문서입니다.
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
        sort: Option<&Sort>,
    ) -> AppResult<Option<Document>>;

    /// 문서를 삽입하고 부여된 네이티브 참조를 반환합니다.
    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<NativeRef>;

    /// 첫 번째 일치 문서에 `changes`의 필드를 덮어씁니다. (`$set`)
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        changes: Document,
    ) -> AppResult<UpdateOutcome>;

    /// 첫 번째 일치 문서를 삭제하고 삭제된 개수를 반환합니다.
    async fn delete_one(&self, collection: &str, filter: &Filter) -> AppResult<u64>;

    /// 필드에 유니크 인덱스를 보장합니다.
    async fn ensure_unique_index(
        &self,
        collection: &str,
        field: &str,
        case_insensitive: bool,
    ) -> AppResult<()>;

    /// 연결을 해제합니다.
    async fn close(&self);
}

fn field_matches(stored: Option<&Bson>, expected: &Bson) -> bool {
    match stored {
        Some(Bson::Array(items)) => {
            items.iter().any(|item| bson_equals(item, expected))
                || matches!(expected, Bson::Array(values) if values == items)
        }
        Some(value) => bson_equals(value, expected),
        None => matches!(expected, Bson::Null),
    }
}

// 숫자 타입(Int32/Int64/Double)은 값으로 비교합니다.
fn bson_equals(left: &Bson, right: &Bson) -> bool {
    match (as_number(left), as_number(right)) {
        (Some(l), Some(r)) => l == r,
        _ => left == right,
    }
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}

fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if "\\.+*?()|[]{}^$#&-~".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
