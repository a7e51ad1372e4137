//! 부분 수정(merge-patch) 필드 표현
//!
//! JSON 키가 없는 경우와 `null`인 경우를 구분합니다.
//!
//! | JSON | `Patch<T>` |
//! |------|------------|
//! | 키 없음 | `Absent` |
//! | `"field": null` | `Null` |
//! | `"field": value` | `Value(value)` |
//!
//! 필드에 `#[serde(default)]`를 붙여야 키가 없을 때 `Absent`가 됩니다.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    /// 값이 있을 때만 `Some`. null을 허용하지 않는 필드에서는 `Null`도 "변경 없음"입니다.
    pub fn into_value(self) -> Option<T> {
        match self {
            Patch::Value(value) => Some(value),
            Patch::Absent | Patch::Null => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}
