//! 네이티브 레코드 참조 (MongoDB `_id`)
//!
//! 저장소 엔진이 부여한 불투명 식별자를 감쌉니다. 할당된 정수 `id`와는
//! 별개의 타입이며, 문자열과의 변환은 명시적이고 실패할 수 있습니다.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};

/// 저장소 네이티브 레코드 참조
///
/// BSON으로는 `ObjectId` 그대로 직렬화되고, 응답에서는 [`NativeRef::to_hex`]로
/// 24자리 16진수 문자열로만 노출됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeRef(ObjectId);

impl NativeRef {
    /// 새 참조를 생성합니다. (인메모리 저장소의 삽입 시 사용)
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// 문자열을 네이티브 참조로 파싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MalformedReference` - 24자리 16진수가 아닌 경우
    pub fn parse(value: &str) -> AppResult<Self> {
        ObjectId::parse_str(value.trim())
            .map(Self)
            .map_err(|_| AppError::MalformedReference(format!("'{}' is not a valid record reference", value)))
    }

    /// 표시용 16진수 문자열
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for NativeRef {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<NativeRef> for Bson {
    fn from(value: NativeRef) -> Self {
        Bson::ObjectId(value.0)
    }
}

impl FromStr for NativeRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NativeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip_hex() {
        let parsed = NativeRef::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(parsed.to_hex(), "507f1f77bcf86cd799439011");
        assert_eq!(parsed.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            NativeRef::parse("not-an-object-id"),
            Err(AppError::MalformedReference(_))
        ));
        assert!(NativeRef::parse("").is_err());
    }

    #[test]
    fn test_bson_representation_is_object_id() {
        let reference = NativeRef::generate();
        assert_eq!(Bson::from(reference), Bson::ObjectId(reference.object_id()));
    }
}
