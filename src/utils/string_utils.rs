//! # 문자열 유틸리티
//!
//! 입력 검증과 이름 정규화에 쓰이는 공통 함수들입니다.

use validator::ValidationError;

use crate::core::errors::{AppError, AppResult};

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  Hello  ", "name").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{} must not be empty",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// 정리된 문자열의 길이(문자 수)가 범위 안에 있는지 검증합니다.
pub fn validate_length(value: &str, field_name: &str, min: usize, max: usize) -> AppResult<String> {
    let trimmed = validate_required_string(value, field_name)?;
    let length = trimmed.chars().count();
    if length < min || length > max {
        return Err(AppError::ValidationError(format!(
            "{} must be between {} and {} characters",
            field_name, min, max
        )));
    }
    Ok(trimmed)
}

/// 사람 이름에 허용되는 문자만 포함하는지 확인합니다.
///
/// ASCII 영문자, 숫자, 공백, 하이픈(`-`), 마침표(`.`)만 허용합니다.
pub fn is_valid_person_name(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-' || c == '.')
}

/// `validator`의 `custom` 규칙으로 쓰이는 이름 문자 집합 검증
pub fn validate_person_name(value: &str) -> Result<(), ValidationError> {
    if !is_valid_person_name(value) {
        return Err(ValidationError::new("invalid_name").with_message(
            "Name can only contain letters, numbers, spaces, hyphens, and periods".into(),
        ));
    }
    Ok(())
}

/// 타이틀 케이스로 변환합니다.
///
/// 문자가 아닌 문자 뒤에 오는 첫 글자는 대문자로, 나머지 글자는 소문자로 바꿉니다.
///
/// ```rust,ignore
/// assert_eq!(to_title_case("mary-jane o'neil"), "Mary-Jane O'Neil");
/// ```
pub fn to_title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}
