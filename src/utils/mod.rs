//! 공통 유틸리티 함수 모듈
//! 
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 처리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 문자열, 길이, 이름 문자 규칙, 타이틀 케이스
//! - [`display_terminal`] - 시작 배너와 레지스트리 요약 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{to_title_case, validate_required_string};
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! // 문자열 검증
//! let clean_name = validate_required_string("  John  ", "Name")?;
//! let display = to_title_case("ada lovelace");
//!
//! // 터미널 출력
//! print_boxed_title("University Backend");
//! ```

pub mod string_utils;
pub mod display_terminal;
