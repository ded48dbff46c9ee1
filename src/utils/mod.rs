//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 폼 입력 문자열 정리 및 serde 역직렬화 헬퍼

pub mod string_utils;
