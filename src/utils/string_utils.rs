//! # 문자열 유틸리티
//!
//! 폼/쿼리 입력값 정리에 사용하는 공통 함수들입니다.

use serde::Deserialize;

/// 공백을 제거하고, 남은 내용이 없으면 `None`을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 앞뒤 공백을 제거한 문자열로 역직렬화합니다.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// 빈 문자열/공백 문자열을 `None`으로 취급하여 역직렬화합니다.
///
/// 필드가 빠질 수 있는 경우 `#[serde(default)]`와 함께 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
