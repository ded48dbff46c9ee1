//! Secret 제출 폼 DTO
use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_trimmed_string;

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitSecretForm {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 2000, message = "Secret은 1-2000자여야 합니다"))]
    pub secret: String,
}
