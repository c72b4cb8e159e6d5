use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Body of `POST /api/categories` and `PUT /api/categories/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_in_parent: Option<i32>,
    #[serde(default)]
    pub is_topic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<i32>,
}

impl CategoryRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle("Category"));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLevelParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_coming_soon: Option<bool>,
}

impl TopLevelParams {
    pub fn include_coming_soon(&self) -> bool {
        self.include_coming_soon.unwrap_or(true)
    }
}
