use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Body of `POST /api/articles` and `PUT /api/articles/:id`.
///
/// Updates are full replacements: every field here overwrites the stored
/// value, and the id always comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_in_category: Option<i32>,
}

impl ArticleRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle("Article"));
        }
        Ok(())
    }
}
