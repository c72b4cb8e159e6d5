use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ArticleSummary;

/// A node of the content hierarchy. `parent_id == None` marks a root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub title: String,
    pub parent_id: Option<i32>,
    /// Unpublished ("coming soon") categories are hidden from navigation
    /// together with their whole subtree.
    #[serde(default)]
    pub published: bool,
    pub order_in_parent: Option<i32>,
    #[serde(default)]
    pub is_topic: bool,
    pub topic_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTreeNode {
    pub id: i32,
    pub name: String,
    pub children: Vec<CategoryTreeNode>,
    pub articles: Vec<ArticleSummary>,
    /// Hidden categories are never emitted, so this is always `false`.
    pub coming_soon: bool,
}

impl CategoryTreeNode {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
            articles: Vec::new(),
            coming_soon: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithChildren {
    pub parent: Category,
    pub children: Vec<Category>,
}
