use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Project {
    pub id: i32,
    pub name: String,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "sort_order"))]
    pub order: i32,
}
