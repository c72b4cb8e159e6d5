//! Storage collaborator: keyed lookup, ordered listing, insert, update and
//! delete for articles, categories and projects.
//!
//! Handlers only ever see a [`SharedStore`], so the Postgres-backed
//! [`PgStore`] and the process-local [`MemoryStore`] are interchangeable.
//!
//! Listing order is part of the contract. Categories come back sorted by
//! `order_in_parent`, articles by `order_in_category`, projects by `order`;
//! missing order values sort last and ties fall back to the id. The
//! navigation builder relies on this and never re-sorts.

use std::sync::Arc;

use async_trait::async_trait;
use ednotes_shared::{
    api::{ArticleRequest, CategoryRequest},
    Article, Category, Project,
};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type StoreResult<T> = Result<T, sqlx::Error>;

pub type SharedStore = Arc<dyn Store>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn list_articles(&self) -> StoreResult<Vec<Article>>;
    async fn find_article(&self, id: i32) -> StoreResult<Option<Article>>;
    async fn list_articles_by_category(&self, category_id: i32) -> StoreResult<Vec<Article>>;
    async fn insert_article(&self, req: &ArticleRequest) -> StoreResult<Article>;
    /// Full replacement. `None` when no article has this id.
    async fn update_article(&self, id: i32, req: &ArticleRequest) -> StoreResult<Option<Article>>;
    /// `true` when a row was removed.
    async fn delete_article(&self, id: i32) -> StoreResult<bool>;

    async fn list_categories(&self) -> StoreResult<Vec<Category>>;
    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>>;
    async fn category_exists(&self, id: i32) -> StoreResult<bool>;
    /// Children of `parent_id`, or the root categories for `None`.
    async fn list_child_categories(&self, parent_id: Option<i32>) -> StoreResult<Vec<Category>>;
    async fn insert_category(&self, req: &CategoryRequest) -> StoreResult<Category>;
    async fn update_category(&self, id: i32, req: &CategoryRequest)
        -> StoreResult<Option<Category>>;
    async fn delete_category(&self, id: i32) -> StoreResult<bool>;

    async fn list_projects(&self) -> StoreResult<Vec<Project>>;
}
