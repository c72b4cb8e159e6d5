use async_trait::async_trait;
use chrono::Utc;
use ednotes_shared::{
    api::{ArticleRequest, CategoryRequest},
    Article, Category, Project,
};
use tokio::sync::RwLock;

use super::{Store, StoreResult};

/// Process-local store used when no database is configured, and by tests.
///
/// Ids come from per-table counters starting at 1 and are never reused.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    articles: Vec<Article>,
    categories: Vec<Category>,
    projects: Vec<Project>,
    last_article_id: i32,
    last_category_id: i32,
    last_project_id: i32,
}

/// Ascending with missing values last, then by id; same as
/// `ORDER BY x ASC NULLS LAST, id` in Postgres.
fn order_key(order: Option<i32>, id: i32) -> (bool, i32, i32) {
    (order.is_none(), order.unwrap_or_default(), id)
}

fn sorted_categories<'a>(categories: impl Iterator<Item = &'a Category>) -> Vec<Category> {
    let mut out: Vec<Category> = categories.cloned().collect();
    out.sort_by_key(|c| order_key(c.order_in_parent, c.id));
    out
}

fn sorted_articles<'a>(articles: impl Iterator<Item = &'a Article>) -> Vec<Article> {
    let mut out: Vec<Article> = articles.cloned().collect();
    out.sort_by_key(|a| order_key(a.order_in_category, a.id));
    out
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects have no write endpoint; this is how they get seeded.
    pub async fn add_project(&self, name: impl Into<String>, order: i32) -> Project {
        let mut tables = self.tables.write().await;
        tables.last_project_id += 1;
        let project = Project {
            id: tables.last_project_id,
            name: name.into(),
            order,
        };
        tables.projects.push(project.clone());
        project
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_articles(&self) -> StoreResult<Vec<Article>> {
        let tables = self.tables.read().await;
        Ok(sorted_articles(tables.articles.iter()))
    }

    async fn find_article(&self, id: i32) -> StoreResult<Option<Article>> {
        let tables = self.tables.read().await;
        Ok(tables.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn list_articles_by_category(&self, category_id: i32) -> StoreResult<Vec<Article>> {
        let tables = self.tables.read().await;
        Ok(sorted_articles(
            tables
                .articles
                .iter()
                .filter(|a| a.category_id == Some(category_id)),
        ))
    }

    async fn insert_article(&self, req: &ArticleRequest) -> StoreResult<Article> {
        let mut tables = self.tables.write().await;
        tables.last_article_id += 1;
        let now = Utc::now();
        let article = Article {
            id: tables.last_article_id,
            title: req.title.clone(),
            content: req.content.clone(),
            category_id: req.category_id,
            published: req.published,
            order_in_category: req.order_in_category,
            created_at: now,
            updated_at: now,
        };
        tables.articles.push(article.clone());
        Ok(article)
    }

    async fn update_article(&self, id: i32, req: &ArticleRequest) -> StoreResult<Option<Article>> {
        let mut tables = self.tables.write().await;
        let Some(article) = tables.articles.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        article.title = req.title.clone();
        article.content = req.content.clone();
        article.category_id = req.category_id;
        article.published = req.published;
        article.order_in_category = req.order_in_category;
        article.updated_at = Utc::now();
        Ok(Some(article.clone()))
    }

    async fn delete_article(&self, id: i32) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.articles.len();
        tables.articles.retain(|a| a.id != id);
        Ok(tables.articles.len() != before)
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(sorted_categories(tables.categories.iter()))
    }

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn category_exists(&self, id: i32) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().any(|c| c.id == id))
    }

    async fn list_child_categories(&self, parent_id: Option<i32>) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(sorted_categories(
            tables
                .categories
                .iter()
                .filter(|c| c.parent_id == parent_id),
        ))
    }

    async fn insert_category(&self, req: &CategoryRequest) -> StoreResult<Category> {
        let mut tables = self.tables.write().await;
        tables.last_category_id += 1;
        let now = Utc::now();
        let category = Category {
            id: tables.last_category_id,
            title: req.title.clone(),
            parent_id: req.parent_id,
            published: req.published,
            order_in_parent: req.order_in_parent,
            is_topic: req.is_topic,
            topic_id: req.topic_id,
            created_at: now,
            updated_at: now,
        };
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: i32,
        req: &CategoryRequest,
    ) -> StoreResult<Option<Category>> {
        let mut tables = self.tables.write().await;
        let Some(category) = tables.categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        category.title = req.title.clone();
        category.parent_id = req.parent_id;
        category.published = req.published;
        category.order_in_parent = req.order_in_parent;
        category.is_topic = req.is_topic;
        category.topic_id = req.topic_id;
        category.updated_at = Utc::now();
        Ok(Some(category.clone()))
    }

    async fn delete_category(&self, id: i32) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        Ok(tables.categories.len() != before)
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let tables = self.tables.read().await;
        let mut projects = tables.projects.clone();
        projects.sort_by_key(|p| (p.order, p.id));
        Ok(projects)
    }
}
