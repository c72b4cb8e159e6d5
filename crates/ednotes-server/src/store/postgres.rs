use async_trait::async_trait;
use chrono::Utc;
use ednotes_shared::{
    api::{ArticleRequest, CategoryRequest},
    Article, Category, Project,
};

use super::{Store, StoreResult};
use crate::DbPool;

const ARTICLE_COLUMNS: &str = "id, title, content, category_id, published, order_in_category, \
                               created_at, updated_at";

const CATEGORY_COLUMNS: &str = "id, title, parent_id, published, order_in_parent, is_topic, \
                                topic_id, created_at, updated_at";

#[derive(Clone)]
pub struct PgStore {
    db: DbPool,
}

impl PgStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_articles(&self) -> StoreResult<Vec<Article>> {
        let query = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY order_in_category ASC NULLS LAST, id"
        );
        sqlx::query_as::<_, Article>(&query)
            .fetch_all(&self.db)
            .await
    }

    async fn find_article(&self, id: i32) -> StoreResult<Option<Article>> {
        let query = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    async fn list_articles_by_category(&self, category_id: i32) -> StoreResult<Vec<Article>> {
        let query = format!(
            r#"
            SELECT {ARTICLE_COLUMNS}
            FROM articles
            WHERE category_id = $1
            ORDER BY order_in_category ASC NULLS LAST, id
            "#
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(category_id)
            .fetch_all(&self.db)
            .await
    }

    async fn insert_article(&self, req: &ArticleRequest) -> StoreResult<Article> {
        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO articles (title, content, category_id, published, order_in_category,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {ARTICLE_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&req.title)
            .bind(&req.content)
            .bind(req.category_id)
            .bind(req.published)
            .bind(req.order_in_category)
            .bind(now)
            .fetch_one(&self.db)
            .await
    }

    async fn update_article(&self, id: i32, req: &ArticleRequest) -> StoreResult<Option<Article>> {
        let query = format!(
            r#"
            UPDATE articles
            SET title = $1,
                content = $2,
                category_id = $3,
                published = $4,
                order_in_category = $5,
                updated_at = $6
            WHERE id = $7
            RETURNING {ARTICLE_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&req.title)
            .bind(&req.content)
            .bind(req.category_id)
            .bind(req.published)
            .bind(req.order_in_category)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    async fn delete_article(&self, id: i32) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let query = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY order_in_parent ASC NULLS LAST, id"
        );
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.db)
            .await
    }

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    async fn category_exists(&self, id: i32) -> StoreResult<bool> {
        let exists: Option<(i32,)> = sqlx::query_as("SELECT id FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(exists.is_some())
    }

    async fn list_child_categories(&self, parent_id: Option<i32>) -> StoreResult<Vec<Category>> {
        // `IS NOT DISTINCT FROM` lets a NULL bind select the roots.
        let query = format!(
            r#"
            SELECT {CATEGORY_COLUMNS}
            FROM categories
            WHERE parent_id IS NOT DISTINCT FROM $1
            ORDER BY order_in_parent ASC NULLS LAST, id
            "#
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(parent_id)
            .fetch_all(&self.db)
            .await
    }

    async fn insert_category(&self, req: &CategoryRequest) -> StoreResult<Category> {
        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO categories (title, parent_id, published, order_in_parent, is_topic,
                                    topic_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING {CATEGORY_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&req.title)
            .bind(req.parent_id)
            .bind(req.published)
            .bind(req.order_in_parent)
            .bind(req.is_topic)
            .bind(req.topic_id)
            .bind(now)
            .fetch_one(&self.db)
            .await
    }

    async fn update_category(
        &self,
        id: i32,
        req: &CategoryRequest,
    ) -> StoreResult<Option<Category>> {
        let query = format!(
            r#"
            UPDATE categories
            SET title = $1,
                parent_id = $2,
                published = $3,
                order_in_parent = $4,
                is_topic = $5,
                topic_id = $6,
                updated_at = $7
            WHERE id = $8
            RETURNING {CATEGORY_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&req.title)
            .bind(req.parent_id)
            .bind(req.published)
            .bind(req.order_in_parent)
            .bind(req.is_topic)
            .bind(req.topic_id)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    async fn delete_category(&self, id: i32) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT id, name, sort_order FROM projects ORDER BY sort_order, id",
        )
        .fetch_all(&self.db)
        .await
    }
}
