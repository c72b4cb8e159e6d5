use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use ednotes_shared::{
    api::{ArticleRequest, ValidationError},
    Article,
};

use crate::error::AppError;
use crate::routes::AppState;

/// Helper to verify an article's category reference resolves
async fn validate_category(state: &AppState, req: &ArticleRequest) -> Result<(), AppError> {
    if let Some(category_id) = req.category_id {
        if !state.store.category_exists(category_id).await? {
            return Err(ValidationError::MissingCategory(category_id).into());
        }
    }
    Ok(())
}

/// GET /api/articles
pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, AppError> {
    let articles = state.store.list_articles().await?;
    Ok(Json(articles))
}

/// GET /api/articles/:id
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Article>, AppError> {
    let article = state
        .store
        .find_article(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(article))
}

/// GET /api/articles/category/:category_id
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<Article>>, AppError> {
    let articles = state.store.list_articles_by_category(category_id).await?;
    Ok(Json(articles))
}

/// POST /api/articles
pub async fn create_article(
    State(state): State<AppState>,
    Json(req): Json<ArticleRequest>,
) -> Result<(StatusCode, Json<Article>), AppError> {
    req.validate()?;
    validate_category(&state, &req).await?;

    let article = state.store.insert_article(&req).await?;
    tracing::info!(article_id = article.id, "Created article");

    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /api/articles/:id
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<ArticleRequest>,
) -> Result<Json<Article>, AppError> {
    req.validate()?;
    validate_category(&state, &req).await?;

    let article = state
        .store
        .update_article(id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(article_id = id, "Updated article");

    Ok(Json(article))
}

/// DELETE /api/articles/:id
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_article(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(article_id = id, "Deleted article");

    Ok(StatusCode::NO_CONTENT)
}
