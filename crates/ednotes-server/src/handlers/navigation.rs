use axum::{
    extract::{Path, State},
    Json,
};
use ednotes_shared::{ArticleSummary, CategoryTreeNode};

use crate::error::AppError;
use crate::navigation;
use crate::routes::AppState;

/// GET /api/navigation/tree
pub async fn get_tree(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryTreeNode>>, AppError> {
    let tree = navigation::load_tree(state.store.as_ref(), None).await?;
    Ok(Json(tree))
}

/// GET /api/navigation/tree/:category_id
///
/// An empty array both when the category does not exist and when it is
/// not published.
pub async fn get_subtree(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<CategoryTreeNode>>, AppError> {
    let tree = navigation::load_tree(state.store.as_ref(), Some(category_id)).await?;
    Ok(Json(tree))
}

/// GET /api/navigation/article-summaries/:category_id
pub async fn get_article_summaries(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<ArticleSummary>>, AppError> {
    let summaries = navigation::load_article_summaries(state.store.as_ref(), category_id).await?;
    Ok(Json(summaries))
}
