use std::collections::HashSet;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use ednotes_shared::{
    api::{CategoryRequest, TopLevelParams, ValidationError},
    Category, CategoryWithChildren,
};

use crate::error::AppError;
use crate::routes::AppState;

/// Checks that `req.parent_id` names an existing category and, when
/// `category_id` is being updated, that the new parent is neither the
/// category itself nor one of its descendants.
async fn validate_parent(
    state: &AppState,
    category_id: Option<i32>,
    req: &CategoryRequest,
) -> Result<(), AppError> {
    let Some(parent_id) = req.parent_id else {
        return Ok(());
    };

    if category_id == Some(parent_id) {
        return Err(ValidationError::SelfParent.into());
    }

    let parent = state
        .store
        .find_category(parent_id)
        .await?
        .ok_or(ValidationError::MissingParent(parent_id))?;

    let Some(category_id) = category_id else {
        return Ok(());
    };

    // Walk the ancestors of the new parent; meeting the category being
    // moved means the move would close a loop.
    let mut seen = HashSet::from([parent.id]);
    let mut cursor = parent.parent_id;
    while let Some(ancestor_id) = cursor {
        if ancestor_id == category_id {
            return Err(ValidationError::DescendantParent(parent_id).into());
        }
        if !seen.insert(ancestor_id) {
            break;
        }
        cursor = state
            .store
            .find_category(ancestor_id)
            .await?
            .and_then(|c| c.parent_id);
    }

    Ok(())
}

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.store.list_categories().await?;
    Ok(Json(categories))
}

/// GET /api/categories/top-level?includeComingSoon=
pub async fn list_top_level(
    State(state): State<AppState>,
    Query(params): Query<TopLevelParams>,
) -> Result<Json<Vec<Category>>, AppError> {
    let mut roots = state.store.list_child_categories(None).await?;

    if !params.include_coming_soon() {
        roots.retain(|c| c.published);
    }

    Ok(Json(roots))
}

/// GET /api/categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>, AppError> {
    let category = state
        .store
        .find_category(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(category))
}

/// GET /api/categories/:id/children
pub async fn list_children(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Category>>, AppError> {
    let children = state.store.list_child_categories(Some(id)).await?;
    Ok(Json(children))
}

/// GET /api/categories/:id/parent
///
/// `null` for a root category or one whose parent has been deleted.
pub async fn get_parent(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<Category>>, AppError> {
    let category = state
        .store
        .find_category(id)
        .await?
        .ok_or(AppError::NotFound)?;

    let parent = match category.parent_id {
        Some(parent_id) => state.store.find_category(parent_id).await?,
        None => None,
    };

    Ok(Json(parent))
}

/// GET /api/categories/:id/with-children
pub async fn get_with_children(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryWithChildren>, AppError> {
    let parent = state
        .store
        .find_category(id)
        .await?
        .ok_or(AppError::NotFound)?;

    let children = state.store.list_child_categories(Some(id)).await?;

    Ok(Json(CategoryWithChildren { parent, children }))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    req.validate()?;
    validate_parent(&state, None, &req).await?;

    let category = state.store.insert_category(&req).await?;
    tracing::info!(category_id = category.id, "Created category");

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/:id
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<Category>, AppError> {
    req.validate()?;

    if !state.store.category_exists(id).await? {
        return Err(AppError::NotFound);
    }

    validate_parent(&state, Some(id), &req).await?;

    let category = state
        .store
        .update_category(id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(category_id = id, "Updated category");

    Ok(Json(category))
}

/// DELETE /api/categories/:id
///
/// Children and articles are left in place and drop out of navigation.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_category(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(category_id = id, "Deleted category");

    Ok(StatusCode::NO_CONTENT)
}
