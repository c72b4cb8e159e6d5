use axum::{extract::State, Json};
use ednotes_shared::Project;

use crate::error::AppError;
use crate::routes::AppState;

/// GET /api/projects
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.store.list_projects().await?;
    Ok(Json(projects))
}
