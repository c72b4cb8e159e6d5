use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    articles as article_handlers, categories as category_handlers,
    navigation as navigation_handlers, projects as project_handlers,
};
use crate::store::SharedStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

pub fn create_router(store: SharedStore) -> Router {
    let state = AppState { store };

    let category_routes = Router::new()
        .route(
            "/",
            get(category_handlers::list_categories).post(category_handlers::create_category),
        )
        .route("/top-level", get(category_handlers::list_top_level))
        .route(
            "/:id",
            get(category_handlers::get_category)
                .put(category_handlers::update_category)
                .delete(category_handlers::delete_category),
        )
        .route("/:id/children", get(category_handlers::list_children))
        .route("/:id/parent", get(category_handlers::get_parent))
        .route("/:id/with-children", get(category_handlers::get_with_children));

    let article_routes = Router::new()
        .route("/", get(article_handlers::list_articles))
        .route("/", post(article_handlers::create_article))
        .route(
            "/:id",
            get(article_handlers::get_article)
                .put(article_handlers::update_article)
                .delete(article_handlers::delete_article),
        )
        .route("/category/:category_id", get(article_handlers::list_by_category));

    let navigation_routes = Router::new()
        .route("/tree", get(navigation_handlers::get_tree))
        .route("/tree/:category_id", get(navigation_handlers::get_subtree))
        .route(
            "/article-summaries/:category_id",
            get(navigation_handlers::get_article_summaries),
        );

    let api_routes = Router::new()
        .nest("/categories", category_routes)
        .nest("/articles", article_routes)
        .nest("/navigation", navigation_routes)
        .route("/projects", get(project_handlers::list_projects));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
