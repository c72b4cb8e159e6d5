//! Integration tests for the category CRUD endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, create_category, get, get_json, send};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: create, read, replace, delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn category_crud_round_trip() {
    let (app, _) = build_test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "title": "Physics", "published": true, "orderInParent": 3 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["title"], "Physics");
    assert_eq!(created["parentId"], json!(null));
    assert_eq!(created["isTopic"], false);

    let fetched = get_json(&app, &format!("/api/categories/{id}")).await;
    assert_eq!(fetched["orderInParent"], 3);

    // PUT replaces every field; omitted optionals are cleared.
    let response = send(
        &app,
        Method::PUT,
        &format!("/api/categories/{id}"),
        Some(json!({ "title": "Mechanics", "isTopic": true })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["title"], "Mechanics");
    assert_eq!(updated["published"], false);
    assert_eq!(updated["orderInParent"], json!(null));
    assert_eq!(updated["isTopic"], true);

    let response = send(&app, Method::DELETE, &format!("/api/categories/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_category_returns_404_with_error_body() {
    let (app, _) = build_test_app();

    let response = get(&app, "/api/categories/7").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Resource not found");

    let response = send(
        &app,
        Method::PUT,
        "/api/categories/7",
        Some(json!({ "title": "Nope" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, Method::DELETE, "/api/categories/7", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: hierarchy queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn children_parent_and_with_children() {
    let (app, _) = build_test_app();

    let root = create_category(&app, json!({ "title": "Root", "published": true })).await;
    let second = create_category(
        &app,
        json!({ "title": "Second", "parentId": root, "orderInParent": 2 }),
    )
    .await;
    let first = create_category(
        &app,
        json!({ "title": "First", "parentId": root, "orderInParent": 1 }),
    )
    .await;

    let children = get_json(&app, &format!("/api/categories/{root}/children")).await;
    assert_eq!(children[0]["id"], first);
    assert_eq!(children[1]["id"], second);

    let parent = get_json(&app, &format!("/api/categories/{first}/parent")).await;
    assert_eq!(parent["id"], root);

    let no_parent = get_json(&app, &format!("/api/categories/{root}/parent")).await;
    assert_eq!(no_parent, json!(null));

    let response = get(&app, "/api/categories/999/parent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let combined = get_json(&app, &format!("/api/categories/{root}/with-children")).await;
    assert_eq!(combined["parent"]["id"], root);
    assert_eq!(combined["children"].as_array().unwrap().len(), 2);

    let response = get(&app, "/api/categories/999/with-children").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn top_level_can_exclude_coming_soon() {
    let (app, _) = build_test_app();

    let live = create_category(&app, json!({ "title": "Live", "published": true })).await;
    let soon = create_category(&app, json!({ "title": "Soon", "published": false })).await;
    create_category(&app, json!({ "title": "Nested", "parentId": live })).await;

    let all = get_json(&app, "/api/categories/top-level").await;
    let ids: Vec<i64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [live, soon]);

    let published = get_json(&app, "/api/categories/top-level?includeComingSoon=false").await;
    assert_eq!(published.as_array().unwrap().len(), 1);
    assert_eq!(published[0]["id"], live);
}

// ---------------------------------------------------------------------------
// Test: validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_title_is_rejected() {
    let (app, _) = build_test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "title": "  " })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Category title is required");
}

#[tokio::test]
async fn unknown_parent_is_rejected() {
    let (app, _) = build_test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "title": "Orphan", "parentId": 55 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn updates_cannot_introduce_cycles() {
    let (app, _) = build_test_app();

    let a = create_category(&app, json!({ "title": "A" })).await;
    let b = create_category(&app, json!({ "title": "B", "parentId": a })).await;
    let c = create_category(&app, json!({ "title": "C", "parentId": b })).await;

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/categories/{a}"),
        Some(json!({ "title": "A", "parentId": a })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/categories/{a}"),
        Some(json!({ "title": "A", "parentId": c })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Moving a leaf under a sibling branch is fine.
    let d = create_category(&app, json!({ "title": "D", "parentId": a })).await;
    let response = send(
        &app,
        Method::PUT,
        &format!("/api/categories/{c}"),
        Some(json!({ "title": "C", "parentId": d })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_id_is_rejected_by_the_router() {
    let (app, _) = build_test_app();

    let response = get(&app, "/api/categories/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
