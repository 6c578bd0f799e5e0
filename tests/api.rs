use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use kind_words::{init, router, store::MemoryStore, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn seeded_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    init::seed(store.as_ref()).await.unwrap();

    return router(AppState { store });
}

fn get(uri: &str) -> Request<Body> {
    return Request::builder().uri(uri).body(Body::empty()).unwrap();
}

fn post(uri: &str, body: Value) -> Request<Body> {
    return Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();

    return serde_json::from_slice(&bytes).unwrap();
}

#[tokio::test]
async fn fresh_deployment_starts_with_ten_points() {
    let app = seeded_app().await;

    let response = app.oneshot(get("/user/points")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "points": 10 }));
}

#[tokio::test]
async fn redeeming_below_the_threshold_reports_the_shortfall() {
    let app = seeded_app().await;

    let response = app.oneshot(post("/random-word", json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["points"], 10);
    assert_eq!(body["pointsNeeded"], 15);
}

#[tokio::test]
async fn playing_a_game_credits_the_reported_points() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(post(
            "/game/play",
            json!({ "gameType": "snake", "points": 3 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "points": 13, "pointsNeeded": 15 })
    );

    let response = app.oneshot(get("/user/points")).await.unwrap();
    assert_eq!(body_json(response).await, json!({ "points": 13 }));
}

#[tokio::test]
async fn unknown_game_type_is_rejected_before_crediting() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(post(
            "/game/play",
            json!({ "gameType": "roulette", "points": 2 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/user/points")).await.unwrap();
    assert_eq!(body_json(response).await, json!({ "points": 10 }));
}

#[tokio::test]
async fn impossible_award_is_rejected_before_crediting() {
    let app = seeded_app().await;

    // The guessing game only ever pays 0 or 2.
    let response = app
        .clone()
        .oneshot(post(
            "/game/play",
            json!({ "gameType": "number", "points": 3 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/user/points")).await.unwrap();
    assert_eq!(body_json(response).await, json!({ "points": 10 }));
}

#[tokio::test]
async fn earn_then_redeem_flow() {
    let app = seeded_app().await;

    // Short by 5, so earn 5 through the snake game first.
    let response = app
        .clone()
        .oneshot(post(
            "/game/play",
            json!({ "gameType": "snake", "points": 5 }),
        ))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["points"], 15);

    let response = app
        .clone()
        .oneshot(post("/random-word", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["points"], 0);
    assert_eq!(body["pointsNeeded"], 15);

    let message = body["message"].as_str().unwrap();
    assert!(init::SEED_KIND_WORDS.contains(&message));

    let response = app.oneshot(get("/user/points")).await.unwrap();
    assert_eq!(body_json(response).await, json!({ "points": 0 }));
}

#[tokio::test]
async fn posting_a_word_creates_it() {
    let app = seeded_app().await;

    let response = app
        .oneshot(post("/words", json!({ "message": "You can do hard things." })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "You can do hard things.");
    assert_eq!(body["likes"], 0);
    assert_eq!(body["isActive"], true);
}

#[tokio::test]
async fn posting_a_blank_word_is_rejected() {
    let app = seeded_app().await;

    let response = app
        .oneshot(post("/words", json!({ "message": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = seeded_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
