use crate::{
    games::GameKind,
    ledger,
    models::DEFAULT_ACCOUNT_ID,
    prelude::*,
    rewards::POINTS_NEEDED_FOR_WORD,
};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    return router
        .route("/user/points", get(get_points))
        .route("/game/play", post(play_game));
}

async fn get_points(State(state): State<AppState>) -> Result<Response> {
    let points = ledger::balance(state.store.as_ref(), DEFAULT_ACCOUNT_ID).await?;

    return Ok(Json(json!({ "points": points })).into_response());
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayGame {
    game_type: String,
    points: u64,
}

/// The wire contract lets the client report its own award, but the claim
/// still has to be one the named game can emit.
async fn play_game(State(state): State<AppState>, Json(body): Json<PlayGame>) -> Result<Response> {
    let Some(game) = GameKind::parse(&body.game_type) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Unknown game type" })),
        )
            .into_response());
    };

    if !game.is_possible_award(body.points) {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid points for this game" })),
        )
            .into_response());
    }

    let points = ledger::credit(state.store.as_ref(), DEFAULT_ACCOUNT_ID, body.points).await?;

    return Ok(Json(json!({
        "points": points,
        "pointsNeeded": POINTS_NEEDED_FOR_WORD,
    }))
    .into_response());
}
