use crate::{
    models::DEFAULT_ACCOUNT_ID,
    prelude::*,
    rewards::{self, RedeemError, POINTS_NEEDED_FOR_WORD},
    store::Store,
};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    return router
        .route("/random-word", post(random_word))
        .route("/words", post(post_word));
}

async fn random_word(State(state): State<AppState>) -> Result<Response> {
    let redemption = match rewards::try_redeem(state.store.as_ref(), DEFAULT_ACCOUNT_ID).await {
        Ok(redemption) => redemption,
        Err(RedeemError::NotEligible {
            points,
            points_needed,
        }) => {
            return Ok((
                StatusCode::FORBIDDEN,
                Json(json!({
                    "error": "Not enough points",
                    "points": points,
                    "pointsNeeded": points_needed,
                })),
            )
                .into_response());
        }
        Err(err) => return Err(err.into()),
    };

    return Ok(Json(json!({
        "message": redemption.word.message,
        "points": redemption.points,
        "pointsNeeded": POINTS_NEEDED_FOR_WORD,
    }))
    .into_response());
}

#[derive(Debug, Deserialize)]
struct PostWord {
    message: String,
}

async fn post_word(State(state): State<AppState>, Json(body): Json<PostWord>) -> Result<Response> {
    let message = body.message.trim();

    if message.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Message is required" })),
        )
            .into_response());
    }

    let word = state.store.insert_kind_word(message).await?;

    return Ok((StatusCode::CREATED, Json(word)).into_response());
}
