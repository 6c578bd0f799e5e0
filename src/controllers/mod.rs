mod game;
mod words;

use crate::prelude::*;

use axum::{http::StatusCode, routing::get, Router};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    let router = game::add_routes(router);
    let router = words::add_routes(router);

    return router.route("/health", get(|| async { StatusCode::NO_CONTENT }));
}
