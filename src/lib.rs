pub mod config;
pub mod controllers;
pub mod games;
pub mod init;
pub mod ledger;
pub mod models;
mod prelude;
pub mod result;
pub mod rewards;
pub mod store;

pub use crate::result::Result;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

pub fn router(state: AppState) -> Router {
    let router = Router::new();

    let router = controllers::add_routes(router);

    // The frontend is served from another origin.
    return router.layer(CorsLayer::permissive()).with_state(state);
}
