use kind_words::{config, init, router, store::PostgresStore, AppState, Result};

use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cfg = config::build()?;

    let pool = init::init_pg_pool(&cfg).await?;
    let store = Arc::new(PostgresStore::new(pool));

    init::seed(store.as_ref()).await?;

    let state = AppState { store };

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.server_port));
    tracing::info!("listening on http://{addr}");

    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await?;

    return Ok(());
}
