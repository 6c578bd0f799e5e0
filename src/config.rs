use std::env;

use anyhow::Context;

use crate::Result;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub db_connection_url: String,
}

pub fn build() -> Result<Config> {
    let server_port = match env::var("PORT") {
        Ok(port) => port.parse().context("PORT must be a number")?,
        Err(_) => DEFAULT_PORT,
    };

    let db_connection_url = env::var("DATABASE_URL").context("DATABASE_URL is required")?;

    return Ok(Config {
        server_port,
        db_connection_url,
    });
}
