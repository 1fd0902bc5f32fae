pub mod sales;

use anyhow::Context;
use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;

const MAX_CONNECTIONS: u32 = 5;

// The sales table is owned by another system. Sessions on this pool are read-only, and no
// migrations are ever run against it.
pub async fn connect_read_only(database_url: &str) -> anyhow::Result<sqlx::PgPool> {
    let options = read_only_connect_options(database_url)?;

    sqlx::postgres::PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .context("connect sales database failed")
}

pub fn read_only_connect_options(database_url: &str) -> anyhow::Result<PgConnectOptions> {
    let options = PgConnectOptions::from_str(database_url)
        .context("invalid sales database URL")?
        .options([("default_transaction_read_only", "on")]);
    Ok(options)
}
