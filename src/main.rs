use anyhow::Context;

use userstore::{config::DbConfig, users::UserStore};

fn init_tracing() {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "userstore=info,sqlx=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    // stdout is reserved for the user listing
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().context("load .env")?;
    init_tracing();

    let config = DbConfig::from_env().context("read database config")?;
    tracing::debug!(?config, "config loaded");

    let store = UserStore::from_config(&config);
    let users = store.read_all().await.context("read users")?;
    tracing::info!(count = users.len(), "users fetched");

    for user in &users {
        println!("{}", user);
    }

    Ok(())
}
