//! Binary for the Tonhub welcome bot. Config from env (and `.env`).

use anyhow::Result;
use tonhub_bot::{run_bot, startup};
use tonhub_core::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let log_file = std::env::var("LOG_FILE").ok().filter(|s| !s.is_empty());
    init_tracing(log_file.as_deref())?;

    let Some(config) = startup(|key| std::env::var(key).ok(), &mut std::io::stdout()) else {
        return Ok(());
    };

    run_bot(config).await
}
