use std::error::Error;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file when present.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    tracing_subscriber::registry()
        .with(telemetry::env_filter())
        .with(telemetry::layer())
        .try_init()?;

    api::start().await?;

    Ok(())
}
