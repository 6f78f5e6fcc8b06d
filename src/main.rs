use anyhow::Result;
use tracing_subscriber::EnvFilter;
use uplift::commands::Cli;
use uplift::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> Result<()> {
    // In debug mode the message macros route through tracing, so a
    // subscriber has to be listening.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    Cli::menu().await
}
