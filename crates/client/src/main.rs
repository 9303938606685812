//! Calendar puzzle client binary.
//!
//! Main entry point for the calendar scheduling puzzle.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Content (scenario catalog, game config) via ClientBuilder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Random scenario, random seed
//! cargo run -p calendar-client
//!
//! # Reproducible play of one scenario
//! CALENDAR_SEED=7 CALENDAR_SCENARIO=launch-week cargo run -p calendar-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use calendar_client::{ClientBuilder, FrontendApp};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();
    let session_id = std::env::var("CALENDAR_SESSION_ID").ok();

    // 2. Setup logging
    let _log_session = logging::setup_logging(session_id.as_deref())?;
    tracing::info!("Starting calendar client");

    // 3. Resolve content and seed
    let mut builder = ClientBuilder::new().frontend_config(frontend_config.clone());
    if let Some(dir) = std::env::var_os("CALENDAR_SCENARIO_DIR") {
        builder = builder.scenario_dir(dir);
    }
    let setup = builder.build()?;

    // 4. Build and run the frontend
    let frontend = CliFrontend::new(
        frontend_config,
        cli_config,
        setup.catalog,
        setup.game_config,
        setup.seed,
    );
    frontend.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
