//! Glue code tying the session and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use calendar_content::ScenarioCatalog;
use calendar_core::GameConfig;
use client_frontend_core::{FrontendApp, FrontendConfig, GameSession};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::observer::TracingObserver;
use crate::presentation::terminal;

/// Terminal frontend. Built by the client binary from loaded content.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    catalog: ScenarioCatalog,
    game_config: GameConfig,
    seed: u64,
}

impl CliFrontend {
    pub fn new(
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
        catalog: ScenarioCatalog,
        game_config: GameConfig,
        seed: u64,
    ) -> Self {
        Self {
            frontend_config,
            cli_config,
            catalog,
            game_config,
            seed,
        }
    }

    pub async fn execute(self) -> Result<()> {
        tracing::info!(seed = self.seed, "CLI client starting");

        let CliFrontend {
            frontend_config,
            cli_config,
            catalog,
            game_config,
            seed,
        } = self;

        let session = GameSession::new(
            catalog,
            game_config,
            &frontend_config,
            Box::new(TracingObserver),
            seed,
        );
        let event_loop = EventLoop::new(session, cli_config, frontend_config.tick_ms);

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let session = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            scenario = session.scenario_name(),
            finished = session.is_finished(),
            "CLI client exiting"
        );

        Ok(())
    }
}

#[async_trait]
impl FrontendApp for CliFrontend {
    async fn run(self) -> Result<()> {
        self.execute().await
    }
}
