//! Main loop: a countdown tick interval and a frame-rate input poll.
//!
//! The tick branch feeds the session the real time elapsed since the last
//! tick, so a slow frame never loses countdown time.

use anyhow::Result;
use client_frontend_core::GameSession;
use tokio::time::{self, Duration, Instant};

use crate::{
    config::CliConfig,
    input::InputHandler,
    presentation::{terminal::Tui, ui::ScreenLayout},
};

const FRAME_INTERVAL_MS: u64 = 16;

/// Owns the session for the lifetime of the terminal UI.
pub struct EventLoop {
    pub(crate) session: GameSession,
    pub(crate) input: InputHandler,
    pub(crate) cli_config: CliConfig,
    pub(crate) tick_ms: u64,
    /// Layout of the last drawn frame; pointer input is hit-tested
    /// against it.
    pub(crate) layout: Option<ScreenLayout>,
}

impl EventLoop {
    pub fn new(session: GameSession, cli_config: CliConfig, tick_ms: u64) -> Self {
        Self {
            session,
            input: InputHandler::new(),
            cli_config,
            tick_ms: tick_ms.max(1),
            layout: None,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<GameSession> {
        self.render(terminal)?;

        let mut ticker = time::interval(Duration::from_millis(self.tick_ms));
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);
        let mut last_tick = Instant::now();

        loop {
            tokio::select! {
                now = ticker.tick() => {
                    let elapsed = now.saturating_duration_since(last_tick);
                    last_tick = now;
                    let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
                    if elapsed_ms > 0 {
                        self.session.tick(elapsed_ms);
                        self.render(terminal)?;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(self.session)
    }
}
