//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend session configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_CELL_WIDTH` - Width of one day column in cells (default: 10)
    /// - `CLI_FEED_HEIGHT` - Feed panel height in lines (default: 8)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u16>("CLI_CELL_WIDTH") {
            config.ui.cell_width = width.clamp(UiConfig::MIN_CELL_WIDTH, UiConfig::MAX_CELL_WIDTH);
        }
        if let Some(height) = read_env::<u16>("CLI_FEED_HEIGHT") {
            config.ui.feed_height = height.max(3);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Width of one day column.
    pub cell_width: u16,
    /// Height of the feed panel in lines (including borders).
    pub feed_height: u16,
}

impl UiConfig {
    pub const MIN_CELL_WIDTH: u16 = 6;
    pub const MAX_CELL_WIDTH: u16 = 24;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cell_width: 10,
            feed_height: 8,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
