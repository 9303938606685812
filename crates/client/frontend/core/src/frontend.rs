//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

/// Frontend abstraction for UI layers.
///
/// A frontend owns its [`GameSession`](crate::GameSession) and drives it
/// from user input and a periodic timer until the player quits.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait FrontendApp: Send {
    /// Run the frontend event loop until the user quits.
    async fn run(self) -> Result<()>
    where
        Self: Sized;
}
