//! Cross-frontend primitives for presenting the puzzle.
//!
//! Houses pointer geometry, drag tracking, the session driver, the feed
//! log, and view-model types that both the terminal client and future
//! graphical clients can reuse.
pub mod config;
pub mod drag;
pub mod frontend;
pub mod geometry;
pub mod message;
pub mod session;
pub mod view_model;

pub use config::FrontendConfig;
pub use drag::{DragOrigin, DragTracker, DropIntent, HeldMeeting};
pub use frontend::FrontendApp;
pub use geometry::{BoardLayout, GridGeometry, Rect};
pub use message::{FeedLog, MessageEntry, MessageLevel};
pub use session::{GameSession, OutcomeObserver};
pub use view_model::CalendarView;
