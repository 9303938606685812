//! Composition root for the calendar client.
//!
//! # Architecture
//!
//! ```text
//! Client
//!   ├─→ Content (scenario catalog, game config)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! [`ClientBuilder`] resolves everything a frontend needs from the
//! environment-derived [`FrontendConfig`]; the binary then hands the
//! resulting [`ClientSetup`] to whichever frontend feature is enabled.

mod builder;

pub use builder::{ClientBuilder, ClientSetup};

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::{FrontendApp, FrontendConfig};
