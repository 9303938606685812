//! Terminal UI frontend for the calendar puzzle.
//!
//! This crate draws the board with ratatui and drives a
//! [`client_frontend_core::GameSession`] from crossterm mouse and keyboard
//! events. It implements the `FrontendApp` trait so the client binary can
//! run it without knowing about terminals.
//!
//! # Architecture
//!
//! - `event`: tokio loop multiplexing the countdown tick and input polling
//! - `input`: key and mouse mapping, free of session state
//! - `presentation`: terminal setup, layout, and widgets

mod app;
mod config;
mod event;
mod input;
pub mod logging;
mod observer;
pub mod presentation;

pub use app::CliFrontend;
pub use config::CliConfig;
pub use observer::TracingObserver;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
