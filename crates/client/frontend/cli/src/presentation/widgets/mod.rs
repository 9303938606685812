//! Widgets composing the terminal board.
pub mod banner;
pub mod feed;
pub mod footer;
pub mod grid;
pub mod header;
pub mod modal;
pub mod queue;
pub mod result;
pub mod trash;
