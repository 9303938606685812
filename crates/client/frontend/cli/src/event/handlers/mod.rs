//! Event loop handlers split by concern.
//!
//! - `input`: keyboard and mouse events
//! - `rendering`: view projection and drawing

mod input;
mod rendering;
