//! Event loop orchestrating the countdown, user input, and rendering.
mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
