//! Embassy async tasks
//!
//! The refresh task owns the output lines; the app task only ever touches
//! the shared framebuffer through [`segmux_core::Display`].

pub mod app;
pub mod refresh;

pub use app::app_task;
pub use refresh::refresh_task;
