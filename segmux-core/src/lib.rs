//! Board-agnostic core logic for a 3-digit multiplexed seven-segment display
//!
//! This crate contains everything that does not depend on specific
//! hardware:
//!
//! - Segment patterns and the symbol lookup table
//! - Binary to BCD conversion
//! - Number formatting (integers, fixed point, error message)
//! - Framebuffer shared between the update and refresh flows
//! - Multiplex scheduler driving the digit and segment lines
//! - Output line traits and display configuration
//!
//! # Data flow
//!
//! ```text
//! value ──► Display (format) ──► SharedFramebuffer ──► Multiplexer ──► lines
//!                                                          ▲
//!                                                 periodic refresh tick
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod bcd;
pub mod config;
pub mod format;
pub mod framebuffer;
pub mod glyph;
pub mod scheduler;
pub mod segments;
pub mod shared;
pub mod traits;

pub use framebuffer::{Framebuffer, Position};
pub use glyph::Glyph;
pub use scheduler::{Multiplexer, RefreshDeadline};
pub use segments::Segments;
pub use shared::{Display, SharedFramebuffer};
