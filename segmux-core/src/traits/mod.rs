//! Hardware abstraction traits
//!
//! These traits define the interface between the display logic and the
//! output lines it drives.

pub mod display;

pub use display::{DigitSelect, SegmentBus};
