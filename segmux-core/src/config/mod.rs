//! Configuration types
//!
//! Board-agnostic display configuration. With the `serde` feature the types
//! can be read from a TOML file by the firmware build script.

pub mod display;

pub use display::*;
