//! Segmux Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the display driver
//! needs from its environment. Chip-specific code (or an `embedded-hal`
//! implementation wrapped in [`gpio::EhOutput`]) provides them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware (segmux-firmware, etc.)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segmux-core / segmux-drivers           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segmux-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Single digital output (digit enable lines)
//! - [`port::OutputPort`] - Byte-wide output (shared segment lines)
//! - [`timer::PeriodicTimer`] - Refresh deadline source

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod port;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use gpio::{EhOutput, OutputPin};
pub use port::{OutputPort, PinPort};
pub use timer::PeriodicTimer;
