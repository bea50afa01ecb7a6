//! Board configuration generated from display.toml

use segmux_core::config::{DisplayConfig, Drive};

include!(concat!(env!("OUT_DIR"), "/display_config.rs"));
