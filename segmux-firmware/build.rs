//! Build script for segmux-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml and turns it into compile-time constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use segmux_core::config::{
    ConfigError, DisplayConfig, MAX_REFRESH_INTERVAL_MS, MIN_REFRESH_INTERVAL_MS,
};

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Load and validate display.toml
fn load_config() -> DisplayConfig {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        println!("cargo:warning=display.toml not found, using common-cathode defaults");
        return DisplayConfig::default();
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: DisplayConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid display.toml                                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(ConfigError::RefreshIntervalOutOfRange(ms)) = config.validate() {
        let detail = format!(
            "refresh_interval_ms = {} (must be {}..={})",
            ms, MIN_REFRESH_INTERVAL_MS, MAX_REFRESH_INTERVAL_MS
        );
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml validation failed                           ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&detail)
        );
    }

    println!("cargo:warning=display.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write display_config.rs with the validated configuration
fn generate_config(config: &DisplayConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("display_config.rs")).unwrap();

    writeln!(f, "/// Display configuration from display.toml").unwrap();
    writeln!(f, "pub const DISPLAY: DisplayConfig = DisplayConfig {{").unwrap();
    writeln!(
        f,
        "    refresh_interval_ms: {},",
        config.refresh_interval_ms
    )
    .unwrap();
    writeln!(f, "    segment_drive: Drive::{:?},", config.segment_drive).unwrap();
    writeln!(f, "    digit_drive: Drive::{:?},", config.digit_drive).unwrap();
    writeln!(f, "}};").unwrap();
}
