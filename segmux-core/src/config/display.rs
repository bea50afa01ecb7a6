//! Display wiring and refresh configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shortest accepted refresh interval per digit
pub const MIN_REFRESH_INTERVAL_MS: u16 = 1;

/// Longest accepted refresh interval per digit
///
/// A full frame takes three intervals; beyond 20 ms per digit the
/// display visibly flickers.
pub const MAX_REFRESH_INTERVAL_MS: u16 = 20;

/// Default refresh interval per digit
pub const DEFAULT_REFRESH_INTERVAL_MS: u16 = 10;

/// Electrical polarity of a group of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Drive {
    /// Line is on when driven high
    #[default]
    ActiveHigh,
    /// Line is on when driven low
    ActiveLow,
}

impl Drive {
    /// Output level for a logical on/off state
    pub const fn level(self, on: bool) -> bool {
        match self {
            Drive::ActiveHigh => on,
            Drive::ActiveLow => !on,
        }
    }

    /// Output level that keeps the line off
    ///
    /// Pins should be created at this level so nothing is driven before
    /// the drivers take over.
    pub const fn idle_level(self) -> bool {
        self.level(false)
    }

    /// Output byte for a logical pattern
    pub const fn byte(self, bits: u8) -> u8 {
        match self {
            Drive::ActiveHigh => bits,
            Drive::ActiveLow => !bits,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Refresh interval outside the accepted range
    RefreshIntervalOutOfRange(u16),
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Time each digit stays lit before the next one (ms)
    pub refresh_interval_ms: u16,
    /// Polarity of the shared segment lines
    pub segment_drive: Drive,
    /// Polarity of the digit-enable lines
    pub digit_drive: Drive,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::common_cathode()
    }
}

impl DisplayConfig {
    /// Common-cathode display: segments source current, digit commons sink
    /// it through an active-low line
    pub const fn common_cathode() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            segment_drive: Drive::ActiveHigh,
            digit_drive: Drive::ActiveLow,
        }
    }

    /// Common-anode display: segments sink current, digit commons are
    /// driven high
    pub const fn common_anode() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            segment_drive: Drive::ActiveLow,
            digit_drive: Drive::ActiveHigh,
        }
    }

    /// Same wiring with a different refresh interval
    pub const fn with_refresh_interval(mut self, interval_ms: u16) -> Self {
        self.refresh_interval_ms = interval_ms;
        self
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_REFRESH_INTERVAL_MS..=MAX_REFRESH_INTERVAL_MS).contains(&self.refresh_interval_ms)
        {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Refresh interval {} ms outside {}..={}",
                self.refresh_interval_ms,
                MIN_REFRESH_INTERVAL_MS,
                MAX_REFRESH_INTERVAL_MS
            );
            return Err(ConfigError::RefreshIntervalOutOfRange(
                self.refresh_interval_ms,
            ));
        }
        Ok(())
    }

    /// Time for one full pass over all three digits (ms)
    pub const fn frame_period_ms(&self) -> u32 {
        self.refresh_interval_ms as u32 * 3
    }
}
