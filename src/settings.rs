//! Simulation settings
//!
//! Persisted as JSON. Missing fields take their defaults, so a file only
//! needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Table;

/// Table and physics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Table ===
    pub table_length: f64,
    pub table_width: f64,
    /// Cushion gap on either side of each pocket
    pub hole_size: f64,

    // === Balls ===
    pub ball_radius: f64,
    /// Per-tick speed loss, also the stop threshold
    pub friction: f64,

    // === Stepping ===
    /// Fixed timestep (not wall-clock)
    pub dt: f64,
    /// Headless driver gives up after this many ticks
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            table_length: TABLE_LENGTH,
            table_width: TABLE_WIDTH,
            hole_size: HOLE_SIZE,

            ball_radius: BALL_RADIUS,
            friction: FRICTION,

            dt: SIM_DT,
            max_ticks: MAX_TICKS,
        }
    }
}

impl Settings {
    /// Build the table these settings describe
    pub fn table(&self) -> Table {
        Table::new(self.table_length, self.table_width, self.hole_size)
    }

    /// Check the values the kernel asserts on
    pub fn validate(&self) -> Result<(), String> {
        if !(self.table_length > 0.0 && self.table_width > 0.0) {
            return Err(format!(
                "table extents must be positive, got {} x {}",
                self.table_length, self.table_width
            ));
        }
        if !(self.hole_size >= 0.0
            && self.hole_size * 2.0 < self.table_width
            && self.hole_size * 4.0 < self.table_length)
        {
            return Err(format!("hole size {} does not fit the table", self.hole_size));
        }
        if !(self.ball_radius > 0.0) {
            return Err(format!("ball radius must be positive, got {}", self.ball_radius));
        }
        if !(self.friction >= 0.0) {
            return Err(format!("friction must be non-negative, got {}", self.friction));
        }
        if !(self.dt > 0.0) {
            return Err(format!("timestep must be positive, got {}", self.dt));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}, using default settings", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => match settings.validate() {
                Ok(()) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(reason) => {
                    log::warn!("Invalid settings in {}: {}, using defaults", path.display(), reason);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not parse {}: {}, using default settings", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
