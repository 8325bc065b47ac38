//! Simulation configuration.
//!
//! Every tunable constant of the automaton lives in `SimConfig`, which
//! round-trips through JSON so hosts can ship presets next to the binary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

pub const GRID_WIDTH: usize = 320;
pub const GRID_HEIGHT: usize = 240;

/// Update passes per tick.
pub const PASSES_PER_TICK: usize = 5;
/// Cap on the water column height used for multi-cell descent.
pub const MAX_WATER_PRESSURE: usize = 7;
/// Chance that an eligible sideways water flow is refused.
pub const SURFACE_TENSION: f64 = 0.3;
/// Chance that a cell starts out as sand.
pub const INITIAL_SAND_DENSITY: f64 = 0.1;

pub const BRUSH_HALF_WIDTH: u32 = 3;
pub const BRUSH_DEPTH: u32 = 4;
pub const BRUSH_DENSITY: f64 = 0.7;

/// Splatter rectangle stamped by a pour.
///
/// Covers `dx in [-half_width, half_width]` and `dy in [0, depth]` from the
/// pointer, so the stamp hangs below the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brush {
    pub half_width: u32,
    pub depth: u32,
    /// Independent per-cell probability of being painted.
    pub density: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            half_width: BRUSH_HALF_WIDTH,
            depth: BRUSH_DEPTH,
            density: BRUSH_DENSITY,
        }
    }
}

impl Brush {
    /// Cells under the brush anchored at `(x, y)`, clipped to a
    /// `width` x `height` grid. Column by column, top to bottom.
    pub fn footprint(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> impl Iterator<Item = (i32, i32)> {
        let half = i32::try_from(self.half_width).unwrap_or(i32::MAX);
        let depth = i32::try_from(self.depth).unwrap_or(i32::MAX);

        let left = x.saturating_sub(half).max(0);
        let right = x.saturating_add(half).min(width - 1);
        let top = y.max(0);
        let bottom = y.saturating_add(depth).min(height - 1);

        (left..=right).flat_map(move |cx| (top..=bottom).map(move |cy| (cx, cy)))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    /// Probability that each cell starts as sand. Zero gives an empty grid.
    pub initial_sand_density: f64,
    pub passes: usize,
    pub max_water_pressure: usize,
    pub surface_tension: f64,
    pub brush: Brush,
    /// Fixed RNG seed for reproducible runs. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            initial_sand_density: INITIAL_SAND_DENSITY,
            passes: PASSES_PER_TICK,
            max_water_pressure: MAX_WATER_PRESSURE,
            surface_tension: SURFACE_TENSION,
            brush: Brush::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Default configuration with a custom grid size.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Same configuration, but the grid starts empty.
    pub fn unseeded(mut self) -> Self {
        self.initial_sand_density = 0.0;
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.passes == 0 {
            return Err(SimError::InvalidConfig("passes must be at least 1".into()));
        }
        if self.max_water_pressure == 0 {
            return Err(SimError::InvalidConfig(
                "max_water_pressure must be at least 1".into(),
            ));
        }
        if i32::try_from(self.max_water_pressure).is_err() {
            return Err(SimError::InvalidConfig(format!(
                "max_water_pressure must be at most {}, got {}",
                i32::MAX,
                self.max_water_pressure
            )));
        }
        for (name, value) in [
            ("brush.half_width", self.brush.half_width),
            ("brush.depth", self.brush.depth),
        ] {
            if i32::try_from(value).is_err() {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be at most {}, got {value}",
                    i32::MAX
                )));
            }
        }
        for (name, value) in [
            ("initial_sand_density", self.initial_sand_density),
            ("surface_tension", self.surface_tension),
            ("brush.density", self.brush.density),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be a probability in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn load_json(path: &Path) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn save_json(&self, path: &Path) -> Result<(), SimError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        config.validate().unwrap();
        assert_eq!((config.width, config.height), (320, 240));
        assert_eq!(config.passes, 5);
        assert_eq!(config.max_water_pressure, 7);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = SimConfig::with_size(0, 10);
        assert!(config.validate().is_err());

        config = SimConfig::default();
        config.surface_tension = 1.5;
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));

        config = SimConfig::default();
        config.passes = 0;
        assert!(config.validate().is_err());

        config = SimConfig::default();
        config.brush.density = -0.1;
        assert!(config.validate().is_err());

        config = SimConfig::default();
        config.brush.depth = u32::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_extents_are_rejected() {
        assert!(matches!(
            SimConfig::from_json_str(r#"{ "max_water_pressure": 4294967296 }"#),
            Err(SimError::InvalidConfig(_))
        ));
        assert!(matches!(
            SimConfig::from_json_str(r#"{ "brush": { "half_width": 4294967295 } }"#),
            Err(SimError::InvalidConfig(_))
        ));

        // Large but representable values are fine; pours clip to the grid.
        let config = SimConfig::from_json_str(
            r#"{ "width": 4, "height": 4, "brush": { "half_width": 2147483647, "depth": 0 } }"#,
        )
        .unwrap();
        assert_eq!(config.brush.half_width, i32::MAX as u32);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = SimConfig::from_json_str(r#"{ "width": 64, "brush": { "depth": 2 } }"#).unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, GRID_HEIGHT);
        assert_eq!(config.brush.depth, 2);
        assert_eq!(config.brush.half_width, BRUSH_HALF_WIDTH);
    }

    #[test]
    fn invalid_json_values_are_rejected() {
        assert!(matches!(
            SimConfig::from_json_str(r#"{ "surface_tension": 2.0 }"#),
            Err(SimError::InvalidConfig(_))
        ));
        assert!(matches!(
            SimConfig::from_json_str("{ not json"),
            Err(SimError::Json(_))
        ));
    }

    #[test]
    fn save_and_load_file() {
        let path = std::env::temp_dir().join(format!("sandsim-config-{}.json", std::process::id()));
        let mut config = SimConfig::with_size(40, 30);
        config.seed = Some(99);

        config.save_json(&path).unwrap();
        let loaded = SimConfig::load_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn brush_covers_rectangle_below_cursor() {
        let cells: Vec<_> = Brush::default().footprint(10, 10, 20, 20).collect();
        assert_eq!(cells.len(), 7 * 5);
        assert_eq!(cells.first(), Some(&(7, 10)));
        assert_eq!(cells.last(), Some(&(13, 14)));
        assert!(cells.iter().all(|&(x, y)| (7..=13).contains(&x) && (10..=14).contains(&y)));
    }

    #[test]
    fn footprint_is_clipped_to_grid() {
        let cells: Vec<_> = Brush::default().footprint(0, 3, 5, 5).collect();
        assert_eq!(cells.len(), 4 * 2);

        let huge = Brush {
            half_width: u32::MAX,
            depth: u32::MAX,
            density: 1.0,
        };
        assert_eq!(huge.footprint(2, 0, 4, 4).count(), 16);
        assert_eq!(huge.footprint(i32::MAX - 1, i32::MAX - 1, 4, 4).count(), 0);
    }
}
