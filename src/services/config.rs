//! Tunables for the navigation engine, the virtualized list and the input
//! pipeline.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Penalty applied to the offset across the travel axis when scoring
    /// directional candidates.
    pub alignment_weight: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            alignment_weight: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub item_height: f32,
    pub gap: f32,
    /// Rows shown before the viewport has been measured.
    pub fallback_rows: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: 1.0,
            gap: 0.0,
            fallback_rows: 10,
        }
    }
}

impl ListConfig {
    pub fn row_stride(&self) -> f32 {
        self.item_height + self.gap
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub queue_capacity: usize,
    pub directional_throttle_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 10,
            directional_throttle_ms: 150,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
