use serde::Serialize;

use crate::density_classifier::Density;

/// Suggest moving the green phase from one lane to another at a crossing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationAction {
    pub crossing_id: String,
    pub from_lane: String,
    pub to_lane: String,
    /// Timestamp of the green lane's reading.
    pub timestamp: String,
    pub from_density: Density,
    pub to_density: Density,
}

impl OptimizationAction {
    pub fn description(&self) -> String {
        format!(
            "Switch GREEN from {} (density: {}) to {} (density: {})",
            self.from_lane,
            self.from_density.label(),
            self.to_lane,
            self.to_density.label()
        )
    }
}
