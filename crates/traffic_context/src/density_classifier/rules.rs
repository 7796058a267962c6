use serde::{Deserialize, Serialize};

use crate::config::{
    ACCEL_LOW_MAX, ACCEL_MEDIUM_MAX, MIN_READING, SPEED_LOW_MAX, SPEED_MEDIUM_MAX,
};
use crate::context_error::ClassificationError;

use super::levels::{Density, Level};

/// 1-based position of a rule in [`DENSITY_RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleId(pub u8);

/// Result of a successful classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub rule: RuleId,
    pub speed_label: Level,
    pub accel_label: Level,
    pub density: Density,
}

/// Closed interval or open-above range a reading must fall in.
#[derive(Debug, Clone, Copy)]
enum Band {
    /// `MIN_READING..=max`
    UpTo(f64),
    /// `lo..=hi`
    Between(f64, f64),
    /// `(lo, ∞)`, finite values only.
    Above(f64),
}

impl Band {
    fn contains(self, value: f64) -> bool {
        match self {
            Band::UpTo(max) => value >= MIN_READING && value <= max,
            Band::Between(lo, hi) => value >= lo && value <= hi,
            Band::Above(lo) => value.is_finite() && value > lo,
        }
    }
}

const SPEED_LOW: Band = Band::UpTo(SPEED_LOW_MAX);
const SPEED_MEDIUM: Band = Band::Between(SPEED_LOW_MAX, SPEED_MEDIUM_MAX);
const SPEED_HIGH: Band = Band::Above(SPEED_MEDIUM_MAX);
const ACCEL_LOW: Band = Band::UpTo(ACCEL_LOW_MAX);
const ACCEL_MEDIUM: Band = Band::Between(ACCEL_LOW_MAX, ACCEL_MEDIUM_MAX);
const ACCEL_HIGH: Band = Band::Above(ACCEL_MEDIUM_MAX);

/// One row of the density table.
#[derive(Debug, Clone, Copy)]
pub struct DensityRule {
    pub id: RuleId,
    speed: Band,
    accel: Band,
    pub speed_label: Level,
    pub accel_label: Level,
    pub density: Density,
}

impl DensityRule {
    const fn new(
        id: u8,
        speed: Band,
        speed_label: Level,
        accel: Band,
        accel_label: Level,
        density: Density,
    ) -> Self {
        Self {
            id: RuleId(id),
            speed,
            accel,
            speed_label,
            accel_label,
            density,
        }
    }

    pub fn matches(&self, avg_speed: f64, avg_accel: f64) -> bool {
        self.speed.contains(avg_speed) && self.accel.contains(avg_accel)
    }

    fn classification(&self) -> Classification {
        Classification {
            rule: self.id,
            speed_label: self.speed_label,
            accel_label: self.accel_label,
            density: self.density,
        }
    }
}

/// The nine rules, in evaluation order. Order matters: band edges overlap.
pub const DENSITY_RULES: [DensityRule; 9] = [
    DensityRule::new(1, SPEED_LOW, Level::Low, ACCEL_LOW, Level::Low, Density::Medium),
    DensityRule::new(2, SPEED_LOW, Level::Low, ACCEL_MEDIUM, Level::Medium, Density::Medium),
    DensityRule::new(3, SPEED_LOW, Level::Low, ACCEL_HIGH, Level::High, Density::High),
    DensityRule::new(4, SPEED_MEDIUM, Level::Medium, ACCEL_LOW, Level::Low, Density::Low),
    DensityRule::new(5, SPEED_MEDIUM, Level::Medium, ACCEL_MEDIUM, Level::Medium, Density::Low),
    DensityRule::new(6, SPEED_MEDIUM, Level::Medium, ACCEL_HIGH, Level::High, Density::Medium),
    DensityRule::new(7, SPEED_HIGH, Level::High, ACCEL_LOW, Level::Low, Density::Free),
    DensityRule::new(8, SPEED_HIGH, Level::High, ACCEL_MEDIUM, Level::Medium, Density::Free),
    DensityRule::new(9, SPEED_HIGH, Level::High, ACCEL_HIGH, Level::High, Density::Low),
];

/// Classify one reading. The first rule in declared order that matches wins;
/// readings outside every rule (negative, NaN) are an error, never a default.
pub fn classify(avg_speed: f64, avg_accel: f64) -> Result<Classification, ClassificationError> {
    DENSITY_RULES
        .iter()
        .find(|rule| rule.matches(avg_speed, avg_accel))
        .map(DensityRule::classification)
        .ok_or(ClassificationError {
            avg_speed,
            avg_accel,
        })
}
