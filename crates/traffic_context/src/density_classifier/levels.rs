use serde::{Deserialize, Serialize};

/// Coarse bin for a single reading (speed or acceleration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Low => "LOW",
            Level::Medium => "MEDIUM",
            Level::High => "HIGH",
        }
    }
}

/// Congestion level of a lane, from free flow to heavy traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Density {
    Free,
    Low,
    Medium,
    High,
}

impl Density {
    pub const ALL: [Density; 4] = [Density::Free, Density::Low, Density::Medium, Density::High];

    pub fn label(self) -> &'static str {
        match self {
            Density::Free => "FREE",
            Density::Low => "LOW",
            Density::Medium => "MEDIUM",
            Density::High => "HIGH",
        }
    }

    /// Light enough that the lane could give up its green phase.
    pub fn is_light(self) -> bool {
        matches!(self, Density::Free | Density::Low)
    }
}

/// How many observations fell into each density category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityDistribution {
    pub free: u32,
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

impl DensityDistribution {
    pub fn record(&mut self, density: Density) {
        match density {
            Density::Free => self.free += 1,
            Density::Low => self.low += 1,
            Density::Medium => self.medium += 1,
            Density::High => self.high += 1,
        }
    }

    pub fn count(&self, density: Density) -> u32 {
        match density {
            Density::Free => self.free,
            Density::Low => self.low,
            Density::Medium => self.medium,
            Density::High => self.high,
        }
    }

    pub fn total(&self) -> u32 {
        self.free + self.low + self.medium + self.high
    }
}
