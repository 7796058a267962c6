//! Observation builders for unit tests of the rule engines.

use crate::light_state::{LightColor, LightState};
use crate::observation::{CrossingRecord, Observation};
use crate::record_normalizer::RecordSkeleton;

/// Builds an [`Observation`] through the real classifier. Defaults to a red
/// light with timer 0, LOW density and no accident.
pub struct ObservationFixture {
    skeleton: RecordSkeleton,
    color: LightColor,
}

impl ObservationFixture {
    pub fn new(crossing_id: &str, lane_id: &str) -> Self {
        Self {
            skeleton: RecordSkeleton {
                crossing_id: crossing_id.to_string(),
                lane_id: lane_id.to_string(),
                timestamp: "00:00:00".to_string(),
                avg_speed: 30.0,
                avg_accel: 20.0,
                light_code: String::new(),
                timer: 0,
                accident: false,
            },
            color: LightColor::Red,
        }
    }

    pub fn light(mut self, color: LightColor, timer: i64) -> Self {
        self.color = color;
        self.skeleton.timer = timer;
        self
    }

    pub fn motion(mut self, avg_speed: f64, avg_accel: f64) -> Self {
        self.skeleton.avg_speed = avg_speed;
        self.skeleton.avg_accel = avg_accel;
        self
    }

    pub fn at(mut self, timestamp: &str) -> Self {
        self.skeleton.timestamp = timestamp.to_string();
        self
    }

    pub fn accident(mut self) -> Self {
        self.skeleton.accident = true;
        self
    }

    /// Fast and calm: rule 7.
    pub fn free(self) -> Self {
        self.motion(60.0, 5.0)
    }

    /// Medium speed and acceleration: rule 5.
    pub fn low(self) -> Self {
        self.motion(30.0, 20.0)
    }

    /// Slow and calm: rule 1.
    pub fn medium(self) -> Self {
        self.motion(5.0, 5.0)
    }

    /// Slow with hard acceleration: rule 3.
    pub fn high(self) -> Self {
        self.motion(5.0, 40.0)
    }

    pub fn build(self) -> Observation {
        Observation::new(
            LightState {
                color: self.color,
                timer: self.skeleton.timer,
            },
            CrossingRecord::from_skeleton(&self.skeleton),
        )
    }
}
