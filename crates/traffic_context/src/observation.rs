//! Observation: one reading's resolved light state plus its classified
//! crossing record. Downstream rule engines only ever see these.

use serde::Serialize;

use crate::context_error::ClassificationError;
use crate::density_classifier::{classify, Classification, Density, Level};
use crate::light_state::{LightColor, LightState};
use crate::record_normalizer::RecordSkeleton;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossingRecord {
    pub crossing_id: String,
    pub lane_id: String,
    pub timestamp: String,
    pub avg_speed: f64,
    pub avg_accel: f64,
    pub classification: Result<Classification, ClassificationError>,
    pub accident: bool,
}

impl CrossingRecord {
    /// Classify the skeleton's motion readings.
    pub fn from_skeleton(skeleton: &RecordSkeleton) -> Self {
        Self {
            crossing_id: skeleton.crossing_id.clone(),
            lane_id: skeleton.lane_id.clone(),
            timestamp: skeleton.timestamp.clone(),
            avg_speed: skeleton.avg_speed,
            avg_accel: skeleton.avg_accel,
            classification: classify(skeleton.avg_speed, skeleton.avg_accel),
            accident: skeleton.accident,
        }
    }

    /// `None` when no rule matched.
    pub fn density(&self) -> Option<Density> {
        self.classification.as_ref().ok().map(|c| c.density)
    }

    pub fn speed_label(&self) -> Option<Level> {
        self.classification.as_ref().ok().map(|c| c.speed_label)
    }

    pub fn accel_label(&self) -> Option<Level> {
        self.classification.as_ref().ok().map(|c| c.accel_label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub light: LightState,
    pub crossing: CrossingRecord,
}

impl Observation {
    pub fn new(light: LightState, crossing: CrossingRecord) -> Self {
        Self { light, crossing }
    }

    #[inline]
    pub fn color(&self) -> LightColor {
        self.light.color
    }

    #[inline]
    pub fn density(&self) -> Option<Density> {
        self.crossing.density()
    }
}
