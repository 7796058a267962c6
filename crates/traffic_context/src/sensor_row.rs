//! Raw per-lane sensor rows as handed over by the loader.
//!
//! Field names follow the loader's column headers so a row can be
//! deserialized straight from a record. Every field is optional here; the
//! normalizer decides what is required.

use serde::{Deserialize, Serialize};

pub const COL_CROSSING_ID: &str = "Crossing_Id";
pub const COL_LANE_ID: &str = "Lane_Id";
pub const COL_TIME: &str = "Time";
pub const COL_AVERAGE_SPEED: &str = "Average_Speed";
pub const COL_AVERAGE_ACCELERATION: &str = "Average_Acceleration";
pub const COL_LIGHT_STATUS: &str = "Current_Light_Status";
pub const COL_TIMER: &str = "Current_Timer";
pub const COL_INCIDENTS: &str = "Automatic Incident Detection (AID)";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSensorRow {
    #[serde(rename = "Crossing_Id")]
    pub crossing_id: Option<String>,
    #[serde(rename = "Lane_Id")]
    pub lane_id: Option<String>,
    #[serde(rename = "Time")]
    pub time: Option<String>,
    #[serde(rename = "Average_Speed")]
    pub average_speed: Option<f64>,
    #[serde(rename = "Average_Acceleration")]
    pub average_acceleration: Option<f64>,
    #[serde(rename = "Current_Light_Status")]
    pub light_status: Option<String>,
    #[serde(rename = "Current_Timer")]
    pub timer: Option<i64>,
    /// Automatic incident detection counter; zero means no incident.
    #[serde(rename = "Automatic Incident Detection (AID)")]
    pub incident_count: Option<i64>,
}

impl RawSensorRow {
    /// Start a row for the given lane with no readings yet.
    pub fn new(crossing_id: &str, lane_id: &str, time: &str) -> Self {
        Self {
            crossing_id: Some(crossing_id.to_string()),
            lane_id: Some(lane_id.to_string()),
            time: Some(time.to_string()),
            ..Default::default()
        }
    }

    pub fn with_motion(mut self, average_speed: f64, average_acceleration: f64) -> Self {
        self.average_speed = Some(average_speed);
        self.average_acceleration = Some(average_acceleration);
        self
    }

    pub fn with_light(mut self, status: &str, timer: i64) -> Self {
        self.light_status = Some(status.to_string());
        self.timer = Some(timer);
        self
    }

    pub fn with_incidents(mut self, count: i64) -> Self {
        self.incident_count = Some(count);
        self
    }
}
