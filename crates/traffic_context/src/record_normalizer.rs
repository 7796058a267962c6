//! Maps a raw sensor row onto a typed record skeleton.
//!
//! No decisions happen here: classification and light resolution run on the
//! skeleton afterwards. A row missing a required field, or carrying a
//! non-finite number, is rejected with the offending column named.

use crate::context_error::{MalformedReason, MalformedRecord};
use crate::sensor_row::{
    RawSensorRow, COL_AVERAGE_ACCELERATION, COL_AVERAGE_SPEED, COL_CROSSING_ID, COL_INCIDENTS,
    COL_LANE_ID, COL_TIME, COL_TIMER,
};

/// Typed fields of one reading before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSkeleton {
    pub crossing_id: String,
    pub lane_id: String,
    pub timestamp: String,
    pub avg_speed: f64,
    pub avg_accel: f64,
    /// Raw status code. An absent code is kept as empty, which the light
    /// tracker treats like any other unrecognized code.
    pub light_code: String,
    pub timer: i64,
    pub accident: bool,
}

pub fn normalize(row: &RawSensorRow, index: usize) -> Result<RecordSkeleton, MalformedRecord> {
    let missing = |field: &'static str| MalformedRecord {
        row: index,
        field,
        reason: MalformedReason::Missing,
    };
    let finite = |value: Option<f64>, field: &'static str| match value {
        None => Err(missing(field)),
        Some(v) if !v.is_finite() => Err(MalformedRecord {
            row: index,
            field,
            reason: MalformedReason::NonNumeric,
        }),
        Some(v) => Ok(v),
    };

    let crossing_id = row.crossing_id.clone().ok_or_else(|| missing(COL_CROSSING_ID))?;
    let lane_id = row.lane_id.clone().ok_or_else(|| missing(COL_LANE_ID))?;
    let timestamp = row.time.clone().ok_or_else(|| missing(COL_TIME))?;
    let avg_speed = finite(row.average_speed, COL_AVERAGE_SPEED)?;
    let avg_accel = finite(row.average_acceleration, COL_AVERAGE_ACCELERATION)?;
    let timer = row.timer.ok_or_else(|| missing(COL_TIMER))?;
    let incidents = row.incident_count.ok_or_else(|| missing(COL_INCIDENTS))?;

    Ok(RecordSkeleton {
        crossing_id,
        lane_id,
        timestamp,
        avg_speed,
        avg_accel,
        light_code: row.light_status.clone().unwrap_or_default(),
        timer,
        accident: incidents != 0,
    })
}
