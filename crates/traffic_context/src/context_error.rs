// ---------------------------------------------------------------------------
// Typed errors and warnings produced while deriving traffic context
// ---------------------------------------------------------------------------

use std::fmt;

use serde::Serialize;

use crate::light_state::LightColor;

/// No density rule matched the reading. Carried on the record itself so the
/// failure stays visible per observation instead of being folded into a
/// default category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationError {
    pub avg_speed: f64,
    pub avg_accel: f64,
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No density rule matches speed {} and acceleration {}",
            self.avg_speed, self.avg_accel
        )
    }
}

impl std::error::Error for ClassificationError {}

/// Why a required field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MalformedReason {
    Missing,
    /// Present but NaN or infinite.
    NonNumeric,
}

/// A sensor row that cannot become an observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedRecord {
    /// Position of the row in the input batch.
    pub row: usize,
    /// Input column name of the offending field.
    pub field: &'static str,
    pub reason: MalformedReason,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            MalformedReason::Missing => {
                write!(f, "Row {}: required field '{}' is missing", self.row, self.field)
            }
            MalformedReason::NonNumeric => {
                write!(f, "Row {}: field '{}' is not a finite number", self.row, self.field)
            }
        }
    }
}

impl std::error::Error for MalformedRecord {}

/// Non-fatal: the light status code was not one of L1/L2/L3, so the previous
/// color was carried forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmappedLightCode {
    pub row: usize,
    pub code: String,
    pub carried: LightColor,
}

impl fmt::Display for UnmappedLightCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Row {}: unknown light status '{}', keeping {}",
            self.row,
            self.code,
            self.carried.label()
        )
    }
}

/// Errors that abort a whole analysis pass or its hand-off to a sink.
#[derive(Debug)]
pub enum ContextError {
    /// A malformed row under `MalformedRecordPolicy::Abort`.
    Malformed(MalformedRecord),
    /// `ContextParams` could not be decoded.
    InvalidParams(String),
    /// A report could not be encoded for a sink.
    Encode(String),
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::Malformed(record) => write!(f, "Malformed record: {record}"),
            ContextError::InvalidParams(msg) => write!(f, "Invalid context params: {msg}"),
            ContextError::Encode(msg) => write!(f, "Encoding error: {msg}"),
        }
    }
}

impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContextError::Malformed(record) => Some(record),
            _ => None,
        }
    }
}

impl From<MalformedRecord> for ContextError {
    fn from(record: MalformedRecord) -> Self {
        ContextError::Malformed(record)
    }
}
