//! Tunable parameters for an analysis pass.
//!
//! The density thresholds are a fixed table (see `config`), so only the
//! signal timing used by the accident rules, the light color assumed before
//! the first recognized code, and how malformed rows are handled live here.
//! Parameters can be supplied as JSON; missing keys keep their defaults.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::accident_response::ResponseTiming;
use crate::context_error::ContextError;
use crate::light_state::LightColor;

/// What to do with a row that fails normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MalformedRecordPolicy {
    /// Record the rejection and keep going.
    #[default]
    Skip,
    /// Fail the whole pass on the first malformed row.
    Abort,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextParams {
    pub response: ResponseTiming,
    /// Color carried forward if the very first reading has an unknown code.
    pub initial_light: LightColor,
    pub malformed_policy: MalformedRecordPolicy,
}

impl Default for ContextParams {
    fn default() -> Self {
        Self {
            response: ResponseTiming::default(),
            initial_light: LightColor::Red,
            malformed_policy: MalformedRecordPolicy::Skip,
        }
    }
}

impl ContextParams {
    pub fn from_json(json: &str) -> Result<Self, ContextError> {
        serde_json::from_str(json).map_err(|e| ContextError::InvalidParams(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ContextError> {
        serde_json::to_string_pretty(self).map_err(|e| ContextError::Encode(e.to_string()))
    }
}
