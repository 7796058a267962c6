//! Traffic context derivation and decision engine.
//!
//! Per-lane sensor rows are normalized, classified into a density category
//! by a fixed table of threshold rules, and paired with the signal light
//! state in force at the time. The resulting observations feed two rule
//! engines: accident response and cross-lane flow optimization.
//!
//! The pure pipeline lives in [`analysis_pass`]; [`TrafficContextPlugin`]
//! runs the same pipeline inside a Bevy app whenever a new [`SensorBatch`]
//! is loaded.

pub mod accident_response;
pub mod analysis_pass;
pub mod config;
pub mod context_error;
pub mod context_params;
pub mod context_plugin;
pub mod context_report;
pub mod context_sets;
pub mod density_classifier;
pub mod flow_optimizer;
pub mod light_state;
pub mod observation;
pub mod pass_summary;
pub mod record_normalizer;
pub mod sensor_row;

#[cfg(test)]
pub mod test_harness;

pub use accident_response::{AccidentAction, AccidentScenario};
pub use analysis_pass::{derive_observations, run_pass};
pub use context_error::{ClassificationError, ContextError, MalformedRecord, UnmappedLightCode};
pub use context_params::{ContextParams, MalformedRecordPolicy};
pub use context_plugin::{AccidentLog, ObservationLog, OptimizationLog, SensorBatch, TrafficContextPlugin};
pub use context_report::ContextReport;
pub use context_sets::ContextSet;
pub use density_classifier::{classify, Classification, Density, Level};
pub use flow_optimizer::{optimize, OptimizationAction};
pub use light_state::{LightColor, LightState};
pub use observation::{CrossingRecord, Observation};
pub use pass_summary::PassSummary;
pub use sensor_row::RawSensorRow;
