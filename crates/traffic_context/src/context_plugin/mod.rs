//! ECS wiring for the analysis pass.
//!
//! A loader fills [`SensorBatch`]; on the next `FixedUpdate` after the batch
//! or [`ContextParams`](crate::context_params::ContextParams) changes, the
//! pass reruns from scratch and replaces every output resource.

pub mod plugin;
pub mod resources;
pub mod systems;

pub use plugin::TrafficContextPlugin;
pub use resources::{AccidentLog, ObservationLog, OptimizationLog, SensorBatch};
pub use systems::{
    pass_inputs_changed, update_accident_log, update_observation_log, update_optimization_log,
    update_pass_summary,
};
