//! Plugin registration for the traffic context pass.

use bevy::prelude::*;

use crate::context_params::ContextParams;
use crate::context_sets::ContextSet;
use crate::pass_summary::PassSummary;

use super::resources::{AccidentLog, ObservationLog, OptimizationLog, SensorBatch};
use super::systems::{
    pass_inputs_changed, update_accident_log, update_observation_log, update_optimization_log,
    update_pass_summary,
};

pub struct TrafficContextPlugin;

impl Plugin for TrafficContextPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SensorBatch>()
            .init_resource::<ContextParams>()
            .init_resource::<ObservationLog>()
            .init_resource::<AccidentLog>()
            .init_resource::<OptimizationLog>()
            .init_resource::<PassSummary>()
            .configure_sets(
                FixedUpdate,
                (ContextSet::Derive, ContextSet::Evaluate, ContextSet::Report).chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    update_observation_log.in_set(ContextSet::Derive),
                    (update_accident_log, update_optimization_log).in_set(ContextSet::Evaluate),
                    update_pass_summary.in_set(ContextSet::Report),
                )
                    .run_if(pass_inputs_changed),
            );
    }
}
