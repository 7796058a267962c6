//! ECS systems for the analysis pass.
//!
//! - `update_observation_log`: rows to observations.
//! - `update_accident_log` / `update_optimization_log`: rule engines over
//!   the observation log.
//! - `update_pass_summary`: counts and the pass log line.

use bevy::prelude::*;

use crate::accident_response::evaluate_all;
use crate::analysis_pass::derive_observations;
use crate::context_error::ContextError;
use crate::context_params::ContextParams;
use crate::flow_optimizer::optimize;
use crate::pass_summary::PassSummary;

use super::resources::{AccidentLog, ObservationLog, OptimizationLog, SensorBatch};

/// Run condition: a new batch arrived or the parameters changed.
pub fn pass_inputs_changed(batch: Res<SensorBatch>, params: Res<ContextParams>) -> bool {
    batch.is_changed() || params.is_changed()
}

pub fn update_observation_log(
    batch: Res<SensorBatch>,
    params: Res<ContextParams>,
    mut log: ResMut<ObservationLog>,
) {
    #[cfg(feature = "trace")]
    let _span = bevy::log::info_span!("update_observation_log").entered();

    *log = match derive_observations(&batch.rows, &params) {
        Ok(derived) => ObservationLog {
            batch: derived,
            aborted: None,
        },
        Err(ContextError::Malformed(record)) => {
            warn!("Traffic context pass aborted: {}", record);
            ObservationLog::aborted_on(record)
        }
        Err(e) => {
            warn!("Traffic context pass failed: {}", e);
            ObservationLog::default()
        }
    };
}

pub fn update_accident_log(
    log: Res<ObservationLog>,
    params: Res<ContextParams>,
    mut accidents: ResMut<AccidentLog>,
) {
    accidents.scenarios = evaluate_all(log.observations(), &params.response);
}

pub fn update_optimization_log(log: Res<ObservationLog>, mut optimization: ResMut<OptimizationLog>) {
    #[cfg(feature = "trace")]
    let _span = bevy::log::info_span!("update_optimization_log").entered();

    optimization.actions = optimize(log.observations());
}

pub fn update_pass_summary(
    batch: Res<SensorBatch>,
    log: Res<ObservationLog>,
    accidents: Res<AccidentLog>,
    optimization: Res<OptimizationLog>,
    mut summary: ResMut<PassSummary>,
) {
    *summary = PassSummary::from_pass(
        batch.rows.len(),
        &log.batch,
        &accidents.scenarios,
        &optimization.actions,
    );

    info!(
        "Traffic context pass: {} rows, {} observations, {} rejected, {} accident scenarios, {} optimization actions",
        summary.records_received,
        summary.observations,
        summary.rejected_records,
        summary.accident_scenarios,
        summary.optimization_actions
    );
}
