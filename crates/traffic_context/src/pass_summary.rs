//! Aggregate counts for one analysis pass.

use std::collections::HashSet;

use bevy::prelude::*;
use serde::Serialize;

use crate::accident_response::AccidentScenario;
use crate::analysis_pass::DerivedBatch;
use crate::density_classifier::DensityDistribution;
use crate::flow_optimizer::OptimizationAction;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    pub records_received: usize,
    pub observations: usize,
    pub rejected_records: usize,
    /// Distinct crossing ids across all observations.
    pub unique_crossings: usize,
    /// Distinct lane ids across all observations (not per crossing).
    pub unique_lanes: usize,
    pub densities: DensityDistribution,
    pub classification_errors: usize,
    pub accidents_flagged: usize,
    pub unmapped_light_codes: usize,
    pub accident_scenarios: usize,
    pub optimization_actions: usize,
}

impl PassSummary {
    pub fn from_pass(
        records_received: usize,
        batch: &DerivedBatch,
        scenarios: &[AccidentScenario],
        actions: &[OptimizationAction],
    ) -> Self {
        let mut crossings = HashSet::new();
        let mut lanes = HashSet::new();
        let mut densities = DensityDistribution::default();
        let mut accidents_flagged = 0;

        for obs in &batch.observations {
            crossings.insert(obs.crossing.crossing_id.as_str());
            lanes.insert(obs.crossing.lane_id.as_str());
            if let Some(density) = obs.density() {
                densities.record(density);
            }
            if obs.crossing.accident {
                accidents_flagged += 1;
            }
        }

        Self {
            records_received,
            observations: batch.observations.len(),
            rejected_records: batch.rejections.len(),
            unique_crossings: crossings.len(),
            unique_lanes: lanes.len(),
            densities,
            classification_errors: batch.classification_failures.len(),
            accidents_flagged,
            unmapped_light_codes: batch.unmapped_light_codes.len(),
            accident_scenarios: scenarios.len(),
            optimization_actions: actions.len(),
        }
    }
}
