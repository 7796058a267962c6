//! One batch analysis pass: rows → observations → scenarios and actions.
//!
//! The only order-dependent step is the light tracker, so derivation is a
//! fold over the rows with the last resolved color carried in the
//! accumulator. Scenarios and actions are then computed over the finished
//! observation set and never outlive the pass.

use bevy::log::warn;
use serde::Serialize;

use crate::accident_response::evaluate_all;
use crate::context_error::{ClassificationError, ContextError, MalformedRecord, UnmappedLightCode};
use crate::context_params::{ContextParams, MalformedRecordPolicy};
use crate::context_report::ContextReport;
use crate::flow_optimizer::optimize;
use crate::light_state::{self, LightCode, LightColor};
use crate::observation::{CrossingRecord, Observation};
use crate::pass_summary::PassSummary;
use crate::record_normalizer::normalize;
use crate::sensor_row::RawSensorRow;

/// A reading that normalized fine but matched no density rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationFailure {
    pub row: usize,
    pub crossing_id: String,
    pub lane_id: String,
    pub error: ClassificationError,
}

/// Everything derived from the rows before the rule engines run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedBatch {
    pub observations: Vec<Observation>,
    pub rejections: Vec<MalformedRecord>,
    pub unmapped_light_codes: Vec<UnmappedLightCode>,
    pub classification_failures: Vec<ClassificationFailure>,
    /// Color the tracker ended on, i.e. what the next reading would inherit.
    pub last_color: LightColor,
}

impl DerivedBatch {
    fn seeded(initial_light: LightColor) -> Self {
        Self {
            last_color: initial_light,
            ..Default::default()
        }
    }

    fn push_row(
        mut self,
        index: usize,
        row: &RawSensorRow,
        policy: MalformedRecordPolicy,
    ) -> Result<Self, ContextError> {
        let skeleton = match normalize(row, index) {
            Ok(skeleton) => skeleton,
            Err(record) => {
                if policy == MalformedRecordPolicy::Abort {
                    return Err(record.into());
                }
                warn!("Skipping sensor row: {}", record);
                // A rejected row does not move the light accumulator.
                self.rejections.push(record);
                return Ok(self);
            }
        };

        let light = light_state::resolve(&skeleton.light_code, skeleton.timer, self.last_color);
        if LightCode::parse(&skeleton.light_code).is_none() {
            let unmapped = UnmappedLightCode {
                row: index,
                code: skeleton.light_code.clone(),
                carried: light.color,
            };
            warn!("{}", unmapped);
            self.unmapped_light_codes.push(unmapped);
        }

        let crossing = CrossingRecord::from_skeleton(&skeleton);
        if let Err(error) = crossing.classification {
            self.classification_failures.push(ClassificationFailure {
                row: index,
                crossing_id: crossing.crossing_id.clone(),
                lane_id: crossing.lane_id.clone(),
                error,
            });
        }

        self.last_color = light.color;
        self.observations.push(Observation::new(light, crossing));
        Ok(self)
    }
}

/// Normalize, classify and resolve light state for every row, in order.
///
/// Under `MalformedRecordPolicy::Abort` the first malformed row fails the
/// pass; otherwise it is listed in `rejections` and skipped.
pub fn derive_observations(
    rows: &[RawSensorRow],
    params: &ContextParams,
) -> Result<DerivedBatch, ContextError> {
    rows.iter()
        .enumerate()
        .try_fold(DerivedBatch::seeded(params.initial_light), |batch, (index, row)| {
            batch.push_row(index, row, params.malformed_policy)
        })
}

/// Run the full pass and bundle everything for the output sinks.
pub fn run_pass(rows: &[RawSensorRow], params: &ContextParams) -> Result<ContextReport, ContextError> {
    let derived = derive_observations(rows, params)?;
    let accident_scenarios = evaluate_all(&derived.observations, &params.response);
    let optimization_actions = optimize(&derived.observations);
    let summary = PassSummary::from_pass(
        rows.len(),
        &derived,
        &accident_scenarios,
        &optimization_actions,
    );

    Ok(ContextReport {
        observations: derived.observations,
        accident_scenarios,
        optimization_actions,
        summary,
        rejections: derived.rejections,
        unmapped_light_codes: derived.unmapped_light_codes,
        classification_failures: derived.classification_failures,
    })
}
