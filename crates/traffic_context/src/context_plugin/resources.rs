use bevy::prelude::*;

use crate::accident_response::AccidentScenario;
use crate::analysis_pass::DerivedBatch;
use crate::context_error::MalformedRecord;
use crate::flow_optimizer::OptimizationAction;
use crate::observation::Observation;
use crate::sensor_row::RawSensorRow;

/// Input rows for the next pass, in sensor order.
#[derive(Resource, Debug, Clone, Default)]
pub struct SensorBatch {
    pub rows: Vec<RawSensorRow>,
}

/// Observations derived by the most recent pass.
#[derive(Resource, Debug, Clone, Default)]
pub struct ObservationLog {
    pub batch: DerivedBatch,
    /// The row that aborted the last pass, if it was aborted.
    pub aborted: Option<MalformedRecord>,
}

impl ObservationLog {
    pub fn observations(&self) -> &[Observation] {
        &self.batch.observations
    }

    pub(crate) fn aborted_on(record: MalformedRecord) -> Self {
        Self {
            batch: DerivedBatch::default(),
            aborted: Some(record),
        }
    }
}

/// Accident responses for the most recent pass.
#[derive(Resource, Debug, Clone, Default)]
pub struct AccidentLog {
    pub scenarios: Vec<AccidentScenario>,
}

/// Signal timing suggestions for the most recent pass.
#[derive(Resource, Debug, Clone, Default)]
pub struct OptimizationLog {
    pub actions: Vec<OptimizationAction>,
}
