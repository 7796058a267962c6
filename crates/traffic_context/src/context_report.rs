//! Everything one pass hands to the output sinks, in one serializable value.

use serde::Serialize;

use crate::accident_response::AccidentScenario;
use crate::analysis_pass::ClassificationFailure;
use crate::context_error::{ContextError, MalformedRecord, UnmappedLightCode};
use crate::flow_optimizer::OptimizationAction;
use crate::observation::Observation;
use crate::pass_summary::PassSummary;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextReport {
    /// In input order, for the reporting sink.
    pub observations: Vec<Observation>,
    /// For the alerting / actuation sink.
    pub accident_scenarios: Vec<AccidentScenario>,
    /// For the signal control sink.
    pub optimization_actions: Vec<OptimizationAction>,
    pub summary: PassSummary,
    pub rejections: Vec<MalformedRecord>,
    pub unmapped_light_codes: Vec<UnmappedLightCode>,
    pub classification_failures: Vec<ClassificationFailure>,
}

impl ContextReport {
    pub fn to_json(&self) -> Result<String, ContextError> {
        serde_json::to_string(self).map_err(|e| ContextError::Encode(e.to_string()))
    }

    pub fn has_errors(&self) -> bool {
        !self.rejections.is_empty() || !self.classification_failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::analysis_pass::run_pass;
    use crate::context_params::ContextParams;
    use crate::sensor_row::RawSensorRow;

    #[test]
    fn test_report_json_shape() {
        let rows = vec![
            RawSensorRow::new("C1", "G", "06:00:00")
                .with_motion(60.0, 5.0)
                .with_light("L3", 45)
                .with_incidents(1),
            RawSensorRow::new("C1", "R", "06:00:00")
                .with_motion(5.0, 40.0)
                .with_light("L1", 45)
                .with_incidents(0),
        ];
        let report = run_pass(&rows, &ContextParams::default()).expect("pass");
        let json = report.to_json().expect("encode");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["observations"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["observations"][0]["light"]["color"], "GREEN");
        assert_eq!(
            value["observations"][0]["crossing"]["classification"]["Ok"]["density"],
            "FREE"
        );
        assert_eq!(value["accident_scenarios"][0]["duration_secs"], 15);
        assert_eq!(value["accident_scenarios"][0]["action"], "BlinkYellow");
        assert_eq!(value["optimization_actions"][0]["from_lane"], "G");
        assert_eq!(value["optimization_actions"][0]["to_lane"], "R");
        assert_eq!(value["summary"]["unique_lanes"], 2);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_has_errors_on_classification_failure() {
        let rows = vec![RawSensorRow::new("C1", "a", "t")
            .with_motion(-5.0, 0.0)
            .with_light("L1", 0)
            .with_incidents(0)];
        let report = run_pass(&rows, &ContextParams::default()).expect("pass");
        assert!(report.has_errors());
        assert_eq!(report.classification_failures.len(), 1);
    }
}
