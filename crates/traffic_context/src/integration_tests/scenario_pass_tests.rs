//! End-to-end decisions through the plugin: a small morning at two crossings.

use crate::accident_response::AccidentAction;
use crate::analysis_pass::run_pass;
use crate::context_params::ContextParams;
use crate::density_classifier::Density;
use crate::light_state::LightColor;
use crate::sensor_row::RawSensorRow;
use crate::test_harness::TestPass;

fn reading(
    crossing: &str,
    lane: &str,
    time: &str,
    (speed, accel): (f64, f64),
    (code, timer): (&str, i64),
    incidents: i64,
) -> RawSensorRow {
    RawSensorRow::new(crossing, lane, time)
        .with_motion(speed, accel)
        .with_light(code, timer)
        .with_incidents(incidents)
}

fn morning() -> Vec<RawSensorRow> {
    vec![
        // C1: two light green lanes, three heavy red lanes
        reading("C1", "N", "07:00:00", (60.0, 5.0), ("L3", 10), 0),
        reading("C1", "S", "07:00:05", (30.0, 20.0), ("L3", 15), 0),
        reading("C1", "E", "07:00:10", (5.0, 40.0), ("L1", 20), 0),
        reading("C1", "W", "07:00:15", (10.0, 36.0), ("L1", 25), 0),
        reading("C1", "NE", "07:00:20", (0.0, 50.0), ("L1", 30), 1),
        // C2: accident on green, a yellow accident, and an unknown code
        reading("C2", "N", "07:01:00", (25.0, 40.0), ("L3", 45), 2),
        reading("C2", "S", "07:01:05", (25.0, 40.0), ("L2", 45), 1),
        reading("C2", "E", "07:01:10", (5.0, 40.0), ("XX", 50), 0),
        // C3: a sensor glitch
        reading("C3", "N", "07:02:00", (-5.0, 3.0), ("L1", 5), 0),
    ]
}

#[test]
fn morning_observations_classified() {
    let mut pass = TestPass::new().with_rows(morning());
    pass.run();
    let densities: Vec<_> = pass.observations().iter().map(|o| o.density()).collect();
    assert_eq!(
        densities,
        vec![
            Some(Density::Free),
            Some(Density::Low),
            Some(Density::High),
            Some(Density::High),
            Some(Density::High),
            Some(Density::Medium),
            Some(Density::Medium),
            Some(Density::High),
            None,
        ]
    );
    // "XX" keeps the yellow from the row before it.
    assert_eq!(pass.observations()[7].color(), LightColor::Yellow);
}

#[test]
fn morning_accident_scenarios() {
    let mut pass = TestPass::new().with_rows(morning());
    pass.run();
    let scenarios = pass.scenarios();
    assert_eq!(scenarios.len(), 2, "yellow accident produces nothing");

    assert_eq!(scenarios[0].crossing_id, "C1");
    assert_eq!(scenarios[0].lane_id, "NE");
    assert_eq!(scenarios[0].action, AccidentAction::HoldRedThenBlinkYellow);
    assert_eq!(scenarios[0].duration_secs, 60);

    assert_eq!(scenarios[1].crossing_id, "C2");
    assert_eq!(scenarios[1].action, AccidentAction::BlinkYellow);
    assert_eq!(scenarios[1].duration_secs, 15);
    assert_eq!(scenarios[1].timestamp, "07:01:00");
}

#[test]
fn morning_optimization_is_all_pairs() {
    let mut pass = TestPass::new().with_rows(morning());
    pass.run();
    let actions = pass.actions();
    assert_eq!(actions.len(), 6);
    assert!(actions.iter().all(|a| a.crossing_id == "C1"));
    let from_n = actions.iter().filter(|a| a.from_lane == "N").count();
    let from_s = actions.iter().filter(|a| a.from_lane == "S").count();
    assert_eq!((from_n, from_s), (3, 3));
    assert!(actions
        .iter()
        .filter(|a| a.from_lane == "N")
        .all(|a| a.timestamp == "07:00:00"));
}

#[test]
fn morning_summary() {
    let mut pass = TestPass::new().with_rows(morning());
    pass.run();
    let summary = pass.summary();
    assert_eq!(summary.records_received, 9);
    assert_eq!(summary.observations, 9);
    assert_eq!(summary.unique_crossings, 3);
    assert_eq!(summary.unique_lanes, 5);
    assert_eq!(summary.classification_errors, 1);
    assert_eq!(summary.unmapped_light_codes, 1);
    assert_eq!(summary.accidents_flagged, 3);
    assert_eq!(summary.accident_scenarios, 2);
    assert_eq!(summary.optimization_actions, 6);
    assert_eq!(summary.densities.count(Density::High), 4);
}

#[test]
fn plugin_and_pure_pass_agree() {
    let mut pass = TestPass::new().with_rows(morning());
    pass.run();
    let report = run_pass(&morning(), &ContextParams::default()).expect("pass");

    assert_eq!(pass.observations(), report.observations.as_slice());
    assert_eq!(pass.scenarios(), report.accident_scenarios.as_slice());
    assert_eq!(pass.actions(), report.optimization_actions.as_slice());
    assert_eq!(pass.summary(), &report.summary);
}
