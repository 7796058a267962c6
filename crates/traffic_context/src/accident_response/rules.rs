use crate::light_state::LightColor;
use crate::observation::Observation;

use super::types::{AccidentAction, AccidentScenario, ResponseTiming};

/// Evaluate one observation with the default signal timing.
pub fn evaluate(observation: &Observation) -> Option<AccidentScenario> {
    evaluate_with(observation, &ResponseTiming::default())
}

pub fn evaluate_with(observation: &Observation, timing: &ResponseTiming) -> Option<AccidentScenario> {
    let crossing = &observation.crossing;
    if !crossing.accident {
        return None;
    }

    let timer = observation.light.timer;
    let (action, duration_secs, message) = match observation.light.color {
        LightColor::Green => {
            // Not clamped: an overrun timer yields a negative duration.
            let remaining = timing.cycle_secs - timer;
            let message = format!(
                "Accident detected at {}, {}. Changing to blinking yellow for {} seconds.",
                crossing.crossing_id, crossing.lane_id, remaining
            );
            (AccidentAction::BlinkYellow, remaining, message)
        }
        LightColor::Red => {
            let hold = timing.red_hold_secs;
            let message = format!(
                "Accident detected at {}, {}. Maintaining RED for {} seconds, then changing to blinking yellow.",
                crossing.crossing_id, crossing.lane_id, hold
            );
            (AccidentAction::HoldRedThenBlinkYellow, hold, message)
        }
        LightColor::Yellow => return None,
    };

    Some(AccidentScenario {
        crossing_id: crossing.crossing_id.clone(),
        lane_id: crossing.lane_id.clone(),
        timestamp: crossing.timestamp.clone(),
        timer_at_detection: timer,
        light_color_at_detection: observation.light.color,
        action,
        duration_secs,
        message,
    })
}

/// Scenarios for every observation that needs one, in observation order.
pub fn evaluate_all(observations: &[Observation], timing: &ResponseTiming) -> Vec<AccidentScenario> {
    observations
        .iter()
        .filter_map(|obs| evaluate_with(obs, timing))
        .collect()
}
