use std::collections::HashMap;

use crate::density_classifier::Density;
use crate::light_state::LightColor;
use crate::observation::Observation;

use super::types::OptimizationAction;

/// The parts of an observation the optimizer needs, borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneCandidate<'a> {
    pub crossing_id: &'a str,
    pub lane_id: &'a str,
    pub timestamp: &'a str,
    pub density: Density,
}

impl<'a> LaneCandidate<'a> {
    fn from_observation(obs: &'a Observation, density: Density) -> Self {
        Self {
            crossing_id: &obs.crossing.crossing_id,
            lane_id: &obs.crossing.lane_id,
            timestamp: &obs.crossing.timestamp,
            density,
        }
    }
}

/// Split observations into (green with light traffic, red with heavy traffic),
/// each in input order. Unclassified readings belong to neither side.
pub fn partition(observations: &[Observation]) -> (Vec<LaneCandidate<'_>>, Vec<LaneCandidate<'_>>) {
    let mut green_low = Vec::new();
    let mut red_high = Vec::new();
    for obs in observations {
        let Some(density) = obs.density() else {
            continue;
        };
        match obs.color() {
            LightColor::Green if density.is_light() => {
                green_low.push(LaneCandidate::from_observation(obs, density));
            }
            LightColor::Red if density == Density::High => {
                red_high.push(LaneCandidate::from_observation(obs, density));
            }
            _ => {}
        }
    }
    (green_low, red_high)
}

/// All (green, red) pairs sharing a crossing. Ordered by green lane in input
/// order, then by red lane in input order.
pub fn optimize(observations: &[Observation]) -> Vec<OptimizationAction> {
    let (green_low, red_high) = partition(observations);

    let mut red_by_crossing: HashMap<&str, Vec<&LaneCandidate<'_>>> = HashMap::new();
    for red in &red_high {
        red_by_crossing.entry(red.crossing_id).or_default().push(red);
    }

    green_low
        .iter()
        .flat_map(|green| {
            red_by_crossing
                .get(green.crossing_id)
                .into_iter()
                .flatten()
                .map(move |red| OptimizationAction {
                    crossing_id: green.crossing_id.to_string(),
                    from_lane: green.lane_id.to_string(),
                    to_lane: red.lane_id.to_string(),
                    timestamp: green.timestamp.to_string(),
                    from_density: green.density,
                    to_density: red.density,
                })
        })
        .collect()
}
