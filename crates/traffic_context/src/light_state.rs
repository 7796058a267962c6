//! Signal light state tracking.
//!
//! Raw status codes map onto a light color: `L1` is red, `L2` yellow and
//! `L3` green. Any other code keeps whatever color the previous reading
//! resolved to, so the tracker is a fold over the batch with the last
//! resolved color as its accumulator. The timer is copied verbatim whether
//! or not the code was recognized.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LightColor {
    #[default]
    Red,
    Yellow,
    Green,
}

impl LightColor {
    pub fn label(self) -> &'static str {
        match self {
            LightColor::Red => "RED",
            LightColor::Yellow => "YELLOW",
            LightColor::Green => "GREEN",
        }
    }
}

/// Status codes reported by the signal controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCode {
    L1,
    L2,
    L3,
}

impl LightCode {
    /// Returns `None` for anything outside L1..L3. Surrounding whitespace is
    /// ignored, case is not.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "L1" => Some(LightCode::L1),
            "L2" => Some(LightCode::L2),
            "L3" => Some(LightCode::L3),
            _ => None,
        }
    }

    pub fn color(self) -> LightColor {
        match self {
            LightCode::L1 => LightColor::Red,
            LightCode::L2 => LightColor::Yellow,
            LightCode::L3 => LightColor::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightState {
    pub color: LightColor,
    /// Seconds on the controller's timer when the reading was taken.
    pub timer: i64,
}

/// Resolve one reading against the previously resolved color.
pub fn resolve(raw_code: &str, timer: i64, prev_color: LightColor) -> LightState {
    let color = LightCode::parse(raw_code).map_or(prev_color, LightCode::color);
    LightState { color, timer }
}

/// Resolve an ordered sequence of `(code, timer)` readings starting from
/// `seed`, returning one state per reading.
pub fn resolve_sequence<'a, I>(readings: I, seed: LightColor) -> Vec<LightState>
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    readings
        .into_iter()
        .scan(seed, |prev, (code, timer)| {
            let state = resolve(code, timer, *prev);
            *prev = state.color;
            Some(state)
        })
        .collect()
}
