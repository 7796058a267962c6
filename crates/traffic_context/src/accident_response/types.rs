use serde::{Deserialize, Serialize};

use crate::config::{RED_HOLD_SECS, SIGNAL_CYCLE_SECS};
use crate::light_state::LightColor;

/// What the signal controller is asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccidentAction {
    BlinkYellow,
    HoldRedThenBlinkYellow,
}

impl AccidentAction {
    pub fn label(self) -> &'static str {
        match self {
            AccidentAction::BlinkYellow => "Change to blinking yellow",
            AccidentAction::HoldRedThenBlinkYellow => "Maintain RED then change to blinking yellow",
        }
    }
}

/// Timing constants used by the response rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTiming {
    /// Full signal cycle; green lanes blink for `cycle_secs - timer`.
    pub cycle_secs: i64,
    /// Red lanes hold red this long before blinking.
    pub red_hold_secs: i64,
}

impl Default for ResponseTiming {
    fn default() -> Self {
        Self {
            cycle_secs: SIGNAL_CYCLE_SECS,
            red_hold_secs: RED_HOLD_SECS,
        }
    }
}

/// A proposed response to one accident reading. Rebuilt on every pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccidentScenario {
    pub crossing_id: String,
    pub lane_id: String,
    pub timestamp: String,
    pub timer_at_detection: i64,
    pub light_color_at_detection: LightColor,
    pub action: AccidentAction,
    /// Seconds the action lasts. For green lanes this is the remaining cycle
    /// and is negative when the timer already ran past it.
    pub duration_secs: i64,
    pub message: String,
}
