//! Accident response rules.
//!
//! When a lane reports an incident the engine proposes what its signal
//! should do next. Advisory only: nothing here touches light state, the
//! scenario is handed to an external actuator.
//!
//! - Green: switch to blinking yellow for the rest of the signal cycle.
//! - Red: hold red for the fixed hold period, then blink yellow.
//! - Yellow, or no incident: nothing to do.

mod rules;
mod types;


pub use rules::{evaluate, evaluate_all, evaluate_with};
pub use types::{AccidentAction, AccidentScenario, ResponseTiming};
