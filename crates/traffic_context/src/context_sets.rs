//! Ordering of the analysis pass inside `FixedUpdate`.
//!
//! ```text
//! Derive  →  Evaluate  →  Report
//! ```
//!
//! * **Derive** – rows become observations (normalize, classify, resolve
//!   light state). The only step that cares about row order.
//! * **Evaluate** – accident rules and the flow optimizer. Both only read
//!   the observation log and are independent of each other.
//! * **Report** – summary counts and the pass log line.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContextSet {
    Derive,
    Evaluate,
    Report,
}
