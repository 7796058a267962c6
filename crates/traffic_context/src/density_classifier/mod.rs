//! Crisp threshold classification of lane readings into traffic density.
//!
//! Average speed and acceleration are each binned into LOW / MEDIUM / HIGH
//! and the pair picks one of nine rules:
//!
//! | speed \ accel | LOW    | MEDIUM | HIGH   |
//! |---------------|--------|--------|--------|
//! | LOW           | MEDIUM | MEDIUM | HIGH   |
//! | MEDIUM        | LOW    | LOW    | MEDIUM |
//! | HIGH          | FREE   | FREE   | LOW    |
//!
//! Band edges are inclusive on both neighbouring rules (a speed of exactly
//! 20 is both LOW and MEDIUM), so rules are tried in declared order and the
//! first match wins.

pub mod levels;
pub mod rules;


pub use levels::{Density, DensityDistribution, Level};
pub use rules::{classify, Classification, RuleId, DENSITY_RULES};
