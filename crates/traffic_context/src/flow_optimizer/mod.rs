//! Cross-lane signal timing suggestions.
//!
//! A lane showing green while its traffic is light (FREE or LOW) could hand
//! its phase to a lane stuck on red under HIGH density. Every such pair at
//! the same crossing becomes one suggestion: `n` light green lanes and `m`
//! heavy red lanes at a crossing produce `n * m` actions.

mod matching;
mod types;


pub use matching::{optimize, partition, LaneCandidate};
pub use types::OptimizationAction;
