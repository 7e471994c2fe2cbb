//! Semantic rule classification
//!
//! Labels each user-supplied semantic rule S-attributed or L-attributed by
//! looking for an inherited-attribute assignment, written `.i =`.
//!
//! This is a naming-convention heuristic, not attribute flow analysis: an
//! inherited attribute spelled any other way (`.inh =`, `.type =` on a child)
//! is reported as synthesized.

mod classify;
mod report;

#[cfg(test)]
mod tests;

pub use classify::{Attribution, classify_rule};
pub use report::{RuleAnalysisItem, RuleAnalysisReport};
