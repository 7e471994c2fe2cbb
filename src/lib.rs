//! # sdt-explainer
//!
//! Worked examples of syntax-directed translation (SDT) for small arithmetic
//! expressions, and S-/L-attribute classification of user-written semantic
//! rules.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ui        → Panels, transient messages, text rendering, event session
//!   ↓
//! analysis  → S-/L-attributed rule classification
//!   ↓
//! explain   → Operator detection, grammar, parse tree, semantic rules
//!   ↓
//! input     → Input extraction and the validation gate
//!   ↓
//! eval      → Logos lexer, recursive-descent arithmetic evaluator
//! ```

// ============================================================================
// MODULES (dependency order: eval → input → explain → analysis → ui)
// ============================================================================

/// Arithmetic evaluation: Logos lexer, recursive-descent evaluator
pub mod eval;

/// Input extraction, blank-input validation, add-line editing
pub mod input;

/// Expression explainer: grammar, parse tree, semantic rules, result
pub mod explain;

/// Semantic rule classification
pub mod analysis;

/// Presentation: panel state, messages, rendering
pub mod ui;

pub use analysis::{Attribution, RuleAnalysisItem, RuleAnalysisReport};
pub use eval::{EvalError, Evaluation, evaluate};
pub use explain::{ExplainerSolution, Operator, OperatorSet};
pub use input::InputError;
