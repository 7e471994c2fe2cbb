//! Presentation layer
//!
//! Panel state, transient messages, and text rendering for the expression
//! explainer and the rule analyzer. Computation modules never read any of
//! this state.

mod message;
mod options;
mod panel;
mod render;
mod session;

#[cfg(test)]
mod tests;

pub use message::{Message, MessageBoard, MessageKind, MessagePhase};
pub use options::{RenderOptions, SessionConfig};
pub use panel::{Panel, UnknownPanel};
pub use render::{
    Card, expression_cards, render_cards, render_expression_results, render_message,
    render_rules_results, rules_cards,
};
pub use session::{Event, Fields, Session, Update};
