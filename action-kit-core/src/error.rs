//! Error types for building action definitions and dispatching actions

use thiserror::Error;

/// Errors raised while building an [`ActionDefinition`](crate::ActionDefinition).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The action type label was empty.
    #[error("an action definition requires a type")]
    MissingType,

    /// The reducer was missing (an empty field name counts as missing).
    #[error("action `{0}` requires a reducer")]
    MissingReducer(String),
}

/// Errors raised while routing an action through a combined reducer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The state was missing or was not an object.
    #[error("failed to execute reducer: missing or invalid state ({0})")]
    InvalidState(String),

    /// The action was missing, was not an object, or had no type.
    #[error("failed to execute reducer: missing or invalid action ({0})")]
    InvalidAction(String),

    /// More than one registered entry handles the same action type.
    #[error(
        "cannot execute reducer for action type \"{action_type}\": multiple matching reducers found ({})",
        .names.join(", ")
    )]
    AmbiguousAction {
        /// The conflicting action type.
        action_type: String,
        /// Registry names of every entry carrying that type.
        names: Vec<String>,
    },
}
