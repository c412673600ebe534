//! Combine a registry of action definitions into a single reducer
//!
//! # Example
//!
//! ```
//! use action_kit_core::{combine, registry, Action, ActionDefinition, State};
//! use serde_json::json;
//!
//! let actions = registry! {
//!     set_name => ActionDefinition::<State>::field("SET_NAME", "name").unwrap(),
//!     set_age => ActionDefinition::<State>::field("SET_AGE", "age").unwrap(),
//! };
//! let reducer = combine(&actions);
//! assert_eq!(reducer.actions(), ["set_name", "set_age"]);
//!
//! let state = State::try_from(json!({ "name": "Bob", "age": 5 })).unwrap();
//! let next = reducer
//!     .reduce(&state, &Action::with_payload("SET_NAME", "Alice"))
//!     .unwrap();
//! assert_eq!(next.to_value(), json!({ "name": "Alice", "age": 5 }));
//! ```

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::definition::ActionDefinition;
use crate::error::DispatchError;
use crate::log::LogConfig;
use crate::registry::ActionsRegistry;
use crate::state::State;

/// A reducer that routes each action to the one definition registered for
/// its type.
///
/// Built by [`combine`]. Holds no mutable state; clones and separate
/// `combine` calls are independent of each other.
pub struct CombinedReducer<S = State> {
    handlers: Vec<(String, ActionDefinition<S>)>,
    names: Vec<String>,
    log: LogConfig,
}

impl<S> Clone for CombinedReducer<S> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
            names: self.names.clone(),
            log: self.log.clone(),
        }
    }
}

impl<S> fmt::Debug for CombinedReducer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("actions", &self.names)
            .field("log", &self.log)
            .finish()
    }
}

/// Combine every full [`ActionDefinition`] in `actions` into one reducer.
///
/// Bare creators are left out of routing without complaint. Two definitions
/// sharing a type are not rejected here; dispatching that type fails instead.
pub fn combine<S: 'static>(actions: &ActionsRegistry<S>) -> CombinedReducer<S> {
    let handlers: Vec<(String, ActionDefinition<S>)> = actions
        .iter()
        .filter_map(|(name, entry)| {
            entry
                .definition()
                .map(|def| (name.to_string(), def.clone()))
        })
        .collect();
    let names = handlers.iter().map(|(name, _)| name.clone()).collect();

    CombinedReducer {
        handlers,
        names,
        log: LogConfig::default(),
    }
}

impl<S: 'static> CombinedReducer<S> {
    /// Names of the registry entries that take part in routing, in
    /// registry order
    pub fn actions(&self) -> &[String] {
        &self.names
    }

    /// Replace the logging filter
    pub fn with_log_config(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }

    /// The logging filter
    pub fn log_config(&self) -> &LogConfig {
        &self.log
    }

    /// Whether some routed definition handles `action_type`
    pub fn handles(&self, action_type: &str) -> bool {
        self.handlers
            .iter()
            .any(|(_, def)| def.action_type() == action_type)
    }

    fn matching(&self, action_type: &str) -> Vec<&(String, ActionDefinition<S>)> {
        self.handlers
            .iter()
            .filter(|(_, def)| def.action_type() == action_type)
            .collect()
    }
}

impl<S: Clone + 'static> CombinedReducer<S> {
    /// Apply `action` to `state`.
    ///
    /// Returns `Cow::Borrowed(state)` when no definition handles the action
    /// type, or `Cow::Owned` with the handler's result. Fails if the action
    /// has no type or if more than one definition shares its type; in the
    /// latter case no update function runs.
    pub fn reduce<'s>(&self, state: &'s S, action: &Action) -> Result<Cow<'s, S>, DispatchError> {
        action.validate()?;
        let action_type = action.action_type();
        let logged = self.log.should_log(action_type);

        match self.matching(action_type).as_slice() {
            [] => {
                if logged {
                    trace!(action = %action_type, "No reducer registered, state unchanged");
                }
                Ok(Cow::Borrowed(state))
            }
            [(name, def)] => {
                if logged {
                    debug!(action = %action_type, handler = %name, "Reducing action");
                }
                Ok(Cow::Owned(def.reduce(state, action)))
            }
            many => {
                let names: Vec<String> = many.iter().map(|(name, _)| name.clone()).collect();
                if logged {
                    warn!(action = %action_type, handlers = ?names, "Ambiguous action type");
                }
                Err(DispatchError::AmbiguousAction {
                    action_type: action_type.to_string(),
                    names,
                })
            }
        }
    }

    /// Like [`reduce`](Self::reduce), but yields `None` when the action fell
    /// through and the new state when a handler ran
    pub fn reduce_changed(&self, state: &S, action: &Action) -> Result<Option<S>, DispatchError> {
        Ok(match self.reduce(state, action)? {
            Cow::Borrowed(_) => None,
            Cow::Owned(next) => Some(next),
        })
    }

    /// Like [`reduce`](Self::reduce), but always returns an owned state
    pub fn reduce_owned(&self, state: S, action: &Action) -> Result<S, DispatchError> {
        let next = self.reduce_changed(&state, action)?;
        Ok(next.unwrap_or(state))
    }
}

impl CombinedReducer<State> {
    /// Reduce plain JSON values.
    ///
    /// Checks that `state` is an object and that `action` is an object with
    /// a non-empty string `type` before routing.
    pub fn reduce_value(&self, state: &Value, action: &Value) -> Result<Value, DispatchError> {
        let action = Action::try_from(action)?;
        let current = State::try_from(state.clone())?;
        Ok(self.reduce_owned(current, &action)?.into())
    }
}
