//! Test utilities for reducers built with action-kit
//!
//! - [`ReducerHarness`]: drives a combined reducer and records what was dispatched
//! - Assertion macros for checking dispatched action types
//!
//! # Example
//!
//! ```
//! use action_kit_core::testing::ReducerHarness;
//! use action_kit_core::{assert_dispatched, combine, registry, Action, ActionDefinition, State};
//!
//! let reducer = combine(&registry! {
//!     set_name => ActionDefinition::<State>::field("SET_NAME", "name").unwrap(),
//! });
//! let mut harness = ReducerHarness::new(State::default(), reducer);
//!
//! harness.dispatch(Action::with_payload("SET_NAME", "Alice")).unwrap();
//! harness.dispatch(Action::new("UNKNOWN")).unwrap();
//!
//! let actions = harness.drain_dispatched();
//! assert_dispatched!(actions, "SET_NAME");
//! assert_eq!(actions.len(), 2);
//! ```

use crate::action::Action;
use crate::combine::CombinedReducer;
use crate::error::DispatchError;

/// One dispatch recorded by a [`ReducerHarness`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    /// The dispatched action
    pub action: Action,
    /// Whether a handler produced a new state
    pub changed: bool,
}

/// Harness that applies actions to a state and records each dispatch.
///
/// # Type Parameters
///
/// - `S`: The state type
pub struct ReducerHarness<S> {
    /// The state under test
    pub state: S,
    reducer: CombinedReducer<S>,
    history: Vec<Dispatched>,
}

impl<S: Clone + 'static> ReducerHarness<S> {
    /// Create a new harness with the given initial state and reducer.
    pub fn new(state: S, reducer: CombinedReducer<S>) -> Self {
        Self {
            state,
            reducer,
            history: Vec::new(),
        }
    }

    /// Dispatch an action, replacing the state if a handler ran.
    ///
    /// Failed dispatches are not recorded.
    pub fn dispatch(&mut self, action: Action) -> Result<bool, DispatchError> {
        let next = self.reducer.reduce_changed(&self.state, &action)?;
        let changed = next.is_some();
        if let Some(next) = next {
            self.state = next;
        }
        self.history.push(Dispatched { action, changed });
        Ok(changed)
    }

    /// Dispatch several actions in order, stopping at the first error.
    pub fn dispatch_all<I>(&mut self, actions: I) -> Result<(), DispatchError>
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action)?;
        }
        Ok(())
    }

    /// Recorded dispatches since the last drain
    pub fn history(&self) -> &[Dispatched] {
        &self.history
    }

    /// Drain all recorded actions.
    pub fn drain_dispatched(&mut self) -> Vec<Action> {
        self.history.drain(..).map(|d| d.action).collect()
    }

    /// Drain recorded actions that did not match any handler.
    ///
    /// Other records stay in the history.
    pub fn drain_unhandled(&mut self) -> Vec<Action> {
        let (unhandled, handled): (Vec<_>, Vec<_>) =
            self.history.drain(..).partition(|d| !d.changed);
        self.history = handled;
        unhandled.into_iter().map(|d| d.action).collect()
    }
}

/// Assert that an action of the given type was dispatched.
///
/// ```ignore
/// let actions = harness.drain_dispatched();
/// assert_dispatched!(actions, "SET_NAME");
/// ```
#[macro_export]
macro_rules! assert_dispatched {
    ($actions:expr, $action_type:expr) => {
        assert!(
            $actions.iter().any(|a| a.action_type() == $action_type),
            "Expected action of type `{}` to be dispatched, but got: {:?}",
            $action_type,
            $actions
        );
    };
}

/// Assert that NO action of the given type was dispatched.
#[macro_export]
macro_rules! assert_not_dispatched {
    ($actions:expr, $action_type:expr) => {
        assert!(
            !$actions.iter().any(|a| a.action_type() == $action_type),
            "Expected action of type `{}` NOT to be dispatched, but it was: {:?}",
            $action_type,
            $actions
        );
    };
}

/// Count how many dispatched actions have the given type.
#[macro_export]
macro_rules! count_dispatched {
    ($actions:expr, $action_type:expr) => {
        $actions
            .iter()
            .filter(|a| a.action_type() == $action_type)
            .count()
    };
}
