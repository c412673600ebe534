//! State container driven by a combined reducer

use crate::action::Action;
use crate::combine::CombinedReducer;
use crate::error::DispatchError;
use crate::state::State;

/// Holds the current state and replaces it by dispatching actions through a
/// [`CombinedReducer`].
///
/// # Example
/// ```
/// use action_kit_core::{combine, registry, ActionDefinition, State, Store};
/// use serde_json::json;
///
/// let set_name = ActionDefinition::<State>::field("SET_NAME", "name").unwrap();
/// let reducer = combine(&registry! { set_name => set_name.clone() });
///
/// let mut store = Store::new(State::default(), reducer);
/// assert!(store.dispatch(set_name.create(Some(json!("Alice")))).unwrap());
/// assert_eq!(store.state().get("name"), Some(&json!("Alice")));
/// ```
#[derive(Debug)]
pub struct Store<S = State> {
    state: S,
    reducer: CombinedReducer<S>,
}

impl<S: Clone + 'static> Store<S> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: CombinedReducer<S>) -> Self {
        Self { state, reducer }
    }

    /// Dispatch an action to the store
    ///
    /// Returns `true` if a handler produced a new state and `false` if the
    /// action fell through. On error the current state is kept.
    pub fn dispatch(&mut self, action: Action) -> Result<bool, DispatchError> {
        match self.reducer.reduce_changed(&self.state, &action)? {
            Some(next) => {
                self.state = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get the reducer
    pub fn reducer(&self) -> &CombinedReducer<S> {
        &self.reducer
    }

    /// Consume the store, returning the current state
    pub fn into_state(self) -> S {
        self.state
    }
}
