//! Action definitions: a type label, an update function and an action creator
//! bundled into one value
//!
//! # Example
//!
//! ```
//! use action_kit_core::{build, ActionDefinition, ReducerSpec, State};
//! use serde_json::json;
//!
//! let set_name: ActionDefinition = build("SET_NAME", ReducerSpec::field("name"), None).unwrap();
//!
//! let action = set_name.create(Some(json!("Alice")));
//! assert_eq!(action.action_type(), "SET_NAME");
//!
//! let state = State::try_from(json!({ "name": "Bob", "age": 5 })).unwrap();
//! let next = set_name.reduce(&state, &action);
//! assert_eq!(next.to_value(), json!({ "name": "Alice", "age": 5 }));
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::action::{default_creator, Action, ActionCreator};
use crate::error::BuildError;
use crate::state::{FieldState, State};

/// A pure update function: `(state, action) -> new state`.
///
/// It must not mutate anything reachable from `state`.
pub type UpdateFn<S> = Arc<dyn Fn(&S, &Action) -> S + Send + Sync>;

/// Wrap a closure as an [`UpdateFn`]
pub fn update_fn<S, F>(f: F) -> UpdateFn<S>
where
    F: Fn(&S, &Action) -> S + Send + Sync + 'static,
{
    Arc::new(f)
}

/// How a definition updates state.
pub enum ReducerSpec<S> {
    /// Store the action payload under this field name
    Field(String),
    /// Run a caller-supplied update function
    Update(UpdateFn<S>),
}

impl<S> ReducerSpec<S> {
    /// Shorthand for [`ReducerSpec::Field`]
    pub fn field(name: impl Into<String>) -> Self {
        ReducerSpec::Field(name.into())
    }

    /// Shorthand for [`ReducerSpec::Update`]
    pub fn update<F>(f: F) -> Self
    where
        F: Fn(&S, &Action) -> S + Send + Sync + 'static,
    {
        ReducerSpec::Update(Arc::new(f))
    }
}

impl<S> fmt::Debug for ReducerSpec<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReducerSpec::Field(name) => f.debug_tuple("Field").field(name).finish(),
            ReducerSpec::Update(_) => f.write_str("Update(..)"),
        }
    }
}

/// An action type label together with its update function and creator.
///
/// Immutable once built. Clones share the same functions.
pub struct ActionDefinition<S = State> {
    action_type: String,
    reducer: UpdateFn<S>,
    creator: ActionCreator,
}

impl<S> Clone for ActionDefinition<S> {
    fn clone(&self) -> Self {
        Self {
            action_type: self.action_type.clone(),
            reducer: Arc::clone(&self.reducer),
            creator: Arc::clone(&self.creator),
        }
    }
}

impl<S> fmt::Debug for ActionDefinition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDefinition")
            .field("action_type", &self.action_type)
            .finish_non_exhaustive()
    }
}

impl<S: 'static> ActionDefinition<S> {
    /// Define an action handled by a custom update function.
    ///
    /// Works for any state type. The default creator is used until
    /// [`with_creator`](Self::with_creator) replaces it.
    pub fn new<F>(action_type: impl Into<String>, reducer: F) -> Result<Self, BuildError>
    where
        F: Fn(&S, &Action) -> S + Send + Sync + 'static,
    {
        Self::from_update_fn(action_type, Arc::new(reducer))
    }

    /// Like [`new`](Self::new), for an already shared [`UpdateFn`]
    pub fn from_update_fn(
        action_type: impl Into<String>,
        reducer: UpdateFn<S>,
    ) -> Result<Self, BuildError> {
        let action_type = action_type.into();
        if action_type.is_empty() {
            return Err(BuildError::MissingType);
        }
        Ok(Self {
            creator: default_creator(action_type.clone()),
            action_type,
            reducer,
        })
    }

    /// Replace the action creator.
    ///
    /// The creator's output is not checked against this definition's type.
    pub fn with_creator(mut self, creator: ActionCreator) -> Self {
        self.creator = creator;
        self
    }

    /// Create an action by calling the creator
    pub fn create(&self, payload: Option<Value>) -> Action {
        (self.creator)(payload)
    }

    /// The declared action type
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// The update function
    pub fn reducer(&self) -> &UpdateFn<S> {
        &self.reducer
    }

    /// The action creator
    pub fn creator(&self) -> &ActionCreator {
        &self.creator
    }

    /// Run the update function directly
    pub fn reduce(&self, state: &S, action: &Action) -> S {
        (self.reducer)(state, action)
    }
}

impl<S: FieldState + 'static> ActionDefinition<S> {
    /// Define an action that stores its payload under `field`.
    ///
    /// The generated update function ignores actions of any other type and
    /// returns the state it was given, so it is safe to call directly.
    /// An action without a payload clears the field.
    pub fn field(
        action_type: impl Into<String>,
        field: impl Into<String>,
    ) -> Result<Self, BuildError> {
        let action_type = action_type.into();
        let field = field.into();
        if action_type.is_empty() {
            return Err(BuildError::MissingType);
        }
        if field.is_empty() {
            return Err(BuildError::MissingReducer(action_type));
        }

        let handled = action_type.clone();
        Self::from_update_fn(
            action_type,
            Arc::new(move |state: &S, action: &Action| {
                if action.action_type() == handled {
                    state.with_field(&field, action.payload().cloned())
                } else {
                    state.clone()
                }
            }),
        )
    }
}

/// Build an [`ActionDefinition`] from a type label, a reducer and an
/// optional custom creator.
///
/// Fails when the type is empty or a field reducer names an empty field.
/// For state types that do not implement [`FieldState`], use
/// [`ActionDefinition::new`].
pub fn build<S: FieldState + 'static>(
    action_type: impl Into<String>,
    reducer: ReducerSpec<S>,
    creator: Option<ActionCreator>,
) -> Result<ActionDefinition<S>, BuildError> {
    let definition = match reducer {
        ReducerSpec::Field(field) => ActionDefinition::field(action_type, field)?,
        ReducerSpec::Update(f) => ActionDefinition::from_update_fn(action_type, f)?,
    };
    Ok(match creator {
        Some(creator) => definition.with_creator(creator),
        None => definition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::creator;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn state(value: Value) -> State {
        State::try_from(value).unwrap()
    }

    fn noop() -> ReducerSpec<State> {
        ReducerSpec::update(|s: &State, _| s.clone())
    }

    #[test]
    fn test_requires_type() {
        assert_eq!(
            build("", noop(), None).unwrap_err(),
            BuildError::MissingType
        );
        assert_eq!(
            ActionDefinition::<State>::field("", "name").unwrap_err(),
            BuildError::MissingType
        );
    }

    #[test]
    fn test_requires_reducer() {
        assert_eq!(
            build::<State>("test", ReducerSpec::field(""), None).unwrap_err(),
            BuildError::MissingReducer("test".into())
        );
    }

    #[test]
    fn test_sets_type() {
        let def = build::<State>("WOW_WHAT_AN_ACTION", ReducerSpec::field("reducer"), None).unwrap();
        assert_eq!(def.action_type(), "WOW_WHAT_AN_ACTION");
    }

    #[test]
    fn test_default_creator_without_payload() {
        let def = build("SWEET_ACTION", noop(), None).unwrap();
        let action = def.create(None);
        assert_eq!(action, Action::new("SWEET_ACTION"));
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "type": "SWEET_ACTION" })
        );
    }

    #[test]
    fn test_field_reducer_sets_payload() {
        let def = build::<State>("TEST_ACTION", ReducerSpec::field("fieldName"), None).unwrap();
        let old = state(json!({ "test": true }));

        let next = def.reduce(&old, &def.create(Some(json!("value"))));
        assert_eq!(next.to_value(), json!({ "test": true, "fieldName": "value" }));
        assert_eq!(old.to_value(), json!({ "test": true }));
    }

    #[test]
    fn test_field_reducer_clears_without_payload() {
        let def = build::<State>("TEST_ACTION", ReducerSpec::field("fieldName"), None).unwrap();
        let old = state(json!({ "test": true, "fieldName": "yes" }));

        let next = def.reduce(&old, &def.create(None));
        assert_eq!(next.to_value(), json!({ "test": true }));
    }

    #[test]
    fn test_field_reducer_payload_shapes() {
        let def = build::<State>("TEST_ACTION", ReducerSpec::field("fieldName"), None).unwrap();
        let old = state(json!({ "test": true }));

        for payload in [
            json!("no"),
            json!(true),
            json!(false),
            json!([]),
            json!([1, [2, 3], 4, [5, [6, 7], 8]]),
            json!({}),
            json!({ "list": [1, 2, 3], "test": { "foo": "bar" } }),
        ] {
            let next = def.reduce(&old, &def.create(Some(payload.clone())));
            assert_eq!(next.to_value(), json!({ "test": true, "fieldName": payload }));
        }
    }

    #[test]
    fn test_field_reducer_ignores_other_types() {
        let def = build::<State>("TEST_ACTION", ReducerSpec::field("fieldName"), None).unwrap();
        let old = state(json!({ "test": true }));

        let next = def.reduce(
            &old,
            &Action::with_payload("OMG_WTF", json!(["dis", { "is": "fun" }])),
        );
        assert!(next.ptr_eq(&old));
    }

    #[test]
    fn test_custom_reducer_is_called() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let def = ActionDefinition::new("MY_TEST_ACTION", move |s: &State, _: &Action| {
            counter.fetch_add(1, Ordering::SeqCst);
            s.clone()
        })
        .unwrap();

        let action = def.create(Some(json!({ "test": true })));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        def.reduce(&state(json!({ "otherTest": true })), &action);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_custom_creator() {
        // Merges an object payload into the state
        let merge = ReducerSpec::update(|s: &State, a: &Action| {
            let mut map = s.as_map().clone();
            if let Some(Value::Object(extra)) = a.payload() {
                map.extend(extra.clone());
            }
            State::from(map)
        });
        let custom = creator(|data| match data {
            Some(data) => Action::with_payload("O_O", data),
            None => Action::new("O_O"),
        });
        let def = build("TEST", merge, Some(custom)).unwrap();

        assert_eq!(def.create(None), Action::new("O_O"));
        assert_eq!(
            def.create(Some(json!("some data"))),
            Action::with_payload("O_O", "some data")
        );
        // The creator's type is not required to match the declared one
        assert_eq!(def.action_type(), "TEST");

        let next = def.reduce(&state(json!({ "test": true })), &def.create(Some(json!({ "foo": "bar" }))));
        assert_eq!(next.to_value(), json!({ "test": true, "foo": "bar" }));
    }

    #[test]
    fn test_from_shared_update_fn() {
        let shared = update_fn(|s: &State, a: &Action| s.with_field("last", Some(json!(a.action_type()))));
        let first = ActionDefinition::from_update_fn("FIRST", Arc::clone(&shared)).unwrap();
        let second = ActionDefinition::from_update_fn("SECOND", shared).unwrap();

        let s = first.reduce(&State::new(), &first.create(None));
        let s = second.reduce(&s, &second.create(None));
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("last"), Some(&json!("SECOND")));
    }

    #[test]
    fn test_works_with_typed_state() {
        #[derive(Debug, Clone, PartialEq)]
        struct Counter {
            count: i64,
        }

        let add = ActionDefinition::new("ADD", |s: &Counter, a: &Action| Counter {
            count: s.count + a.payload().and_then(Value::as_i64).unwrap_or(1),
        })
        .unwrap();

        let next = add.reduce(&Counter { count: 1 }, &add.create(Some(json!(4))));
        assert_eq!(next, Counter { count: 5 });
    }
}
