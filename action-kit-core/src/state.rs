//! Immutable object state and the field-update shorthand

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::DispatchError;

/// States that support the single-field update generated by
/// [`ActionDefinition::field`](crate::ActionDefinition::field).
pub trait FieldState: Clone {
    /// Return a shallow copy with `field` set to `value`.
    ///
    /// `None` clears the field. Implementations must leave `self` untouched.
    fn with_field(&self, field: &str, value: Option<Value>) -> Self;
}

/// An immutable JSON object snapshot.
///
/// Clones share the underlying map, so handing a `State` around is cheap and
/// [`State::ptr_eq`] tells whether two values are the very same snapshot.
#[derive(Clone, Default, PartialEq)]
pub struct State(Arc<Map<String, Value>>);

impl State {
    /// An empty state object
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a top-level field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether a top-level field is present
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of top-level fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the object has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert back into a plain JSON value
    pub fn to_value(&self) -> Value {
        Value::Object((*self.0).clone())
    }

    /// Whether both values share the same snapshot (identity, not equality)
    pub fn ptr_eq(&self, other: &State) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl FieldState for State {
    fn with_field(&self, field: &str, value: Option<Value>) -> Self {
        let mut next = (*self.0).clone();
        match value {
            Some(value) => {
                next.insert(field.to_string(), value);
            }
            None => {
                next.remove(field);
            }
        }
        Self(Arc::new(next))
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl From<Map<String, Value>> for State {
    fn from(map: Map<String, Value>) -> Self {
        Self(Arc::new(map))
    }
}

impl TryFrom<Value> for State {
    type Error = DispatchError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(DispatchError::InvalidState(format!(
                "expected an object, got {other}"
            ))),
        }
    }
}

impl From<State> for Value {
    fn from(state: State) -> Self {
        match Arc::try_unwrap(state.0) {
            Ok(map) => Value::Object(map),
            Err(shared) => Value::Object((*shared).clone()),
        }
    }
}

impl Serialize for State {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for State {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::<String, Value>::deserialize(deserializer).map(Self::from)
    }
}
