//! Action records and action creators

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::DispatchError;

/// An immutable message describing a state change.
///
/// Serializes to the conventional `{"type": ..., "payload": ...}` shape. The
/// `payload` key is left out entirely when there is no payload. A `null`
/// payload is still a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    action_type: String,
    #[serde(
        default,
        deserialize_with = "present_payload",
        skip_serializing_if = "Option::is_none"
    )]
    payload: Option<Value>,
}

// Only called when the key is present, so `null` becomes `Some(Null)`.
fn present_payload<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Action {
    /// Create an action without a payload
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: None,
        }
    }

    /// Create an action carrying a payload
    pub fn with_payload(action_type: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: Some(payload.into()),
        }
    }

    /// The action type label
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// The payload, if any
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Consume the action, returning its payload
    pub fn into_payload(self) -> Option<Value> {
        self.payload
    }

    pub(crate) fn validate(&self) -> Result<(), DispatchError> {
        if self.action_type.is_empty() {
            return Err(DispatchError::InvalidAction("action has no type".into()));
        }
        Ok(())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(payload) => write!(f, "{}({})", self.action_type, payload),
            None => f.write_str(&self.action_type),
        }
    }
}

impl TryFrom<&Value> for Action {
    type Error = DispatchError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = value
            .as_object()
            .ok_or_else(|| DispatchError::InvalidAction(format!("expected an object, got {value}")))?;

        let action_type = match object.get("type") {
            Some(Value::String(t)) if !t.is_empty() => t.clone(),
            Some(other) => {
                return Err(DispatchError::InvalidAction(format!(
                    "type must be a non-empty string, got {other}"
                )))
            }
            None => return Err(DispatchError::InvalidAction("action has no type".into())),
        };

        Ok(Self {
            action_type,
            payload: object.get("payload").cloned(),
        })
    }
}

impl TryFrom<Value> for Action {
    type Error = DispatchError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Action::try_from(&value)
    }
}

/// A function producing an [`Action`] from an optional payload.
///
/// Creators are shared between clones of a definition, so they must be
/// `Send + Sync`.
pub type ActionCreator = Arc<dyn Fn(Option<Value>) -> Action + Send + Sync>;

/// Wrap a closure as an [`ActionCreator`]
pub fn creator<F>(f: F) -> ActionCreator
where
    F: Fn(Option<Value>) -> Action + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The creator used when a definition does not supply its own:
/// `payload -> { type, payload }`.
pub(crate) fn default_creator(action_type: String) -> ActionCreator {
    Arc::new(move |payload| Action {
        action_type: action_type.clone(),
        payload,
    })
}
