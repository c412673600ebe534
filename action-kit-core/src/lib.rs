//! Core types for action-kit
//!
//! This crate cuts the boilerplate of Redux-style state updates: each action
//! type is declared once, together with the function that applies it, and a
//! whole set of declarations is folded into one routing reducer.
//!
//! # Core Concepts
//!
//! - **Action**: A `{ type, payload? }` message describing a state change
//! - **State**: An immutable snapshot; reducers return new snapshots
//! - **ActionDefinition**: Type label + update function + action creator
//! - **ActionsRegistry**: Named definitions (and bare creators) in order
//! - **CombinedReducer**: Routes each action to the one definition for its type
//!
//! # Basic Example
//!
//! ```
//! use action_kit_core::prelude::*;
//! use serde_json::json;
//!
//! let set_name: ActionDefinition = build("SET_NAME", ReducerSpec::field("name"), None).unwrap();
//! let birthday = ActionDefinition::new("BIRTHDAY", |s: &State, _: &Action| {
//!     let age = s.get("age").and_then(|v| v.as_i64()).unwrap_or(0);
//!     s.with_field("age", Some(json!(age + 1)))
//! })
//! .unwrap();
//!
//! let reducer = combine(&registry! {
//!     set_name => set_name.clone(),
//!     birthday => birthday.clone(),
//! });
//!
//! let mut store = Store::new(State::try_from(json!({ "name": "Bob", "age": 5 })).unwrap(), reducer);
//! store.dispatch(set_name.create(Some(json!("Alice")))).unwrap();
//! store.dispatch(birthday.create(None)).unwrap();
//!
//! assert_eq!(store.state().to_value(), json!({ "name": "Alice", "age": 6 }));
//! ```
//!
//! # Unhandled Actions
//!
//! Actions whose type no definition claims are not errors. The combined
//! reducer hands back the state it was given, which lets it sit next to other
//! update logic. Registering two definitions with the same type is only
//! detected when that type is dispatched.

pub mod action;
pub mod combine;
pub mod definition;
pub mod error;
pub mod log;
pub mod registry;
pub mod state;
pub mod store;
pub mod testing;

pub use action::{creator, Action, ActionCreator};
pub use combine::{combine, CombinedReducer};
pub use definition::{build, update_fn, ActionDefinition, ReducerSpec, UpdateFn};
pub use error::{BuildError, DispatchError};
pub use log::LogConfig;
pub use registry::{ActionsRegistry, RegistryEntry};
pub use state::{FieldState, State};
pub use store::Store;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{creator, Action, ActionCreator};
    pub use crate::combine::{combine, CombinedReducer};
    pub use crate::definition::{build, ActionDefinition, ReducerSpec};
    pub use crate::error::{BuildError, DispatchError};
    pub use crate::log::LogConfig;
    pub use crate::registry;
    pub use crate::registry::{ActionsRegistry, RegistryEntry};
    pub use crate::state::{FieldState, State};
    pub use crate::store::Store;
}
