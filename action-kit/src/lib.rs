//! action-kit: less boilerplate for Redux-style actions and reducers
//!
//! Declare each action once, with its type label and the update it performs,
//! then combine the declarations into a single reducer that routes by type.
//!
//! # Example
//! ```
//! use action_kit::prelude::*;
//! use serde_json::json;
//!
//! let actions = registry! {
//!     set_name => ActionDefinition::<State>::field("SET_NAME", "name").unwrap(),
//!     clear_name => ActionDefinition::<State>::field("CLEAR_NAME", "name").unwrap(),
//! };
//! let reducer = combine(&actions);
//!
//! let state = State::try_from(json!({ "name": "Bob" })).unwrap();
//! let next = reducer
//!     .reduce(&state, &Action::with_payload("SET_NAME", "Alice"))
//!     .unwrap();
//! assert_eq!(next.get("name"), Some(&json!("Alice")));
//! ```

// Re-export everything from core
pub use action_kit_core::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use action_kit_core::prelude::*;

    // Test helpers
    pub use action_kit_core::testing::ReducerHarness;
}
