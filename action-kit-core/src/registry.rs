//! Named collections of action definitions

use std::fmt;

use crate::action::ActionCreator;
use crate::definition::ActionDefinition;
use crate::state::State;

/// One value in an [`ActionsRegistry`].
pub enum RegistryEntry<S = State> {
    /// A full definition; routed by the combined reducer
    Definition(ActionDefinition<S>),
    /// A bare creator without a type or update function (for example one
    /// that kicks off asynchronous work). Skipped by the combined reducer.
    Creator(ActionCreator),
}

impl<S> RegistryEntry<S> {
    /// The definition, if this entry has one
    pub fn definition(&self) -> Option<&ActionDefinition<S>> {
        match self {
            RegistryEntry::Definition(def) => Some(def),
            RegistryEntry::Creator(_) => None,
        }
    }
}

impl<S> Clone for RegistryEntry<S> {
    fn clone(&self) -> Self {
        match self {
            RegistryEntry::Definition(def) => RegistryEntry::Definition(def.clone()),
            RegistryEntry::Creator(c) => RegistryEntry::Creator(c.clone()),
        }
    }
}

impl<S> fmt::Debug for RegistryEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryEntry::Definition(def) => f.debug_tuple("Definition").field(def).finish(),
            RegistryEntry::Creator(_) => f.write_str("Creator(..)"),
        }
    }
}

impl<S> From<ActionDefinition<S>> for RegistryEntry<S> {
    fn from(def: ActionDefinition<S>) -> Self {
        RegistryEntry::Definition(def)
    }
}

impl<S> From<ActionCreator> for RegistryEntry<S> {
    fn from(creator: ActionCreator) -> Self {
        RegistryEntry::Creator(creator)
    }
}

/// An ordered mapping from caller-chosen names to entries.
///
/// Names only matter to callers; the combined reducer routes by action type.
/// Inserting an existing name replaces its entry without moving it.
pub struct ActionsRegistry<S = State> {
    entries: Vec<(String, RegistryEntry<S>)>,
}

impl<S> Default for ActionsRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for ActionsRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<S> fmt::Debug for ActionsRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, entry)| (name, entry)))
            .finish()
    }
}

impl<S> ActionsRegistry<S> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace an entry, returning the previous one
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        entry: impl Into<RegistryEntry<S>>,
    ) -> Option<RegistryEntry<S>> {
        let name = name.into();
        let entry = entry.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, entry)),
            None => {
                self.entries.push((name, entry));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, entry: impl Into<RegistryEntry<S>>) -> Self {
        self.insert(name, entry);
        self
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&RegistryEntry<S>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entry)| entry)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegistryEntry<S>)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, N, E> FromIterator<(N, E)> for ActionsRegistry<S>
where
    N: Into<String>,
    E: Into<RegistryEntry<S>>,
{
    fn from_iter<I: IntoIterator<Item = (N, E)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, entry) in iter {
            registry.insert(name, entry);
        }
        registry
    }
}

/// Build an [`ActionsRegistry`] from `name => entry` pairs.
///
/// ```
/// use action_kit_core::{registry, ActionDefinition, ActionsRegistry, State};
///
/// let set_a = ActionDefinition::<State>::field("SET_A", "a").unwrap();
/// let set_b = ActionDefinition::<State>::field("SET_B", "b").unwrap();
///
/// let actions: ActionsRegistry = registry! {
///     set_a => set_a,
///     "set-b" => set_b,
/// };
/// assert_eq!(actions.len(), 2);
/// assert!(actions.get("set-b").is_some());
/// ```
#[macro_export]
macro_rules! registry {
    (@name $name:ident) => {
        stringify!($name)
    };
    (@name $name:literal) => {
        $name
    };
    () => {
        $crate::ActionsRegistry::new()
    };
    ($($name:tt => $entry:expr),+ $(,)?) => {{
        let mut registry = $crate::ActionsRegistry::new();
        $(
            registry.insert($crate::registry!(@name $name), $entry);
        )+
        registry
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{creator, Action};

    fn def(action_type: &str) -> ActionDefinition {
        ActionDefinition::field(action_type, "value").unwrap()
    }

    #[test]
    fn test_insert_preserves_order() {
        let registry = ActionsRegistry::new()
            .with("b", def("B"))
            .with("a", def("A"))
            .with("c", creator(|_| Action::new("PLAIN")));

        let names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut registry = ActionsRegistry::new().with("a", def("A")).with("b", def("B"));

        let previous = registry.insert("a", def("A2"));
        assert_eq!(
            previous.and_then(|e| e.definition().map(|d| d.action_type().to_string())),
            Some("A".to_string())
        );

        let types: Vec<_> = registry
            .iter()
            .filter_map(|(_, e)| e.definition().map(|d| d.action_type().to_string()))
            .collect();
        assert_eq!(types, vec!["A2", "B"]);
    }

    #[test]
    fn test_creator_entries_have_no_definition() {
        let registry: ActionsRegistry = ActionsRegistry::new().with("c", creator(|_| Action::new("X")));
        assert!(registry.get("c").unwrap().definition().is_none());
    }

    #[test]
    fn test_registry_macro() {
        let registry: ActionsRegistry = registry! {
            a => def("A"),
            "b" => def("B"),
        };
        let names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);

        let empty: ActionsRegistry = registry! {};
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let registry: ActionsRegistry = [("a", def("A")), ("b", def("B"))].into_iter().collect();
        assert_eq!(registry.len(), 2);
    }
}
