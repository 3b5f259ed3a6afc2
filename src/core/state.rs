//! States: a key, an optional name and a transition action.
//!
//! States are immutable once built. They hold no reference to the machine
//! they are registered in; the machine owns them.

use super::action::{Action, BoxedAction};
use super::error::ConstructionError;
use super::key::StateKey;
use std::fmt;

/// A named unit of a state machine.
///
/// A state pairs an identifying key with the action that runs while the
/// machine is in that state. The action mutates the model and returns the
/// key of the state to move to; returning the state's own key is a self-loop.
///
/// `State` is deliberately not `Clone`: registering it moves it into exactly
/// one machine.
///
/// # Example
///
/// ```rust
/// use keyed_fsm::core::State;
///
/// struct Counter {
///     value: i32,
/// }
///
/// let state = State::named("counting", "Counting", |model: &mut Counter, input: &i32| {
///     model.value += input;
///     if model.value >= 10 { "done" } else { "counting" }
/// })
/// .unwrap();
///
/// let mut model = Counter { value: 0 };
/// assert_eq!(state.execute(&mut model, &4), "counting");
/// assert_eq!(state.execute(&mut model, &6), "done");
/// assert_eq!(state.to_string(), "key: counting , name: Counting");
/// ```
pub struct State<K: StateKey, M, I> {
    key: K,
    name: Option<String>,
    action: BoxedAction<M, I, K>,
}

impl<K: StateKey, M, I> State<K, M, I> {
    /// Create an unnamed state from a closure.
    ///
    /// Fails with `ConstructionError::InvalidKey` if `key` is a sentinel value.
    pub fn new<F>(key: K, action: F) -> Result<Self, ConstructionError>
    where
        F: Fn(&mut M, &I) -> K + Send + Sync + 'static,
    {
        Self::from_boxed(key, None, Box::new(action))
    }

    /// Create a state with a diagnostic name.
    ///
    /// The name plays no part in identity. An empty name is treated as no name.
    pub fn named<F>(key: K, name: impl Into<String>, action: F) -> Result<Self, ConstructionError>
    where
        F: Fn(&mut M, &I) -> K + Send + Sync + 'static,
    {
        Self::from_boxed(key, Some(name.into()), Box::new(action))
    }

    /// Create a state from any `Action` implementation.
    pub fn from_action<A>(key: K, action: A) -> Result<Self, ConstructionError>
    where
        A: Action<M, I, K> + Send + Sync + 'static,
    {
        Self::from_boxed(key, None, Box::new(action))
    }

    pub(crate) fn from_boxed(
        key: K,
        name: Option<String>,
        action: BoxedAction<M, I, K>,
    ) -> Result<Self, ConstructionError> {
        if !key.is_valid() {
            return Err(ConstructionError::InvalidKey(key.to_string()));
        }

        Ok(Self {
            key,
            name: name.filter(|n| !n.is_empty()),
            action,
        })
    }

    /// Get the state's key (pure).
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Get the state's diagnostic name, if any (pure).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Run the action against `model` and `input`.
    ///
    /// Returns the key the machine should move to next. Whatever the action
    /// does to the model is not observed or undone by the state.
    pub fn execute(&self, model: &mut M, input: &I) -> K {
        self.action.execute(model, input)
    }
}

impl<K: StateKey, M, I> fmt::Display for State<K, M, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "key: {} , name: {}", self.key, name),
            None => write!(f, "key: {}", self.key),
        }
    }
}

impl<K: StateKey, M, I> fmt::Debug for State<K, M, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("key", &self.key)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
