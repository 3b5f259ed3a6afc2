//! Builder for constructing states.

use crate::core::{Action, BoxedAction, ConstructionError, State, StateKey};

/// Action that ignores the model and input.
struct GoesTo<K>(K);

impl<M, I, K: StateKey> Action<M, I, K> for GoesTo<K> {
    fn execute(&self, _model: &mut M, _input: &I) -> K {
        self.0.clone()
    }
}

/// Builder for constructing states with a fluent API.
///
/// Unlike `State::new`, the builder lets the key and action arrive in any
/// order, and reports a missing one as a `ConstructionError`.
pub struct StateBuilder<K: StateKey, M, I> {
    key: Option<K>,
    name: Option<String>,
    action: Option<BoxedAction<M, I, K>>,
}

impl<K: StateKey, M, I> StateBuilder<K, M, I> {
    /// Create a new state builder.
    pub fn new() -> Self {
        Self {
            key: None,
            name: None,
            action: None,
        }
    }

    /// Set the key (required).
    pub fn key(mut self, key: K) -> Self {
        self.key = Some(key);
        self
    }

    /// Set the diagnostic name (optional).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the action from a closure (required).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut M, &I) -> K + Send + Sync + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Set the action from an `Action` implementation (required).
    pub fn with_action<A>(mut self, action: A) -> Self
    where
        A: Action<M, I, K> + Send + Sync + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Set an action that leaves the model alone and always moves to `target`.
    pub fn goes_to(self, target: K) -> Self
    where
        K: Send + Sync + 'static,
    {
        self.with_action(GoesTo(target))
    }

    /// Build the state.
    pub fn build(self) -> Result<State<K, M, I>, ConstructionError> {
        let key = self.key.ok_or(ConstructionError::MissingKey)?;
        let action = self.action.ok_or(ConstructionError::MissingAction)?;

        State::from_boxed(key, self.name, action)
    }
}

impl<K: StateKey, M, I> Default for StateBuilder<K, M, I> {
    fn default() -> Self {
        Self::new()
    }
}
