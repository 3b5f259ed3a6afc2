//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{State, StateKey};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// States are registered in the order they are added, so without an explicit
/// `initial` the first one added becomes the current state.
pub struct StateMachineBuilder<K: StateKey + 'static, M, I> {
    name: String,
    initial: Option<K>,
    capacity: Option<usize>,
    states: Vec<State<K, M, I>>,
}

impl<K: StateKey + 'static, M, I> StateMachineBuilder<K, M, I> {
    /// Create a new builder for a machine called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: None,
            capacity: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (optional, defaults to the first state added).
    pub fn initial(mut self, key: K) -> Self {
        self.initial = Some(key);
        self
    }

    /// Reserve room for `capacity` states (optional).
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Add a state using a builder.
    /// Returns an error if the builder fails validation.
    pub fn state(mut self, builder: StateBuilder<K, M, I>) -> Result<Self, BuildError<K>> {
        let state = builder.build()?;
        self.states.push(state);
        Ok(self)
    }

    /// Add a state from a key and a closure.
    /// Returns an error if the key is a sentinel value.
    pub fn with_state<F>(mut self, key: K, action: F) -> Result<Self, BuildError<K>>
    where
        F: Fn(&mut M, &I) -> K + Send + Sync + 'static,
    {
        self.states.push(State::new(key, action)?);
        Ok(self)
    }

    /// Add a pre-built state.
    pub fn add_state(mut self, state: State<K, M, I>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple pre-built states at once.
    pub fn states(mut self, states: Vec<State<K, M, I>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Build the state machine.
    ///
    /// Fails if no state was added, if two states share a key, or if the
    /// initial key does not name an added state.
    pub fn build(self) -> Result<StateMachine<K, M, I>, BuildError<K>> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let capacity = self.capacity.unwrap_or(self.states.len());
        let mut machine = StateMachine::with_capacity(self.name, capacity);
        for state in self.states {
            machine.add_state(state)?;
        }

        if let Some(initial) = &self.initial {
            machine.set_initial_state(initial)?;
        }

        Ok(machine)
    }
}
