//! State machine that owns a registry of states and drives a model.

use crate::core::{State, StateKey};
use crate::machine::error::MachineError;
use crate::machine::summary::{MachineSummary, StateSummary};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Registry of states plus a pointer to the current one.
///
/// The machine owns its states; the model is owned by the caller and is
/// borrowed mutably only for the duration of one `execute` call.
///
/// # Invariants
///
/// - Keys are unique within the registry.
/// - The current key, when set, always names a registered state.
/// - The first state added becomes current until `set_initial_state` says otherwise.
///
/// # Example
///
/// ```rust
/// use keyed_fsm::{State, StateMachine};
///
/// struct Light {
///     switches: u32,
/// }
///
/// let mut machine = StateMachine::new("light");
/// machine
///     .add_state(State::new("off", |m: &mut Light, _: &()| {
///         m.switches += 1;
///         "on"
///     }).unwrap())
///     .unwrap();
/// machine
///     .add_state(State::new("on", |m: &mut Light, _: &()| {
///         m.switches += 1;
///         "off"
///     }).unwrap())
///     .unwrap();
///
/// let mut light = Light { switches: 0 };
/// assert_eq!(machine.execute(&mut light, &()).unwrap(), "on");
/// assert_eq!(machine.execute(&mut light, &()).unwrap(), "off");
/// assert_eq!(light.switches, 2);
/// ```
pub struct StateMachine<K: StateKey, M, I> {
    name: String,
    states: HashMap<K, State<K, M, I>>,
    order: Vec<K>,
    current: Option<K>,
}

impl<K: StateKey, M, I> StateMachine<K, M, I> {
    /// Create an empty machine with no current state.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name, 0)
    }

    /// Create an empty machine with room for `capacity` states.
    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            states: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            current: None,
        }
    }

    /// Get the machine's name (pure)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a state under its key.
    ///
    /// A state added to an empty machine becomes the current state. On a
    /// duplicate key the new state is dropped and nothing changes.
    pub fn add_state(&mut self, state: State<K, M, I>) -> Result<(), MachineError<K>> {
        let key = state.key().clone();
        if self.states.contains_key(&key) {
            return Err(MachineError::Duplicate {
                machine: self.name.clone(),
                key,
            });
        }

        debug!(machine = %self.name, state = %state, "registered state");
        self.states.insert(key.clone(), state);
        self.order.push(key.clone());

        if self.current.is_none() {
            debug!(machine = %self.name, state = %key, "initial state set");
            self.current = Some(key);
        }

        Ok(())
    }

    /// Make the state registered under `key` the current state.
    ///
    /// On failure the current state is unchanged.
    pub fn set_initial_state(&mut self, key: &K) -> Result<(), MachineError<K>> {
        if !self.states.contains_key(key) {
            return Err(self.unknown(key.clone()));
        }

        debug!(machine = %self.name, state = %key, "initial state set");
        self.current = Some(key.clone());
        Ok(())
    }

    /// Remove and return the state registered under `key`.
    ///
    /// Removing the current state makes the earliest registered remaining
    /// state current. Only removing the last state leaves the machine without
    /// a current state.
    pub fn remove_state(&mut self, key: &K) -> Result<State<K, M, I>, MachineError<K>> {
        let state = self
            .states
            .remove(key)
            .ok_or_else(|| self.unknown(key.clone()))?;

        self.order.retain(|k| k != key);
        if self.current.as_ref() == Some(key) {
            self.current = self.order.first().cloned();
            debug!(
                machine = %self.name,
                removed = %key,
                current = ?self.current,
                "current state removed"
            );
        }

        Ok(state)
    }

    /// Execute one step of the machine.
    ///
    /// Runs the current state's action against `model` and `input`, then moves
    /// to the state whose key the action returned. A returned key equal to the
    /// current key is a self-loop and skips the registry lookup.
    ///
    /// # Errors
    ///
    /// - `NotInitialized` if there is no current state. The action is not run.
    /// - `Unknown` if the returned key is not registered. The machine stays in
    ///   its current state, but the action has already run and its mutation of
    ///   `model` is not rolled back.
    ///
    /// # Reentrancy
    ///
    /// An action must not drive the machine that is executing it. `&mut self`
    /// rules this out for a directly owned machine, but an action that captures
    /// a shared handle (an `Arc<Mutex<StateMachine<..>>>`, say) and calls
    /// `execute` through it deadlocks or panics on the lock.
    pub fn execute(&mut self, model: &mut M, input: &I) -> Result<K, MachineError<K>> {
        let current = self.current_state().ok_or_else(|| MachineError::NotInitialized {
            machine: self.name.clone(),
        })?;

        let next = current.execute(model, input);

        if &next == current.key() {
            trace!(machine = %self.name, state = %next, "self-loop");
            return Ok(next);
        }

        if !self.states.contains_key(&next) {
            debug!(
                machine = %self.name,
                from = %current.key(),
                to = %next,
                "transition rejected: unknown target"
            );
            return Err(self.unknown(next));
        }

        trace!(machine = %self.name, from = %current.key(), to = %next, "transition");
        self.current = Some(next.clone());
        Ok(next)
    }

    /// Feed every input through `execute` in order.
    ///
    /// Returns the key produced by each step. Stops at the first error; the
    /// steps before it have taken effect.
    pub fn run<It>(&mut self, model: &mut M, inputs: It) -> Result<Vec<K>, MachineError<K>>
    where
        It: IntoIterator,
        It::Item: Borrow<I>,
    {
        inputs
            .into_iter()
            .map(|input| self.execute(model, Borrow::<I>::borrow(&input)))
            .collect()
    }

    /// Get the current state, if one is set (pure)
    pub fn current_state(&self) -> Option<&State<K, M, I>> {
        self.current.as_ref().and_then(|key| self.states.get(key))
    }

    /// Get the current state's key, if one is set (pure)
    pub fn current_key(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Read-only view of the registry (pure)
    pub fn states(&self) -> &HashMap<K, State<K, M, I>> {
        &self.states
    }

    /// Look up a registered state (pure)
    pub fn get_state(&self, key: &K) -> Option<&State<K, M, I>> {
        self.states.get(key)
    }

    pub fn contains_state(&self, key: &K) -> bool {
        self.states.contains_key(key)
    }

    /// Keys in registration order (pure)
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Snapshot of the machine for diagnostics.
    pub fn summary(&self) -> MachineSummary<K> {
        MachineSummary {
            name: self.name.clone(),
            state_count: self.states.len(),
            current: self.current.clone(),
            states: self
                .order
                .iter()
                .filter_map(|key| self.states.get(key))
                .map(|state| StateSummary {
                    key: state.key().clone(),
                    name: state.name().map(str::to_string),
                })
                .collect(),
        }
    }

    fn unknown(&self, key: K) -> MachineError<K> {
        MachineError::Unknown {
            machine: self.name.clone(),
            key,
        }
    }
}

impl<K: StateKey, M, I> fmt::Display for StateMachine<K, M, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {} , states: {}", self.name, self.states.len())
    }
}

impl<K: StateKey, M, I> fmt::Debug for StateMachine<K, M, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("name", &self.name)
            .field("states", &self.order)
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct TestModel {
        value: i32,
        calls: usize,
    }

    type TestMachine = StateMachine<&'static str, TestModel, i32>;

    fn goto(key: &'static str, target: &'static str) -> State<&'static str, TestModel, i32> {
        State::new(key, move |model: &mut TestModel, input: &i32| {
            model.value = *input;
            model.calls += 1;
            target
        })
        .unwrap()
    }

    #[test]
    fn new_machine_is_empty() {
        let machine = TestMachine::new("test");

        assert_eq!(machine.name(), "test");
        assert!(machine.is_empty());
        assert!(machine.current_state().is_none());
        assert!(machine.current_key().is_none());
    }

    #[test]
    fn first_added_state_becomes_current() {
        let mut machine = TestMachine::new("test");

        machine.add_state(goto("state1", "state2")).unwrap();
        machine.add_state(goto("state2", "state1")).unwrap();

        assert_eq!(machine.current_key(), Some(&"state1"));
        assert_eq!(machine.len(), 2);
    }

    #[test]
    fn duplicate_key_is_rejected_and_registry_untouched() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("state1", "state1")).unwrap();

        let err = machine.add_state(goto("state1", "elsewhere")).unwrap_err();

        assert_eq!(
            err,
            MachineError::Duplicate {
                machine: "test".to_string(),
                key: "state1"
            }
        );
        assert_eq!(machine.len(), 1);
        assert_eq!(machine.current_key(), Some(&"state1"));

        // the first action is still registered
        let mut model = TestModel::default();
        assert_eq!(machine.execute(&mut model, &1).unwrap(), "state1");
    }

    #[test]
    fn set_initial_state_overrides_first() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("state1", "state2")).unwrap();
        machine.add_state(goto("state2", "state1")).unwrap();

        machine.set_initial_state(&"state2").unwrap();

        assert_eq!(machine.current_key(), Some(&"state2"));
        assert_eq!(machine.current_state().unwrap().key(), &"state2");
    }

    #[test]
    fn set_initial_state_unknown_leaves_current() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("state1", "state2")).unwrap();

        let err = machine.set_initial_state(&"missing").unwrap_err();

        assert!(err.is_unknown());
        assert_eq!(machine.current_key(), Some(&"state1"));
    }

    #[test]
    fn execute_without_states_fails() {
        let mut machine = TestMachine::new("test");
        let mut model = TestModel::default();

        let err = machine.execute(&mut model, &1).unwrap_err();

        assert!(err.is_not_initialized());
        assert_eq!(model.calls, 0);
    }

    #[test]
    fn execute_moves_to_returned_state() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("state1", "state2")).unwrap();
        machine.add_state(goto("state2", "state1")).unwrap();
        let mut model = TestModel::default();

        assert_eq!(machine.execute(&mut model, &5).unwrap(), "state2");
        assert_eq!(machine.current_key(), Some(&"state2"));
        assert_eq!(model.value, 5);
    }

    #[test]
    fn self_loop_keeps_current_and_mutates_model() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("state1", "state1")).unwrap();
        let mut model = TestModel::default();

        assert_eq!(machine.execute(&mut model, &9).unwrap(), "state1");
        assert_eq!(machine.current_key(), Some(&"state1"));
        assert_eq!(model.value, 9);
    }

    #[test]
    fn unknown_target_keeps_current_but_not_model() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("state1", "nowhere")).unwrap();
        let mut model = TestModel::default();

        let err = machine.execute(&mut model, &7).unwrap_err();

        assert!(err.is_unknown());
        assert_eq!(err.key(), Some(&"nowhere"));
        assert_eq!(machine.current_key(), Some(&"state1"));
        // action already ran
        assert_eq!(model.value, 7);
        assert_eq!(model.calls, 1);
    }

    #[test]
    fn remove_state_returns_it() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("state1", "state2")).unwrap();
        machine.add_state(goto("state2", "state1")).unwrap();

        let removed = machine.remove_state(&"state2").unwrap();

        assert_eq!(removed.key(), &"state2");
        assert!(!machine.contains_state(&"state2"));
        assert_eq!(machine.keys().collect::<Vec<_>>(), vec![&"state1"]);
        assert_eq!(machine.current_key(), Some(&"state1"));
    }

    #[test]
    fn removing_current_state_moves_to_first_remaining() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("state1", "state2")).unwrap();
        machine.add_state(goto("state2", "state1")).unwrap();
        machine.add_state(goto("state3", "state3")).unwrap();
        let mut model = TestModel::default();

        machine.remove_state(&"state1").unwrap();

        assert_eq!(machine.len(), 2);
        assert_eq!(machine.current_key(), Some(&"state2"));
        // state2 still targets the removed state1
        let err = machine.execute(&mut model, &4).unwrap_err();
        assert_eq!(err.key(), Some(&"state1"));
        assert_eq!(machine.current_key(), Some(&"state2"));

        machine.add_state(goto("state4", "state4")).unwrap();
        assert_eq!(machine.current_key(), Some(&"state2"));
    }

    #[test]
    fn removing_only_state_clears_current() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("state1", "state1")).unwrap();
        let mut model = TestModel::default();

        machine.remove_state(&"state1").unwrap();

        assert!(machine.current_key().is_none());
        assert!(machine
            .execute(&mut model, &1)
            .unwrap_err()
            .is_not_initialized());
    }

    #[test]
    fn remove_unknown_state_fails() {
        let mut machine = TestMachine::new("test");

        assert!(machine.remove_state(&"state1").unwrap_err().is_unknown());
    }

    #[test]
    fn run_collects_keys_until_error() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("state1", "state2")).unwrap();
        machine.add_state(goto("state2", "state3")).unwrap();
        let mut model = TestModel::default();

        let err = machine.run(&mut model, [1, 2, 3]).unwrap_err();

        assert_eq!(err.key(), Some(&"state3"));
        assert_eq!(machine.current_key(), Some(&"state2"));
        assert_eq!(model.value, 2);
        assert_eq!(model.calls, 2);
    }

    #[test]
    fn run_accepts_borrowed_inputs() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("state1", "state2")).unwrap();
        machine.add_state(goto("state2", "state1")).unwrap();
        let inputs = vec![1, 2, 3];
        let mut model = TestModel::default();

        let keys = machine.run(&mut model, &inputs).unwrap();

        assert_eq!(keys, vec!["state2", "state1", "state2"]);
        assert_eq!(model.value, 3);
    }

    #[test]
    fn display_reports_name_and_count() {
        let mut machine = TestMachine::new("test");
        assert_eq!(machine.to_string(), "name: test , states: 0");

        machine.add_state(goto("state1", "state1")).unwrap();
        assert_eq!(machine.to_string(), "name: test , states: 1");
    }

    #[test]
    fn summary_lists_states_in_registration_order() {
        let mut machine = TestMachine::new("test");
        machine.add_state(goto("b", "a")).unwrap();
        machine
            .add_state(State::named("a", "Alpha", |_: &mut TestModel, _: &i32| "b").unwrap())
            .unwrap();

        let summary = machine.summary();

        assert_eq!(summary.name, "test");
        assert_eq!(summary.state_count, 2);
        assert_eq!(summary.current, Some("b"));
        assert_eq!(summary.states[0].key, "b");
        assert_eq!(summary.states[1].name.as_deref(), Some("Alpha"));
    }

    #[test]
    fn machine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TestMachine>();
    }
}
