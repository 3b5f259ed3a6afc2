//! keyed-fsm: a generic keyed finite state machine
//!
//! A machine is a registry of states indexed by key plus a pointer to the
//! current state. Each call to `execute` runs the current state's action
//! against a caller-owned model and an input, then moves to whichever state
//! the action named.
//!
//! # Core Concepts
//!
//! - **StateKey**: any `Clone + Eq + Hash + Debug + Display` identifier
//! - **Action**: `Fn(&mut Model, &Input) -> Key`, or any `Action` implementation
//! - **State**: an immutable key, optional name and action
//! - **StateMachine**: owns its states, borrows the model per call
//!
//! The machine behaves like a Mealy transducer: the next key is a function of
//! the current state, the model and the input. If an action returns a key
//! that is not registered, `execute` fails and the machine stays put, but the
//! action's changes to the model are not undone.
//!
//! # Logging
//!
//! Registration and rejected transitions are reported at `debug` level and
//! every step at `trace` level through `tracing`. No subscriber is installed.
//!
//! # Example
//!
//! ```rust
//! use keyed_fsm::{State, StateMachine};
//!
//! struct Model {
//!     value: i32,
//! }
//!
//! let mut machine = StateMachine::new("test");
//! for (key, next) in [("state1", "state2"), ("state2", "state3"), ("state3", "state1")] {
//!     let state = State::new(key, move |model: &mut Model, input: &i32| {
//!         model.value = *input;
//!         next
//!     })
//!     .unwrap();
//!     machine.add_state(state).unwrap();
//! }
//!
//! let mut model = Model { value: 0 };
//! assert_eq!(machine.execute(&mut model, &10).unwrap(), "state2");
//! assert_eq!(model.value, 10);
//! assert_eq!(machine.to_string(), "name: test , states: 3");
//! ```

pub mod builder;
pub mod core;
pub mod machine;

#[doc(hidden)]
pub use serde;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateBuilder, StateMachineBuilder};
pub use crate::core::{Action, ConstructionError, State, StateKey};
pub use crate::machine::{MachineError, MachineSummary, StateMachine};
