//! The state machine: a registry of states and the `execute` loop.
//!
//! # Key Concepts
//!
//! - **Registry**: states are owned by the machine and indexed by key
//! - **Current state**: the state whose action runs on the next `execute`
//! - **Explicit context**: the model is passed to each `execute` call, never stored
//!
//! # Failed transitions
//!
//! An action runs before its result is validated. If it names a key that is
//! not registered, `execute` returns `MachineError::Unknown` and the machine
//! stays where it was, but whatever the action did to the model stays done.
//! The model belongs to the caller and the machine cannot see inside it.
//!
//! # Threads
//!
//! A machine is `Send + Sync` when its key type is, but it does no locking.
//! Share one across threads behind a `Mutex` held around the whole
//! register/execute sequence.

mod error;
mod state_machine;
mod summary;

pub use error::MachineError;
pub use state_machine::StateMachine;
pub use summary::{MachineSummary, StateSummary};
