//! Build errors for state and machine builders.

use crate::core::{ConstructionError, StateKey};
use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError<K: StateKey + 'static> {
    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("Invalid state: {0}")]
    State(#[from] ConstructionError),

    /// Duplicate key among the added states, or an initial key that was never added
    #[error("Machine assembly failed: {0}")]
    Machine(#[from] MachineError<K>),
}
