//! Errors raised by machine operations.

use crate::core::StateKey;
use thiserror::Error;

/// Errors that can occur when registering states or executing a machine.
///
/// Every variant carries the machine name so that errors from several
/// machines stay distinguishable once they reach a log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError<K: StateKey> {
    /// A state with this key is already registered. The registry is unchanged.
    #[error("State '{key}' already exists in machine '{machine}'")]
    Duplicate { machine: String, key: K },

    /// No state is registered under this key.
    ///
    /// When returned from `execute`, the current state is unchanged, but the
    /// action has already run: any mutation it made to the model remains.
    #[error("State '{key}' does not exist in machine '{machine}'")]
    Unknown { machine: String, key: K },

    /// `execute` was called before a current state was established.
    #[error("No current state set in machine '{machine}'")]
    NotInitialized { machine: String },
}

impl<K: StateKey> MachineError<K> {
    /// Key the error refers to, if any.
    pub fn key(&self) -> Option<&K> {
        match self {
            Self::Duplicate { key, .. } | Self::Unknown { key, .. } => Some(key),
            Self::NotInitialized { .. } => None,
        }
    }

    /// Name of the machine that raised the error.
    pub fn machine(&self) -> &str {
        match self {
            Self::Duplicate { machine, .. }
            | Self::Unknown { machine, .. }
            | Self::NotInitialized { machine } => machine,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    pub fn is_not_initialized(&self) -> bool {
        matches!(self, Self::NotInitialized { .. })
    }
}
