//! Serializable diagnostic snapshot of a machine.

use crate::core::StateKey;
use serde::Serialize;

/// Point-in-time view of a machine for logs and diagnostics.
///
/// A summary describes a machine; it does not contain actions and cannot be
/// turned back into one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MachineSummary<K: StateKey> {
    /// Machine name
    pub name: String,

    /// Number of registered states
    pub state_count: usize,

    /// Key of the current state, if one is set
    pub current: Option<K>,

    /// Registered states in registration order
    pub states: Vec<StateSummary<K>>,
}

/// Key and name of one registered state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateSummary<K: StateKey> {
    pub key: K,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
