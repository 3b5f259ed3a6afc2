//! Core state machine types.
//!
//! This module contains the building blocks a machine is made of:
//! - Key definitions via the `StateKey` trait
//! - Transition behavior via the `Action` trait
//! - Immutable `State` values pairing a key with an action
//!
//! Nothing in this module knows about machines; a `State` can be executed
//! on its own.

mod action;
mod error;
mod key;
mod state;

pub use action::{Action, BoxedAction};
pub use error::ConstructionError;
pub use key::StateKey;
pub use state::State;
