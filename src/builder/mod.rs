//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders, helpers and a key-declaring macro
//! for assembling machines with minimal boilerplate. The builders are the
//! crate's only configuration surface.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use state::StateBuilder;

use crate::core::{ConstructionError, State, StateKey};

/// Create a state that always moves to `target` without touching the model.
///
/// # Example
///
/// ```
/// use keyed_fsm::builder::simple_state;
///
/// let state = simple_state::<_, (), ()>("start", "end").unwrap();
/// assert_eq!(state.execute(&mut (), &()), "end");
/// ```
pub fn simple_state<K, M, I>(key: K, target: K) -> Result<State<K, M, I>, ConstructionError>
where
    K: StateKey + Send + Sync + 'static,
{
    StateBuilder::new().key(key).goes_to(target).build()
}

/// Create a state that never leaves itself.
///
/// Every `execute` in a terminal state is a self-loop.
///
/// # Example
///
/// ```
/// use keyed_fsm::builder::terminal_state;
///
/// let state = terminal_state::<_, (), ()>(3u8).unwrap();
/// assert_eq!(state.execute(&mut (), &()), 3);
/// ```
pub fn terminal_state<K, M, I>(key: K) -> Result<State<K, M, I>, ConstructionError>
where
    K: StateKey + Send + Sync + 'static,
{
    simple_state(key.clone(), key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_state_builds() {
        let state = simple_state::<_, i32, ()>("start", "middle").unwrap();
        let mut model = 1;

        assert_eq!(state.key(), &"start");
        assert_eq!(state.execute(&mut model, &()), "middle");
        assert_eq!(model, 1);
    }

    #[test]
    fn simple_state_rejects_sentinel() {
        let result = simple_state::<_, (), ()>(0u32, 1u32);

        assert!(matches!(result, Err(ConstructionError::InvalidKey(_))));
    }

    #[test]
    fn terminal_state_loops_on_itself() {
        let state = terminal_state::<_, (), ()>("done").unwrap();

        assert_eq!(state.execute(&mut (), &()), *state.key());
    }
}
