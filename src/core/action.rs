//! Transition actions.
//!
//! An action is the behavior attached to a state: it mutates the model using
//! the input and names the state to move to next.

use super::key::StateKey;

/// Transition function of a state.
///
/// Implemented automatically for every closure of shape
/// `Fn(&mut M, &I) -> K`, so most callers never implement it by hand. Types
/// that carry configuration can implement it directly.
///
/// Actions take `&self`: they may not mutate the state that owns them. Any
/// failure inside an action is the caller's concern; the machine neither
/// catches nor interprets it.
///
/// # Example
///
/// ```rust
/// use keyed_fsm::core::Action;
///
/// struct Threshold(i32);
///
/// impl Action<i32, i32, &'static str> for Threshold {
///     fn execute(&self, model: &mut i32, input: &i32) -> &'static str {
///         *model += input;
///         if *model >= self.0 { "full" } else { "filling" }
///     }
/// }
///
/// let mut level = 0;
/// assert_eq!(Threshold(10).execute(&mut level, &4), "filling");
/// assert_eq!(Threshold(10).execute(&mut level, &6), "full");
/// ```
pub trait Action<M, I, K: StateKey> {
    /// Run the action and return the key of the next state.
    ///
    /// Returning the owning state's own key means "stay".
    fn execute(&self, model: &mut M, input: &I) -> K;
}

impl<M, I, K, F> Action<M, I, K> for F
where
    K: StateKey,
    F: Fn(&mut M, &I) -> K,
{
    fn execute(&self, model: &mut M, input: &I) -> K {
        self(model, input)
    }
}

/// Boxed action as stored by a `State`.
pub type BoxedAction<M, I, K> = Box<dyn Action<M, I, K> + Send + Sync>;
