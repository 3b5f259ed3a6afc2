//! The `StateKey` contract for state identifiers.
//!
//! A key only has to be comparable and hashable; the machine never inspects
//! it beyond equality and `is_valid`.

use std::borrow::Cow;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifier of a state within a machine.
///
/// # Required Traits
///
/// - `Clone`: keys are returned from `execute` and stored as the current pointer
/// - `Eq` + `Hash`: keys index the state registry
/// - `Debug` + `Display`: keys appear in errors and diagnostics
///
/// # Sentinel values
///
/// Some key types reserve a value that never names a real state. For strings
/// this is the empty string, for integers it is `0`. `is_valid` returns
/// `false` for those values and `State` construction rejects them.
///
/// # Example
///
/// ```rust
/// use keyed_fsm::core::StateKey;
///
/// assert!("idle".is_valid());
/// assert!(!"".is_valid());
/// assert!(7u32.is_valid());
/// assert!(!0i32.is_valid());
/// ```
pub trait StateKey: Clone + Eq + Hash + Debug + Display {
    /// Check whether this value may be used as the key of a registered state.
    ///
    /// Default implementation returns `true`.
    fn is_valid(&self) -> bool {
        true
    }
}

impl StateKey for String {
    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl StateKey for &'static str {
    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl StateKey for Cow<'static, str> {
    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! integer_state_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StateKey for $ty {
                fn is_valid(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

integer_state_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
