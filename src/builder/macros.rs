//! Macros for ergonomic key declaration.

/// Declare a fieldless enum usable as a `StateKey`.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` and `Debug`,
/// serializes as its variant name through this crate's `serde` re-export (so
/// callers need no `serde` dependency of their own), displays as its variant
/// name, and implements `StateKey`. Variants listed under `invalid` are
/// sentinels that can never name a state.
///
/// # Example
///
/// ```
/// use keyed_fsm::core::StateKey;
/// use keyed_fsm::state_keys;
///
/// state_keys! {
///     pub enum Door {
///         Invalid,
///         Open,
///         Closed,
///         Locked,
///     }
///     invalid: [Invalid]
/// }
///
/// assert_eq!(Door::Locked.to_string(), "Locked");
/// assert!(Door::Open.is_valid());
/// assert!(!Door::Invalid.is_valid());
/// ```
#[macro_export]
macro_rules! state_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(invalid: [$($invalid:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => stringify!($variant)),*
                })
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_unit_variant(
                    stringify!($name),
                    *self as u32,
                    match self {
                        $(Self::$variant => stringify!($variant)),*
                    },
                )
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                const VARIANTS: &[&str] = &[$(stringify!($variant)),*];

                let name = <::std::string::String as $crate::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                match name.as_str() {
                    $(stringify!($variant) => ::std::result::Result::Ok(Self::$variant),)*
                    other => ::std::result::Result::Err(
                        <D::Error as $crate::serde::de::Error>::unknown_variant(other, VARIANTS),
                    ),
                }
            }
        }

        impl $crate::core::StateKey for $name {
            #[allow(unreachable_patterns)]
            fn is_valid(&self) -> bool {
                match self {
                    $($(Self::$invalid => false,)*)?
                    _ => true,
                }
            }
        }
    };
}
