//! Built-in error kinds and their diagnostic strings.
//!
//! Each kind is a stateless marker whose `message` is one fixed
//! `&'static str`. The accessors touch no mutable state, never fail, and
//! are callable from any thread without synchronization.

use core::fmt;

macro_rules! error_kinds {
    ( $( $(#[$meta:meta])* $name:ident => $message:expr ),* $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $name;

            impl $name {
                /// The fixed diagnostic string for this error kind.
                pub const fn message(&self) -> &'static str {
                    $message
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.message())
                }
            }

            #[cfg(feature = "std")]
            impl std::error::Error for $name {}
        )*
    };
}

error_kinds! {
    /// A shared handle was requested through an already-expired weak
    /// handle.
    BadWeakRef => "bad weak reference",
    /// A computed array allocation length was negative, overflowing, or
    /// otherwise unrepresentable.
    BadArrayLength => "bad array length",
    /// A checked dynamic cast reached an incompatible type.
    BadCast => "bad cast",
}
