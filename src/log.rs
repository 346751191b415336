//! Diagnostics shim: the `log` facade when the `log` feature is enabled,
//! no-op macros otherwise so bare-metal builds carry no logging code.

#[cfg(feature = "log")]
pub(crate) use ::log::{debug, trace};

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __debug {
    ($($arg:tt)+) => {};
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __trace {
    ($($arg:tt)+) => {};
}

// #[macro_export] always puts macros at the crate root; the aliased
// re-export namespaces them under this module.
#[cfg(not(feature = "log"))]
pub(crate) use crate::{__debug as debug, __trace as trace};
