//! Logging front for the game core.
//!
//! The core never picks a logger itself. The firmware enables `defmt-log`,
//! the console build enables `std-log`, and tests run with neither so every
//! call compiles away.

#[cfg(feature = "defmt-log")]
pub use defmt::{debug, error, info, trace, warn};

#[cfg(feature = "std-log")]
pub use log::{debug, error, info, trace, warn};

// If no logging feature is enabled, provide no-op macros
#[cfg(not(any(feature = "defmt-log", feature = "std-log")))]
#[macro_export]
macro_rules! trace {
    ($($args:tt)*) => {};
}

#[cfg(not(any(feature = "defmt-log", feature = "std-log")))]
#[macro_export]
macro_rules! debug {
    ($($args:tt)*) => {};
}

#[cfg(not(any(feature = "defmt-log", feature = "std-log")))]
#[macro_export]
macro_rules! info {
    ($($args:tt)*) => {};
}

#[cfg(not(any(feature = "defmt-log", feature = "std-log")))]
#[macro_export]
macro_rules! warn {
    ($($args:tt)*) => {};
}

#[cfg(not(any(feature = "defmt-log", feature = "std-log")))]
#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {};
}

// The no-op set lives at the crate root; route it through this module so call
// sites read `crate::log::info!` whatever the backend is.
#[cfg(not(any(feature = "defmt-log", feature = "std-log")))]
pub use crate::{debug, error, info, trace};

// warn stays out of the re-export: the name clashes with the built-in lint attribute
