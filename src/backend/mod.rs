// This module is not public

// Exactly one implementation is compiled in; the selection is static.

#[cfg(target_os = "windows")]
mod winmm;
#[cfg(target_os = "windows")]
pub(crate) use self::winmm::*;

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod coremidi;
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) use self::coremidi::*;

#[cfg(all(target_os = "linux", feature = "alsa"))]
mod alsa;
#[cfg(all(target_os = "linux", feature = "alsa"))]
pub(crate) use self::alsa::*;

#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "ios",
    all(target_os = "linux", feature = "alsa")
)))]
mod dummy;
#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "ios",
    all(target_os = "linux", feature = "alsa")
)))]
pub(crate) use self::dummy::*;
