//! Host object bindings for system MIDI port enumeration.
//!
//! The crate exposes MIDI input and output clients to an embedding scripting
//! host as the classes `RtMidiIn` and `RtMidiOut`. Each host object owns
//! exactly one native MIDI client and can list the available ports:
//!
//! ```no_run
//! use midibind::host::{Exports, Value};
//!
//! let mut exports = Exports::new();
//! midibind::init(&mut exports);
//!
//! let mut midi_in = exports.construct("RtMidiIn", &[]).unwrap();
//! let count = midi_in.call("getPortCount", &[]).unwrap();
//! println!("{:?} input ports", count);
//! if count.as_index().unwrap_or(0) > 0 {
//!     println!("{:?}", midi_in.call("getPortName", &[Value::from(0)]));
//! }
//! midi_in.call("close", &[]).unwrap();
//! ```
//!
//! The native MIDI API is chosen at compile time: ALSA on Linux (default
//! `alsa` feature), CoreMIDI on macOS and iOS, WinMM on Windows. Everywhere
//! else, and on Linux with the `alsa` feature disabled, a dummy API without
//! ports is used.

mod backend;
mod common;
mod errors;
mod traits;

pub mod handle;
pub mod host;
pub mod module;
pub mod probe;
pub mod wrapper;

pub use common::*;
pub use errors::*;
pub use module::{init, register_class};
pub use traits::PortInfo;
