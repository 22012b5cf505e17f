use crate::errors::*;

/// Port enumeration on an allocated MIDI client.
///
/// This is the whole surface the wrapper objects forward to. Both queries go
/// to the underlying library on every call; nothing is cached.
pub trait PortInfo {
    fn port_count(&self) -> usize;
    fn port_name(&self, port_number: usize) -> Result<String, PortInfoError>;
}
