//! A compilable but non-functional API, used where no platform backend is
//! built in. It allocates fine and reports no ports.

use log::warn;

use crate::errors::*;

pub const API_NAME: &str = "Dummy";

pub struct MidiInput {
    _priv: (),
}

impl MidiInput {
    pub fn new(client_name: &str) -> Result<Self, InitError> {
        warn!("no MIDI API compiled in, \"{}\" will not see any ports", client_name);
        Ok(MidiInput { _priv: () })
    }

    pub fn port_count(&self) -> usize {
        0
    }

    pub fn port_name(&self, _port_number: usize) -> Result<String, PortInfoError> {
        Err(PortInfoError::PortNumberOutOfRange)
    }
}

pub struct MidiOutput {
    _priv: (),
}

impl MidiOutput {
    pub fn new(client_name: &str) -> Result<Self, InitError> {
        warn!("no MIDI API compiled in, \"{}\" will not see any ports", client_name);
        Ok(MidiOutput { _priv: () })
    }

    pub fn port_count(&self) -> usize {
        0
    }

    pub fn port_name(&self, _port_number: usize) -> Result<String, PortInfoError> {
        Err(PortInfoError::PortNumberOutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_reports_no_ports() {
        let input = MidiInput::new("dummy in").unwrap();
        assert_eq!(input.port_count(), 0);
        assert_eq!(input.port_name(0), Err(PortInfoError::PortNumberOutOfRange));

        let output = MidiOutput::new("dummy out").unwrap();
        assert_eq!(output.port_count(), 0);
        assert_eq!(output.port_name(3), Err(PortInfoError::PortNumberOutOfRange));
    }
}
