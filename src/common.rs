use crate::backend::{MidiInput as MidiInputImpl, MidiOutput as MidiOutputImpl, API_NAME};
use crate::errors::*;
use crate::traits::PortInfo;

/// Client name used for input objects created through the host module.
pub const DEFAULT_INPUT_CLIENT_NAME: &str = "RtMidi Input Client";
/// Client name used for output objects created through the host module.
pub const DEFAULT_OUTPUT_CLIENT_NAME: &str = "RtMidi Output Client";

/// Name of the MIDI API this crate was compiled against.
pub fn api_name() -> &'static str {
    API_NAME
}

/// An instance of `MidiInput` is required for enumerating MIDI input sources.
pub struct MidiInput {
    imp: MidiInputImpl,
}

impl MidiInput {
    /// Creates a new `MidiInput` object for the system MIDI API.
    pub fn new(client_name: &str) -> Result<Self, InitError> {
        MidiInputImpl::new(client_name).map(|imp| MidiInput { imp })
    }

    /// Get the number of available MIDI input ports.
    pub fn port_count(&self) -> usize {
        self.imp.port_count()
    }

    /// Get the name of the input port with the given index.
    pub fn port_name(&self, port_number: usize) -> Result<String, PortInfoError> {
        self.imp.port_name(port_number)
    }
}

impl PortInfo for MidiInput {
    fn port_count(&self) -> usize {
        MidiInput::port_count(self)
    }

    fn port_name(&self, port_number: usize) -> Result<String, PortInfoError> {
        MidiInput::port_name(self, port_number)
    }
}

/// An instance of `MidiOutput` is required for enumerating MIDI output destinations.
pub struct MidiOutput {
    imp: MidiOutputImpl,
}

impl MidiOutput {
    /// Creates a new `MidiOutput` object for the system MIDI API.
    pub fn new(client_name: &str) -> Result<Self, InitError> {
        MidiOutputImpl::new(client_name).map(|imp| MidiOutput { imp })
    }

    /// Get the number of available MIDI output ports.
    pub fn port_count(&self) -> usize {
        self.imp.port_count()
    }

    /// Get the name of the output port with the given index.
    pub fn port_name(&self, port_number: usize) -> Result<String, PortInfoError> {
        self.imp.port_name(port_number)
    }
}

impl PortInfo for MidiOutput {
    fn port_count(&self) -> usize {
        MidiOutput::port_count(self)
    }

    fn port_name(&self, port_number: usize) -> Result<String, PortInfoError> {
        MidiOutput::port_name(self, port_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Works on any machine: the system may report zero ports.
    fn check_consistent<P: PortInfo>(resource: &P) {
        let count = resource.port_count();
        for i in 0..count {
            let name = resource.port_name(i).expect("listed port has a name");
            assert!(!name.is_empty());
        }
        assert_eq!(resource.port_name(count), Err(PortInfoError::PortNumberOutOfRange));
    }

    #[test]
    fn system_input_ports_are_consistent() {
        if let Ok(input) = MidiInput::new("midibind test input") {
            check_consistent(&input);
        }
    }

    #[test]
    fn system_output_ports_are_consistent() {
        if let Ok(output) = MidiOutput::new("midibind test output") {
            check_consistent(&output);
        }
    }

    #[test]
    fn api_name_is_known() {
        assert!(["ALSA", "CoreMIDI", "WinMM", "Dummy"].contains(&api_name()));
    }

    #[test]
    #[cfg(all(target_os = "linux", feature = "alsa"))]
    fn linux_defaults_to_alsa() {
        assert_eq!(api_name(), "ALSA");
    }
}
