//! A report of all MIDI input sources and output ports, in RtMidi's
//! `midiprobe` format.

use std::error::Error;
use std::fmt;
use std::io::{self, Write};

use crate::common::{MidiInput, MidiOutput, DEFAULT_INPUT_CLIENT_NAME, DEFAULT_OUTPUT_CLIENT_NAME};
use crate::errors::*;
use crate::traits::PortInfo;

#[derive(Debug)]
pub enum ProbeError {
    Init(InitError),
    PortInfo(PortInfoError),
    Io(io::Error),
}

impl Error for ProbeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ProbeError::Init(ref err) => Some(err),
            ProbeError::PortInfo(ref err) => Some(err),
            ProbeError::Io(ref err) => Some(err),
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ProbeError::Init(ref err) => err.fmt(f),
            ProbeError::PortInfo(ref err) => err.fmt(f),
            ProbeError::Io(ref err) => err.fmt(f),
        }
    }
}

impl From<InitError> for ProbeError {
    fn from(err: InitError) -> Self {
        ProbeError::Init(err)
    }
}

impl From<PortInfoError> for ProbeError {
    fn from(err: PortInfoError) -> Self {
        ProbeError::PortInfo(err)
    }
}

impl From<io::Error> for ProbeError {
    fn from(err: io::Error) -> Self {
        ProbeError::Io(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

impl PortDirection {
    fn header(self, count: usize) -> String {
        match self {
            PortDirection::Input => format!("There are {} MIDI input sources available.", count),
            PortDirection::Output => format!("There are {} MIDI output ports available.", count),
        }
    }

    fn port_label(self) -> &'static str {
        match self {
            PortDirection::Input => "Input",
            PortDirection::Output => "Output",
        }
    }
}

/// Writes the header and one line per port, numbered from 1.
pub fn write_port_list<P, W>(resource: &P, direction: PortDirection, out: &mut W) -> Result<(), ProbeError>
where
    P: PortInfo + ?Sized,
    W: Write,
{
    let count = resource.port_count();
    write!(out, "\n{}\n", direction.header(count))?;
    for i in 0..count {
        let name = resource.port_name(i)?;
        writeln!(out, "  {} Port #{}: {}", direction.port_label(), i + 1, name)?;
    }
    Ok(())
}

/// Lists input sources, then output ports.
///
/// The output resource is only allocated after all inputs were listed. If a
/// port name lookup fails, listing stops; every resource allocated so far is
/// released before the error is returned.
pub fn probe_with<I, O, FI, FO, W>(new_input: FI, new_output: FO, out: &mut W) -> Result<(), ProbeError>
where
    I: PortInfo,
    O: PortInfo,
    FI: FnOnce() -> Result<I, InitError>,
    FO: FnOnce() -> Result<O, InitError>,
    W: Write,
{
    let input = new_input()?;
    write_port_list(&input, PortDirection::Input, out)?;

    let output = new_output()?;
    write_port_list(&output, PortDirection::Output, out)?;
    writeln!(out)?;
    Ok(())
}

/// Runs the report against the system MIDI API.
pub fn probe<W: Write>(out: &mut W) -> Result<(), ProbeError> {
    probe_with(
        || MidiInput::new(DEFAULT_INPUT_CLIENT_NAME),
        || MidiOutput::new(DEFAULT_OUTPUT_CLIENT_NAME),
        out,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ports(Vec<&'static str>);

    impl PortInfo for Ports {
        fn port_count(&self) -> usize {
            self.0.len()
        }

        fn port_name(&self, port_number: usize) -> Result<String, PortInfoError> {
            match self.0.get(port_number) {
                Some(&"") => Err(PortInfoError::CannotRetrievePortName),
                Some(name) => Ok(name.to_string()),
                None => Err(PortInfoError::PortNumberOutOfRange),
            }
        }
    }

    #[test]
    fn report_lists_inputs_then_outputs() {
        let mut out: Vec<u8> = Vec::new();
        probe_with(
            || Ok(Ports(vec!["A", "B"])),
            || Ok(Ports(vec!["Synth"])),
            &mut out,
        )
        .unwrap();
        let expected = "\nThere are 2 MIDI input sources available.\n  Input Port #1: A\n  Input Port #2: B\n\
                        \nThere are 1 MIDI output ports available.\n  Output Port #1: Synth\n\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn empty_system_still_reports_counts() {
        let mut out: Vec<u8> = Vec::new();
        probe_with(|| Ok(Ports(vec![])), || Ok(Ports(vec![])), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nThere are 0 MIDI input sources available.\n\nThere are 0 MIDI output ports available.\n\n"
        );
    }

    #[test]
    fn failing_port_name_stops_the_report() {
        let mut out: Vec<u8> = Vec::new();
        let mut output_allocated = false;
        let err = probe_with(
            || Ok(Ports(vec!["A", ""])),
            || {
                output_allocated = true;
                Ok(Ports(vec![]))
            },
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, ProbeError::PortInfo(PortInfoError::CannotRetrievePortName)));
        assert!(!output_allocated);
        assert!(String::from_utf8(out).unwrap().ends_with("  Input Port #1: A\n"));
    }

    #[test]
    fn input_init_failure_is_reported() {
        let mut out: Vec<u8> = Vec::new();
        let err = probe_with(
            || Err::<Ports, _>(InitError::with_detail("no server")),
            || Ok(Ports(vec![])),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, ProbeError::Init(_)));
        assert!(out.is_empty());
    }
}
