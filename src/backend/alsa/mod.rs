use std::ffi::CString;

use ::alsa::seq::{ClientIter, PortCap, PortInfo as SeqPortInfo, PortIter, PortType, Seq};
use ::alsa::Direction;

use log::trace;

use crate::errors::*;

pub const API_NAME: &str = "ALSA";

fn open_sequencer(client_name: &str, direction: Direction) -> Result<Seq, InitError> {
    let seq = Seq::open(None, Some(direction), true).map_err(|err| {
        InitError::with_detail(format!("error creating ALSA sequencer client object: {}", err))
    })?;
    let c_client_name = CString::new(client_name)
        .map_err(|_| InitError::with_detail("client name contains a NUL byte"))?;
    seq.set_client_name(&c_client_name)
        .map_err(|err| InitError::with_detail(format!("error setting ALSA client name: {}", err)))?;
    Ok(seq)
}

/// Collects the MIDI ports of all clients (except the system client 0) that
/// offer every bit of `capability`.
fn get_ports(seq: &Seq, capability: PortCap) -> Vec<SeqPortInfo> {
    ClientIter::new(seq)
        .map(|cinfo| cinfo.get_client())
        .filter(|&client| client != 0)
        .flat_map(|client| PortIter::new(seq, client))
        .filter(|pinfo| {
            pinfo
                .get_type()
                .intersects(PortType::MIDI_GENERIC | PortType::SYNTH | PortType::APPLICATION)
        })
        .filter(|pinfo| pinfo.get_capability().contains(capability))
        .collect()
}

fn get_port_name(seq: &Seq, capability: PortCap, port_number: usize) -> Result<String, PortInfoError> {
    let ports = get_ports(seq, capability);
    let pinfo = ports.get(port_number).ok_or(PortInfoError::PortNumberOutOfRange)?;
    let client = pinfo.get_client();
    let cinfo = seq
        .get_any_client_info(client)
        .map_err(|_| PortInfoError::CannotRetrievePortName)?;
    let client_name = cinfo.get_name().map_err(|_| PortInfoError::CannotRetrievePortName)?;
    let port_name = pinfo.get_name().map_err(|_| PortInfoError::CannotRetrievePortName)?;
    // client and port ids keep identically named devices apart
    Ok(format!("{}:{} {}:{}", client_name, port_name, client, pinfo.get_port()))
}

pub struct MidiInput {
    seq: Seq,
}

impl MidiInput {
    pub fn new(client_name: &str) -> Result<Self, InitError> {
        let seq = open_sequencer(client_name, Direction::Capture)?;
        Ok(MidiInput { seq })
    }

    pub fn port_count(&self) -> usize {
        let count = get_ports(&self.seq, PortCap::READ | PortCap::SUBS_READ).len();
        trace!("ALSA reports {} readable ports", count);
        count
    }

    pub fn port_name(&self, port_number: usize) -> Result<String, PortInfoError> {
        get_port_name(&self.seq, PortCap::READ | PortCap::SUBS_READ, port_number)
    }
}

pub struct MidiOutput {
    seq: Seq,
}

impl MidiOutput {
    pub fn new(client_name: &str) -> Result<Self, InitError> {
        let seq = open_sequencer(client_name, Direction::Playback)?;
        Ok(MidiOutput { seq })
    }

    pub fn port_count(&self) -> usize {
        let count = get_ports(&self.seq, PortCap::WRITE | PortCap::SUBS_WRITE).len();
        trace!("ALSA reports {} writable ports", count);
        count
    }

    pub fn port_name(&self, port_number: usize) -> Result<String, PortInfoError> {
        get_port_name(&self.seq, PortCap::WRITE | PortCap::SUBS_WRITE, port_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Needs a sequencer (/dev/snd/seq); skipped where there is none.
    #[test]
    fn port_names_end_with_client_and_port_ids() {
        let input = match MidiInput::new("midibind alsa test") {
            Ok(input) => input,
            Err(_) => return,
        };
        let ports = get_ports(&input.seq, PortCap::READ | PortCap::SUBS_READ);
        assert_eq!(ports.len(), input.port_count());
        for (i, pinfo) in ports.iter().enumerate() {
            let name = input.port_name(i).unwrap();
            let ids = format!(" {}:{}", pinfo.get_client(), pinfo.get_port());
            assert!(name.ends_with(&ids), "{:?} lacks {:?}", name, ids);
        }
        assert_eq!(input.port_name(ports.len()), Err(PortInfoError::PortNumberOutOfRange));
    }
}
