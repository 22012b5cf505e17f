use ::coremidi::{Client, Destination, Destinations, Source, Sources};

use crate::errors::*;

pub const API_NAME: &str = "CoreMIDI";

fn create_client(client_name: &str) -> Result<Client, InitError> {
    Client::new(client_name)
        .map_err(|status| InitError::with_detail(format!("error creating MIDI client (OSStatus {})", status)))
}

pub struct MidiInput {
    // keeps the MIDI server session alive while ports are queried
    _client: Client,
}

impl MidiInput {
    pub fn new(client_name: &str) -> Result<Self, InitError> {
        create_client(client_name).map(|cl| MidiInput { _client: cl })
    }

    pub fn port_count(&self) -> usize {
        Sources::count()
    }

    pub fn port_name(&self, port_number: usize) -> Result<String, PortInfoError> {
        let source = Source::from_index(port_number).ok_or(PortInfoError::PortNumberOutOfRange)?;
        source.display_name().ok_or(PortInfoError::CannotRetrievePortName)
    }
}

pub struct MidiOutput {
    _client: Client,
}

impl MidiOutput {
    pub fn new(client_name: &str) -> Result<Self, InitError> {
        create_client(client_name).map(|cl| MidiOutput { _client: cl })
    }

    pub fn port_count(&self) -> usize {
        Destinations::count()
    }

    pub fn port_name(&self, port_number: usize) -> Result<String, PortInfoError> {
        let dest = Destination::from_index(port_number).ok_or(PortInfoError::PortNumberOutOfRange)?;
        dest.display_name().ok_or(PortInfoError::CannotRetrievePortName)
    }
}
