use std::mem;

use windows::Win32::Media::Audio::{
    midiInGetDevCapsW, midiInGetNumDevs, midiOutGetDevCapsW, midiOutGetNumDevs, MIDIINCAPSW,
    MIDIOUTCAPSW,
};
use windows::Win32::Media::{MMSYSERR_BADDEVICEID, MMSYSERR_NOERROR};

use crate::errors::*;

pub const API_NAME: &str = "WinMM";

// helper for string conversion
fn from_wide(name: &[u16]) -> String {
    let len = name.iter().position(|&c| c == 0).unwrap_or(name.len());
    String::from_utf16_lossy(&name[..len])
}

fn check_caps_result(result: u32) -> Result<(), PortInfoError> {
    if result == MMSYSERR_BADDEVICEID {
        Err(PortInfoError::PortNumberOutOfRange)
    } else if result != MMSYSERR_NOERROR {
        Err(PortInfoError::CannotRetrievePortName)
    } else {
        Ok(())
    }
}

/// WinMM needs no client object; port queries go straight to the driver.
pub struct MidiInput {
    _priv: (),
}

impl MidiInput {
    pub fn new(_client_name: &str) -> Result<Self, InitError> {
        Ok(MidiInput { _priv: () })
    }

    pub fn port_count(&self) -> usize {
        unsafe { midiInGetNumDevs() as usize }
    }

    pub fn port_name(&self, port_number: usize) -> Result<String, PortInfoError> {
        let mut device_caps: MIDIINCAPSW = unsafe { mem::zeroed() };
        let result = unsafe {
            midiInGetDevCapsW(
                port_number,
                &mut device_caps,
                mem::size_of::<MIDIINCAPSW>() as u32,
            )
        };
        check_caps_result(result)?;
        // copy out of the packed struct before borrowing
        let name = device_caps.szPname;
        Ok(from_wide(&name))
    }
}

pub struct MidiOutput {
    _priv: (),
}

impl MidiOutput {
    pub fn new(_client_name: &str) -> Result<Self, InitError> {
        Ok(MidiOutput { _priv: () })
    }

    pub fn port_count(&self) -> usize {
        unsafe { midiOutGetNumDevs() as usize }
    }

    pub fn port_name(&self, port_number: usize) -> Result<String, PortInfoError> {
        let mut device_caps: MIDIOUTCAPSW = unsafe { mem::zeroed() };
        let result = unsafe {
            midiOutGetDevCapsW(
                port_number,
                &mut device_caps,
                mem::size_of::<MIDIOUTCAPSW>() as u32,
            )
        };
        check_caps_result(result)?;
        let name = device_caps.szPname;
        Ok(from_wide(&name))
    }
}
