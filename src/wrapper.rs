use log::{trace, warn};

use crate::errors::*;
use crate::handle::ResourceHandle;
use crate::host::CallInfo;
use crate::traits::PortInfo;

/// The native side of a host-visible `RtMidiIn` / `RtMidiOut` object.
///
/// It owns exactly one MIDI resource through a [`ResourceHandle`] and forwards
/// port queries to it. Use [`close`](Self::close) to release the resource
/// deterministically; dropping the wrapper releases it as well.
pub struct RtMidiWrapper<R> {
    handle: ResourceHandle<R>,
}

impl<R: PortInfo> RtMidiWrapper<R> {
    /// Allocates the external resource with `allocate`.
    ///
    /// On failure the returned error still carries the wrapper, which is
    /// then inert: every port query fails and `close` does nothing.
    pub fn new<F>(label: &'static str, allocate: F) -> Result<Self, ConstructError<Self>>
    where
        F: FnOnce() -> Result<R, InitError>,
    {
        match allocate() {
            Ok(resource) => Ok(RtMidiWrapper::from_resource(label, resource)),
            Err(err) => {
                warn!("{}: {}", label, err);
                let inert = RtMidiWrapper {
                    handle: ResourceHandle::closed(label),
                };
                Err(ConstructError::new(err, inert))
            }
        }
    }

    pub fn from_resource(label: &'static str, resource: R) -> Self {
        RtMidiWrapper {
            handle: ResourceHandle::new(label, resource),
        }
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_open()
    }

    pub fn close(&mut self) {
        self.handle.close();
    }

    pub fn port_count(&self) -> Result<usize, BindingError> {
        let resource = self.handle.get()?;
        let count = resource.port_count();
        trace!("{}: {} ports", self.handle.label(), count);
        Ok(count)
    }

    /// Looks up a port name. Negative indices are out of range.
    pub fn port_name(&self, index: i64) -> Result<String, BindingError> {
        let resource = self.handle.get()?;
        usize::try_from(index)
            .map_err(|_| PortInfoError::PortNumberOutOfRange)
            .and_then(|port_number| resource.port_name(port_number))
            .map_err(|err| {
                warn!("{}: port {}: {}", self.handle.label(), index, err);
                BindingError::from(err)
            })
    }

    /// `getPortName(index)` as called from the host: the index argument is
    /// checked before anything reaches the external resource.
    pub fn port_name_from_args(&self, info: &CallInfo<'_>) -> Result<String, BindingError> {
        let index = index_argument(info)?;
        self.port_name(index)
    }
}

fn index_argument(info: &CallInfo<'_>) -> Result<i64, BindingError> {
    if info.len() != 1 {
        return Err(BindingError::InvalidArgument("Must pass an index"));
    }
    info.get(0)
        .as_index()
        .ok_or(BindingError::InvalidArgument("Index must be an integer"))
}
