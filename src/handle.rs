use log::debug;

use crate::errors::BindingError;

/// Exclusive owner of one externally allocated MIDI resource.
///
/// The resource is released exactly once: on the first [`close`](Self::close)
/// or, failing that, when the handle is dropped. `Closed` is terminal.
pub struct ResourceHandle<R> {
    resource: Option<R>,
    label: &'static str,
}

impl<R> ResourceHandle<R> {
    pub fn new(label: &'static str, resource: R) -> Self {
        debug!("{}: resource allocated", label);
        ResourceHandle {
            resource: Some(resource),
            label,
        }
    }

    /// A handle that never owned anything, e.g. after a failed allocation.
    pub fn closed(label: &'static str) -> Self {
        ResourceHandle {
            resource: None,
            label,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_open(&self) -> bool {
        self.resource.is_some()
    }

    pub fn get(&self) -> Result<&R, BindingError> {
        self.resource.as_ref().ok_or(BindingError::HandleClosed)
    }

    /// Releases the resource if still held. Returns whether anything was released.
    pub fn close(&mut self) -> bool {
        match self.resource.take() {
            Some(resource) => {
                drop(resource);
                debug!("{}: resource released", self.label);
                true
            }
            None => false,
        }
    }
}

impl<R> Drop for ResourceHandle<R> {
    fn drop(&mut self) {
        self.close();
    }
}
