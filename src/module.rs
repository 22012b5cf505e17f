//! Module registration: installs the `RtMidiIn` and `RtMidiOut` classes into
//! a host namespace.

use log::debug;

use crate::common::{MidiInput, MidiOutput, DEFAULT_INPUT_CLIENT_NAME, DEFAULT_OUTPUT_CLIENT_NAME};
use crate::errors::*;
use crate::host::{CallInfo, Exports, FunctionTemplate, HostError, Value};
use crate::traits::PortInfo;
use crate::wrapper::RtMidiWrapper;

pub const MODULE_NAME: &str = "rtmidi";

/// Entry point run when the host loads the module.
pub fn init(exports: &mut Exports) {
    register_class(exports, "RtMidiIn", || MidiInput::new(DEFAULT_INPUT_CLIENT_NAME));
    register_class(exports, "RtMidiOut", || MidiOutput::new(DEFAULT_OUTPUT_CLIENT_NAME));
    debug!("module {} initialized", MODULE_NAME);
}

/// Installs a class named `class_name` whose instances wrap a resource
/// obtained from `allocate`.
///
/// Instances get `close()`, `getPortCount()` and `getPortName(index)`.
/// Constructor arguments are accepted and ignored.
pub fn register_class<R, F>(exports: &mut Exports, class_name: &'static str, allocate: F)
where
    R: PortInfo + 'static,
    F: Fn() -> Result<R, InitError> + 'static,
{
    let mut t = FunctionTemplate::new(class_name, move |_info: &CallInfo<'_>| {
        RtMidiWrapper::new(class_name, &allocate).map_err(|err| HostError::from(BindingError::from(err)))
    });

    t.set_prototype_method("close", |this: &mut RtMidiWrapper<R>, _| {
        this.close();
        Ok(Value::Undefined)
    });
    t.set_prototype_method("getPortCount", |this: &mut RtMidiWrapper<R>, _| {
        let count = this.port_count()?;
        Ok(Value::from(count))
    });
    t.set_prototype_method("getPortName", |this: &mut RtMidiWrapper<R>, info| {
        let name = this.port_name_from_args(info)?;
        Ok(Value::from(name))
    });

    exports.set(class_name, t);
}
