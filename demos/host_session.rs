extern crate midibind;

use std::error::Error;

use midibind::host::{Exports, Value};

fn main() {
    env_logger::init();
    match run() {
        Ok(_) => (),
        Err(err) => println!("Error: {}", err),
    }
}

// Drives the module the way a scripting host would after loading it.
fn run() -> Result<(), Box<dyn Error>> {
    let mut exports = Exports::new();
    midibind::init(&mut exports);

    for class in ["RtMidiIn", "RtMidiOut"] {
        let mut obj = exports.construct(class, &[])?;
        let count = obj.call("getPortCount", &[])?.as_index().unwrap_or(0);
        println!("{}: {} ports", class, count);
        for i in 0..count {
            let name = obj.call("getPortName", &[Value::from(i)])?;
            println!("  {}: {}", i, name.as_str().unwrap_or("?"));
        }
        obj.call("close", &[])?;
    }
    Ok(())
}
