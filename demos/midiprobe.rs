extern crate midibind;

use std::error::Error;
use std::io::{stdout, Write};

fn main() {
    env_logger::init();
    match run() {
        Ok(_) => (),
        Err(err) => println!("Error: {}", err),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("Compiled MIDI API: {}", midibind::api_name());

    let stdout = stdout();
    let mut out = stdout.lock();
    midibind::probe::probe(&mut out)?;
    out.flush()?;
    Ok(())
}
