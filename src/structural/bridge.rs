//! Structural pattern: Bridge
//! Example: a remote control decoupled from the device it drives
//!
//! `RemoteControl` is the abstraction, `Device` the implementation side. Either
//! can grow new variants without touching the other.

use crate::console::Console;
use crate::error::Result;

pub trait Device {
    fn power_on(&mut self) -> &'static str;
    fn power_off(&mut self) -> &'static str;
    fn is_on(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct Television {
    on: bool,
}

impl Device for Television {
    fn power_on(&mut self) -> &'static str {
        self.on = true;
        "TV on."
    }

    fn power_off(&mut self) -> &'static str {
        self.on = false;
        "TV off."
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Debug, Default)]
pub struct Radio {
    on: bool,
}

impl Device for Radio {
    fn power_on(&mut self) -> &'static str {
        self.on = true;
        "Radio on."
    }

    fn power_off(&mut self) -> &'static str {
        self.on = false;
        "Radio off."
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

pub struct RemoteControl<D: Device> {
    device: D,
}

impl<D: Device> RemoteControl<D> {
    pub fn new(device: D) -> Self {
        RemoteControl { device }
    }

    pub fn turn_on(&mut self) -> &'static str {
        self.device.power_on()
    }

    pub fn turn_off(&mut self) -> &'static str {
        self.device.power_off()
    }

    /// Refinement built purely on the device interface.
    pub fn toggle(&mut self) -> &'static str {
        if self.device.is_on() {
            self.turn_off()
        } else {
            self.turn_on()
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let mut remote = RemoteControl::new(Television::default());
    console.line(remote.turn_on())?;
    console.line(remote.turn_off())?;

    // Same abstraction, different implementation.
    let mut radio = RemoteControl::new(Radio::default());
    console.line(radio.toggle())?;
    console.line(radio.toggle())?;
    Ok(())
}
