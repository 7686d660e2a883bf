//! Structural pattern: Facade
//! Example: one call to boot a computer

use crate::console::Console;
use crate::error::Result;

pub struct Cpu;
pub struct Memory;
pub struct Disk;

impl Cpu {
    pub fn power_on(&self) -> &'static str {
        "CPU powered on"
    }
}

impl Memory {
    pub fn load(&self) -> &'static str {
        "Memory loaded"
    }
}

impl Disk {
    pub fn read(&self) -> &'static str {
        "Hard disk reading data"
    }
}

pub struct Computer {
    cpu: Cpu,
    memory: Memory,
    disk: Disk,
}

impl Default for Computer {
    fn default() -> Self {
        Computer {
            cpu: Cpu,
            memory: Memory,
            disk: Disk,
        }
    }
}

impl Computer {
    /// Drives the subsystems in the order they must start.
    pub fn start(&self) -> Vec<&'static str> {
        vec![
            self.cpu.power_on(),
            self.memory.load(),
            self.disk.read(),
            "Computer ready to use.",
        ]
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    console.lines(Computer::default().start())
}
