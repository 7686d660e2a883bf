//! Creational pattern: Singleton
//! Example: one process-wide instance, created on first access
//!
//! `lazy_static` defers construction until the first deref and guarantees it
//! happens exactly once, even across threads.

use lazy_static::lazy_static;

use crate::console::Console;
use crate::error::Result;

pub struct Singleton {
    message: &'static str,
}

lazy_static! {
    static ref INSTANCE: Singleton = {
        tracing::debug!("initialising the singleton");
        Singleton {
            message: "Singleton active!",
        }
    };
}

impl Singleton {
    /// The only way to reach a `Singleton`; there is no public constructor.
    pub fn instance() -> &'static Singleton {
        &INSTANCE
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let first = Singleton::instance();
    let second = Singleton::instance();

    console.line(first.message())?;
    console.line(std::ptr::eq(first, second))?;
    Ok(())
}
