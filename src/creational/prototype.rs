//! Creational pattern: Prototype
//! Example: copying a person without naming its concrete type
//!
//! `Clone` alone needs the concrete type at the call site. `clone_box` keeps
//! the trait object-safe so a `&dyn Prototype` can still be copied.

use crate::console::Console;
use crate::error::Result;

pub trait Prototype {
    fn clone_box(&self) -> Box<dyn Prototype>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub cpf: String,
}

impl Person {
    pub fn new(name: impl Into<String>, cpf: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            cpf: cpf.into(),
        }
    }
}

impl Prototype for Person {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("Name: {} CPF: {}", self.name, self.cpf)
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let original: Box<dyn Prototype> = Box::new(Person::new("Flávio Klein", "123.456.789-10"));
    let copy = original.clone_box();

    console.line(original.describe())?;
    console.line(copy.describe())?;
    Ok(())
}
