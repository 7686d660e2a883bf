//! Behavioral pattern: Command
//! Example: a remote control with undo
//!
//! Requests become values implementing `Command`. The invoker (`Remote`) only
//! knows how to execute or undo whatever command it was handed.

use std::cell::RefCell;
use std::rc::Rc;

use crate::console::Console;
use crate::error::{PatternError, Result};

/// The receiver.
#[derive(Debug, Default)]
pub struct Tv {
    on: bool,
}

impl Tv {
    pub fn turn_on(&mut self) -> &'static str {
        self.on = true;
        "TV turned on."
    }

    pub fn turn_off(&mut self) -> &'static str {
        self.on = false;
        "TV turned off."
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

pub trait Command {
    fn execute(&self) -> &'static str;
    fn undo(&self) -> &'static str;
}

pub struct TurnOnTv {
    tv: Rc<RefCell<Tv>>,
}

impl TurnOnTv {
    pub fn new(tv: Rc<RefCell<Tv>>) -> Self {
        TurnOnTv { tv }
    }
}

impl Command for TurnOnTv {
    fn execute(&self) -> &'static str {
        self.tv.borrow_mut().turn_on()
    }

    fn undo(&self) -> &'static str {
        self.tv.borrow_mut().turn_off()
    }
}

pub struct TurnOffTv {
    tv: Rc<RefCell<Tv>>,
}

impl TurnOffTv {
    pub fn new(tv: Rc<RefCell<Tv>>) -> Self {
        TurnOffTv { tv }
    }
}

impl Command for TurnOffTv {
    fn execute(&self) -> &'static str {
        self.tv.borrow_mut().turn_off()
    }

    fn undo(&self) -> &'static str {
        self.tv.borrow_mut().turn_on()
    }
}

/// The invoker.
#[derive(Default)]
pub struct Remote {
    command: Option<Box<dyn Command>>,
}

impl Remote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    pub fn press(&self) -> Result<&'static str> {
        self.command
            .as_ref()
            .map(|command| command.execute())
            .ok_or(PatternError::NoCommand)
    }

    pub fn press_undo(&self) -> Result<&'static str> {
        self.command
            .as_ref()
            .map(|command| command.undo())
            .ok_or(PatternError::NoCommand)
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let tv = Rc::new(RefCell::new(Tv::default()));
    let mut remote = Remote::new();

    console.line("Pressing the button to turn the TV ON...")?;
    remote.set_command(Box::new(TurnOnTv::new(Rc::clone(&tv))));
    console.line(remote.press()?)?;

    console.line("Pressing the UNDO button...")?;
    console.line(remote.press_undo()?)?;

    console.line("Pressing the button to turn the TV OFF...")?;
    remote.set_command(Box::new(TurnOffTv::new(Rc::clone(&tv))));
    console.line(remote.press()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_and_undo_change_receiver() {
        let tv = Rc::new(RefCell::new(Tv::default()));
        let on = TurnOnTv::new(Rc::clone(&tv));

        on.execute();
        assert!(tv.borrow().is_on());
        on.undo();
        assert!(!tv.borrow().is_on());

        let off = TurnOffTv::new(Rc::clone(&tv));
        off.undo();
        assert!(tv.borrow().is_on());
    }

    #[test]
    fn test_remote_without_command() {
        let remote = Remote::new();
        assert!(matches!(remote.press(), Err(PatternError::NoCommand)));
        assert!(matches!(remote.press_undo(), Err(PatternError::NoCommand)));
    }

    #[test]
    fn test_narration() {
        let expected = "\
Pressing the button to turn the TV ON...
TV turned on.
Pressing the UNDO button...
TV turned off.
Pressing the button to turn the TV OFF...
TV turned off.
";
        assert_eq!(Console::capture(run).unwrap(), expected);
    }
}
