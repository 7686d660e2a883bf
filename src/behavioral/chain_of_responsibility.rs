//! Behavioral pattern: Chain of Responsibility
//! Example: support tickets escalating from attendant to manager
//!
//! Each handler either resolves a request or forwards it to its successor.
//! The caller only talks to the head of the chain.

use crate::console::Console;
use crate::error::Result;

pub trait SupportHandler {
    /// Returns the role that resolved the request, or `None` if the request
    /// fell off the end of the chain.
    fn handle(&self, level: u32) -> Option<&'static str>;
}

pub struct Tier {
    role: &'static str,
    /// Highest level this tier resolves; `None` resolves everything.
    ceiling: Option<u32>,
    next: Option<Box<dyn SupportHandler>>,
}

impl Tier {
    pub fn new(role: &'static str, ceiling: Option<u32>) -> Self {
        Tier {
            role,
            ceiling,
            next: None,
        }
    }

    pub fn with_next(mut self, next: impl SupportHandler + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    fn accepts(&self, level: u32) -> bool {
        self.ceiling.map_or(true, |ceiling| level <= ceiling)
    }
}

impl SupportHandler for Tier {
    fn handle(&self, level: u32) -> Option<&'static str> {
        if self.accepts(level) {
            return Some(self.role);
        }
        tracing::trace!(role = self.role, level, "escalating request");
        self.next.as_ref().and_then(|next| next.handle(level))
    }
}

/// Attendant (level 1) -> Supervisor (level 2) -> Manager (anything).
pub fn support_desk() -> Tier {
    Tier::new("Attendant", Some(1)).with_next(
        Tier::new("Supervisor", Some(2)).with_next(Tier::new("Manager", None)),
    )
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let desk = support_desk();

    for level in 1..=3 {
        if level > 1 {
            console.blank()?;
        }
        console.line(format!("Level {level} request:"))?;
        match desk.handle(level) {
            Some(role) => console.line(format!("{role} resolved the issue."))?,
            None => console.line("Nobody could resolve the issue.")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_each_level_reaches_its_tier() {
        let desk = support_desk();
        assert_eq!(desk.handle(1), Some("Attendant"));
        assert_eq!(desk.handle(2), Some("Supervisor"));
        assert_eq!(desk.handle(3), Some("Manager"));
    }

    #[test]
    fn test_unresolved_without_catch_all() {
        let desk = Tier::new("Attendant", Some(1)).with_next(Tier::new("Supervisor", Some(2)));
        assert_eq!(desk.handle(2), Some("Supervisor"));
        assert_eq!(desk.handle(5), None);
    }

    #[test]
    fn test_narration() {
        let expected = "\
Level 1 request:
Attendant resolved the issue.

Level 2 request:
Supervisor resolved the issue.

Level 3 request:
Manager resolved the issue.
";
        assert_eq!(Console::capture(run).unwrap(), expected);
    }

    proptest! {
        #[test]
        fn test_first_accepting_tier_wins(level in 0u32..1000) {
            let expected = match level {
                0 | 1 => "Attendant",
                2 => "Supervisor",
                _ => "Manager",
            };
            prop_assert_eq!(support_desk().handle(level), Some(expected));
        }
    }
}
