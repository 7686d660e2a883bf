//! Behavioral pattern: Template Method
//! Example: preparing hot beverages
//!
//! `prepare` is the template: a provided trait method that fixes the order of
//! steps. Implementors fill in the required step and may override the hook.

use crate::console::Console;
use crate::error::Result;

pub trait HotBeverage {
    /// Required step.
    fn add_main_ingredient(&self) -> &'static str;

    /// Hook; no extras unless a beverage asks for them.
    fn add_extras(&self) -> Option<&'static str> {
        None
    }

    fn prepare(&self) -> Vec<&'static str> {
        let mut steps = vec![boil_water(), self.add_main_ingredient(), pour_into_cup()];
        steps.extend(self.add_extras());
        steps
    }
}

fn boil_water() -> &'static str {
    "Boiling water..."
}

fn pour_into_cup() -> &'static str {
    "Pouring into the cup..."
}

pub struct Coffee;
pub struct Tea;

impl HotBeverage for Coffee {
    fn add_main_ingredient(&self) -> &'static str {
        "Adding ground coffee..."
    }

    fn add_extras(&self) -> Option<&'static str> {
        Some("Adding sugar and milk...")
    }
}

impl HotBeverage for Tea {
    fn add_main_ingredient(&self) -> &'static str {
        "Adding tea leaves..."
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    console.line("Preparing coffee:")?;
    console.lines(Coffee.prepare())?;

    console.blank()?;
    console.line("Preparing tea:")?;
    console.lines(Tea.prepare())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_skeleton() {
        let coffee = Coffee.prepare();
        let tea = Tea.prepare();
        assert_eq!(coffee[0], tea[0]);
        assert_eq!(coffee[2], tea[2]);
        assert_eq!(coffee.len(), 4);
        assert_eq!(tea.len(), 3);
    }

    #[test]
    fn test_narration() {
        let expected = "\
Preparing coffee:
Boiling water...
Adding ground coffee...
Pouring into the cup...
Adding sugar and milk...

Preparing tea:
Boiling water...
Adding tea leaves...
Pouring into the cup...
";
        assert_eq!(Console::capture(run).unwrap(), expected);
    }
}
