//! Behavioral pattern: Visitor
//! Example: reports over a staff list
//!
//! New operations over the staff are new `StaffVisitor` impls; `Coordinator`
//! and `Developer` never change.

use crate::console::Console;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinator {
    pub name: String,
    pub bonus: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    pub name: String,
    pub language: String,
}

pub trait StaffVisitor {
    fn visit_coordinator(&mut self, coordinator: &Coordinator);
    fn visit_developer(&mut self, developer: &Developer);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staff {
    Coordinator(Coordinator),
    Developer(Developer),
}

impl Staff {
    pub fn coordinator(name: &str, bonus: u32) -> Self {
        Staff::Coordinator(Coordinator {
            name: name.to_string(),
            bonus,
        })
    }

    pub fn developer(name: &str, language: &str) -> Self {
        Staff::Developer(Developer {
            name: name.to_string(),
            language: language.to_string(),
        })
    }

    /// Double dispatch: the variant picks the visitor method.
    pub fn accept(&self, visitor: &mut dyn StaffVisitor) {
        match self {
            Staff::Coordinator(c) => visitor.visit_coordinator(c),
            Staff::Developer(d) => visitor.visit_developer(d),
        }
    }
}

#[derive(Debug, Default)]
pub struct ReportVisitor {
    pub lines: Vec<String>,
}

impl StaffVisitor for ReportVisitor {
    fn visit_coordinator(&mut self, coordinator: &Coordinator) {
        self.lines.push(format!(
            "Coordinator: {}, Bonus: R$ {}",
            coordinator.name, coordinator.bonus
        ));
    }

    fn visit_developer(&mut self, developer: &Developer) {
        self.lines.push(format!(
            "Developer: {}, Language: {}",
            developer.name, developer.language
        ));
    }
}

#[derive(Debug, Default)]
pub struct BonusTotal {
    pub total: u64,
}

impl StaffVisitor for BonusTotal {
    fn visit_coordinator(&mut self, coordinator: &Coordinator) {
        self.total += u64::from(coordinator.bonus);
    }

    fn visit_developer(&mut self, _developer: &Developer) {}
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let staff = [
        Staff::coordinator("Carlos", 5000),
        Staff::developer("Ana", "C#"),
        Staff::developer("Pedro", "Java"),
    ];

    let mut report = ReportVisitor::default();
    for member in &staff {
        member.accept(&mut report);
    }
    console.lines(&report.lines)
}
