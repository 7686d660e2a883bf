//! The ordered list of examples and the loop that narrates them.

use std::collections::BTreeSet;

use crate::behavioral::{
    chain_of_responsibility, command, command_language, interpreter, iterator, mediator, memento,
    observer, state, strategy, template_method, visitor,
};
use crate::console::Console;
use crate::creational::{abstract_factory, builder, factory_method, prototype, singleton};
use crate::error::{PatternError, Result};
use crate::structural::{adapter, bridge, composite, decorator, facade, flyweight, proxy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Creational => "Creational Patterns",
            Category::Structural => "Structural Patterns",
            Category::Behavioral => "Behavioral Patterns",
        }
    }
}

pub type Runner = fn(&mut Console<'_>) -> Result<()>;

#[derive(Clone, Copy)]
pub struct Example {
    pub name: &'static str,
    /// Short identifier accepted by `GOF_PATTERNS`, alongside the name.
    pub slug: &'static str,
    pub category: Category,
    pub run: Runner,
}

impl std::fmt::Debug for Example {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Example")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

macro_rules! example {
    ($name:literal, $slug:literal, $category:ident, $module:ident) => {
        Example {
            name: $name,
            slug: $slug,
            category: Category::$category,
            run: $module::run,
        }
    };
}

pub static CATALOG: &[Example] = &[
    example!("Singleton", "singleton", Creational, singleton),
    example!("Factory Method", "factory-method", Creational, factory_method),
    example!("Abstract Factory", "abstract-factory", Creational, abstract_factory),
    example!("Builder", "builder", Creational, builder),
    example!("Prototype", "prototype", Creational, prototype),
    example!("Adapter", "adapter", Structural, adapter),
    example!("Bridge", "bridge", Structural, bridge),
    example!("Composite", "composite", Structural, composite),
    example!("Decorator", "decorator", Structural, decorator),
    example!("Facade", "facade", Structural, facade),
    example!("Flyweight", "flyweight", Structural, flyweight),
    example!("Proxy", "proxy", Structural, proxy),
    example!("Chain of Responsibility", "chain", Behavioral, chain_of_responsibility),
    example!("Command", "command", Behavioral, command),
    example!("Interpreter", "interpreter", Behavioral, interpreter),
    example!("Interpreter (command language)", "command-language", Behavioral, command_language),
    example!("Iterator", "iterator", Behavioral, iterator),
    example!("Mediator", "mediator", Behavioral, mediator),
    example!("Memento", "memento", Behavioral, memento),
    example!("Observer", "observer", Behavioral, observer),
    example!("State", "state", Behavioral, state),
    example!("Strategy", "strategy", Behavioral, strategy),
    example!("Template Method", "template-method", Behavioral, template_method),
    example!("Visitor", "visitor", Behavioral, visitor),
];

/// Case, spaces and punctuation do not matter: `Factory-Method`,
/// `factory method` and `FACTORYMETHOD` are the same key.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl Selection {
    /// Builds a selection from user-supplied names. Unknown names are logged
    /// and dropped; if nothing known remains, everything is selected.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut keys = BTreeSet::new();
        for raw in names {
            let raw = raw.as_ref();
            let key = normalize(raw);
            let known = CATALOG
                .iter()
                .any(|e| normalize(e.name) == key || normalize(e.slug) == key);
            if known {
                keys.insert(key);
            } else {
                tracing::warn!(pattern = raw, "no example with this name, ignoring");
            }
        }

        if keys.is_empty() {
            Selection::All
        } else {
            Selection::Only(keys)
        }
    }

    pub fn matches(&self, example: &Example) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(keys) => {
                keys.contains(&normalize(example.name)) || keys.contains(&normalize(example.slug))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub ran: usize,
    pub failed: usize,
}

/// Narrates every selected example of [`CATALOG`], category by category.
pub fn run(console: &mut Console<'_>, selection: &Selection) -> Result<Summary> {
    run_examples(console, CATALOG, selection)
}

/// A failing example is reported in place and the run continues. Only a
/// broken console aborts the run.
pub fn run_examples(
    console: &mut Console<'_>,
    examples: &[Example],
    selection: &Selection,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for category in Category::ALL {
        let selected: Vec<&Example> = examples
            .iter()
            .filter(|e| e.category == category && selection.matches(e))
            .collect();
        if selected.is_empty() {
            continue;
        }

        console.heading(category.title())?;
        console.rule()?;

        for example in selected {
            let span = tracing::info_span!("example", example = example.name);
            let _guard = span.enter();

            console.title(example.name)?;
            match (example.run)(console) {
                Ok(()) => tracing::debug!("example finished"),
                Err(PatternError::Io(err)) => return Err(PatternError::Io(err)),
                Err(err) => {
                    tracing::error!(error = %err, "example failed");
                    summary.failed += 1;
                    console.failure(format!("{} failed: {err}", example.name))?;
                }
            }
            summary.ran += 1;
            console.separator()?;
        }

        console.blank()?;
    }

    console.flush()?;
    Ok(summary)
}
