//! # Gang-of-Four Design Patterns in Rust
//!
//! Each of the twenty-three classic patterns is a small module with its own
//! types and a `run` function that narrates the pattern through a [`Console`].
//!
//! ## Creational
//! - Singleton, Factory Method, Abstract Factory, Builder, Prototype
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Decorator, Facade, Flyweight, Proxy
//!
//! ## Behavioral
//! - Chain of Responsibility, Command, Interpreter (plus a small command
//!   language), Iterator, Mediator, Memento, Observer, State, Strategy,
//!   Template Method, Visitor
//!
//! Class hierarchies become traits or enums; constructor wiring becomes
//! explicit composition at the call site.
//!
//! Run everything with: `cargo run`
//! Run a subset with: `GOF_PATTERNS=strategy,visitor cargo run`

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod console;
pub mod creational;
pub mod error;
pub mod structural;

pub use catalog::{Category, Example, Selection, Summary, CATALOG};
pub use config::Config;
pub use console::Console;
pub use error::{PatternError, Result};
