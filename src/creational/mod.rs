//! Creational patterns: flexible ways to create objects without hard-wiring
//! the concrete type at the call site.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;
