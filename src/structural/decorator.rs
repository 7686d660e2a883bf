//! Structural pattern: Decorator
//! Example: adding milk and honey to a coffee at runtime
//!
//! Each decorator owns the coffee it wraps as a `Box<dyn Coffee>`, so layers
//! stack in any order and any number.

use crate::console::Console;
use crate::error::Result;

pub trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Simple coffee".to_string()
    }

    fn cost(&self) -> f64 {
        5.0
    }
}

pub struct WithMilk {
    inner: Box<dyn Coffee>,
}

impl WithMilk {
    pub fn new(inner: Box<dyn Coffee>) -> Self {
        WithMilk { inner }
    }
}

impl Coffee for WithMilk {
    fn description(&self) -> String {
        format!("{}, with milk", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 2.0
    }
}

pub struct WithHoney {
    inner: Box<dyn Coffee>,
}

impl WithHoney {
    pub fn new(inner: Box<dyn Coffee>) -> Self {
        WithHoney { inner }
    }
}

impl Coffee for WithHoney {
    fn description(&self) -> String {
        format!("{}, with honey", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 3.0
    }
}

fn receipt(coffee: &dyn Coffee) -> String {
    format!("{} costs {} reais.", coffee.description(), coffee.cost())
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    coffee = Box::new(WithMilk::new(coffee));
    console.line(receipt(coffee.as_ref()))?;

    coffee = Box::new(WithHoney::new(coffee));
    console.line(receipt(coffee.as_ref()))?;
    Ok(())
}
