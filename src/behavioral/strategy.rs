//! Behavioral pattern: Strategy
//! Example: a calculator with swappable operations
//!
//! Both failure modes are values, not panics: dividing by zero and calculating
//! before any strategy was chosen.

use crate::console::Console;
use crate::error::{PatternError, Result};

pub trait Strategy {
    fn calculate(&self, a: f64, b: f64) -> Result<f64>;
}

pub struct Add;
pub struct Subtract;
pub struct Multiply;
pub struct Divide;

impl Strategy for Add {
    fn calculate(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a + b)
    }
}

impl Strategy for Subtract {
    fn calculate(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a - b)
    }
}

impl Strategy for Multiply {
    fn calculate(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a * b)
    }
}

impl Strategy for Divide {
    fn calculate(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(PatternError::DivisionByZero);
        }
        Ok(a / b)
    }
}

#[derive(Default)]
pub struct Calculator {
    strategy: Option<Box<dyn Strategy>>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = Some(strategy);
    }

    pub fn execute(&self, a: f64, b: f64) -> Result<f64> {
        let strategy = self.strategy.as_ref().ok_or(PatternError::NoStrategy)?;
        strategy.calculate(a, b)
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let mut calculator = Calculator::new();

    // Misuse first: nothing selected yet.
    if let Err(err) = calculator.execute(10.0, 5.0) {
        console.line(format!("Error: {err}"))?;
    }

    let operations: [(&str, Box<dyn Strategy>); 4] = [
        ("Sum", Box::new(Add)),
        ("Subtraction", Box::new(Subtract)),
        ("Multiplication", Box::new(Multiply)),
        ("Division", Box::new(Divide)),
    ];
    for (label, strategy) in operations {
        calculator.set_strategy(strategy);
        console.line(format!("{label}: {}", calculator.execute(10.0, 5.0)?))?;
    }

    // The divide strategy is still selected.
    match calculator.execute(10.0, 0.0) {
        Ok(value) => console.line(format!("Division by zero: {value}"))?,
        Err(err) => console.line(format!("Error: {err}"))?,
    }
    Ok(())
}
