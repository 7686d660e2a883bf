//! Creational pattern: Builder
//! Example: a director assembling vehicles step by step
//!
//! The builder is non-consuming (`&mut self` setters) so one builder instance
//! can serve several `build` calls. `build` hands over the parts and resets.

use std::fmt;
use std::mem;

use crate::console::Console;
use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub model: String,
    pub engine: String,
    pub wheels: u8,
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with engine {} and {} wheels.",
            self.model, self.engine, self.wheels
        )
    }
}

pub trait VehicleBuilder {
    fn model(&mut self, model: &str) -> &mut Self;
    fn engine(&mut self, engine: &str) -> &mut Self;
    fn wheels(&mut self, wheels: u8) -> &mut Self;

    /// Returns the assembled vehicle and leaves the builder empty.
    fn build(&mut self) -> Result<Vehicle>;
}

#[derive(Debug, Default)]
pub struct StandardBuilder {
    model: Option<String>,
    engine: Option<String>,
    wheels: u8,
}

impl StandardBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VehicleBuilder for StandardBuilder {
    fn model(&mut self, model: &str) -> &mut Self {
        self.model = Some(model.to_string());
        self
    }

    fn engine(&mut self, engine: &str) -> &mut Self {
        self.engine = Some(engine.to_string());
        self
    }

    fn wheels(&mut self, wheels: u8) -> &mut Self {
        self.wheels = wheels;
        self
    }

    fn build(&mut self) -> Result<Vehicle> {
        let parts = mem::take(self);
        Ok(Vehicle {
            model: parts.model.ok_or(PatternError::MissingPart("model"))?,
            engine: parts.engine.ok_or(PatternError::MissingPart("engine"))?,
            wheels: parts.wheels,
        })
    }
}

/// Knows the recipes, not the parts.
pub struct Director;

impl Director {
    pub fn build_car<B: VehicleBuilder>(&self, builder: &mut B) -> Result<Vehicle> {
        builder.model("Car").engine("V8").wheels(4);
        builder.build()
    }

    pub fn build_motorcycle<B: VehicleBuilder>(&self, builder: &mut B) -> Result<Vehicle> {
        builder.model("Motorcycle").engine("350cc").wheels(2);
        builder.build()
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let director = Director;
    let mut builder = StandardBuilder::new();

    let car = director.build_car(&mut builder)?;
    console.line(&car)?;

    let motorcycle = director.build_motorcycle(&mut builder)?;
    console.line(&motorcycle)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_recipes() {
        let mut builder = StandardBuilder::new();
        let car = Director.build_car(&mut builder).unwrap();
        assert_eq!(
            car,
            Vehicle {
                model: "Car".into(),
                engine: "V8".into(),
                wheels: 4,
            }
        );

        let motorcycle = Director.build_motorcycle(&mut builder).unwrap();
        assert_eq!(motorcycle.wheels, 2);
        // The first product is unaffected by reusing the builder.
        assert_eq!(car.model, "Car");
    }

    #[test]
    fn test_missing_parts() {
        let mut builder = StandardBuilder::new();
        builder.engine("V6");
        assert!(matches!(
            builder.build(),
            Err(PatternError::MissingPart("model"))
        ));

        builder.model("Truck");
        assert!(matches!(
            builder.build(),
            Err(PatternError::MissingPart("engine"))
        ));
    }

    #[test]
    fn test_build_resets() {
        let mut builder = StandardBuilder::new();
        builder.model("Van").engine("2.0").wheels(4);
        assert!(builder.build().is_ok());
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_narration() {
        let text = Console::capture(run).unwrap();
        assert_eq!(
            text,
            "Car with engine V8 and 4 wheels.\nMotorcycle with engine 350cc and 2 wheels.\n"
        );
    }
}
