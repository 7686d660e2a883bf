//! Creational pattern: Factory Method
//! Example: creators decide which vehicle to build
//!
//! Callers hold a `&dyn VehicleCreator` and never name `Car` or `Motorcycle`.

use crate::console::Console;
use crate::error::Result;

pub trait Vehicle {
    fn model(&self) -> &'static str;
}

pub struct Car;
pub struct Motorcycle;

impl Vehicle for Car {
    fn model(&self) -> &'static str {
        "Car model X"
    }
}

impl Vehicle for Motorcycle {
    fn model(&self) -> &'static str {
        "Motorcycle model Y"
    }
}

/// The factory method lives here; each creator picks the concrete product.
pub trait VehicleCreator {
    fn create_vehicle(&self) -> Box<dyn Vehicle>;

    // Shared logic written once against the abstract product.
    fn describe_delivery(&self) -> String {
        format!("Delivering: {}", self.create_vehicle().model())
    }
}

pub struct CarCreator;
pub struct MotorcycleCreator;

impl VehicleCreator for CarCreator {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Car)
    }
}

impl VehicleCreator for MotorcycleCreator {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Motorcycle)
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let creators: [&dyn VehicleCreator; 2] = [&CarCreator, &MotorcycleCreator];

    for creator in creators {
        let vehicle = creator.create_vehicle();
        console.line(vehicle.model())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creators_pick_product() {
        assert_eq!(CarCreator.create_vehicle().model(), "Car model X");
        assert_eq!(MotorcycleCreator.create_vehicle().model(), "Motorcycle model Y");
    }

    #[test]
    fn test_shared_logic_uses_factory_method() {
        assert_eq!(
            MotorcycleCreator.describe_delivery(),
            "Delivering: Motorcycle model Y"
        );
    }

    #[test]
    fn test_narration() {
        let text = Console::capture(run).unwrap();
        assert_eq!(text, "Car model X\nMotorcycle model Y\n");
    }
}
