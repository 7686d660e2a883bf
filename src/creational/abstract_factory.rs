//! Creational pattern: Abstract Factory
//! Example: furniture families that must match

use crate::console::Console;
use crate::error::Result;

pub trait Chair {
    fn sit(&self) -> &'static str;
}

pub trait Sofa {
    fn lie_down(&self) -> &'static str;
}

/// One factory per family; products from the same factory belong together.
pub trait FurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair>;
    fn create_sofa(&self) -> Box<dyn Sofa>;
}

pub struct ModernChair;
pub struct ModernSofa;
pub struct ModernFurniture;

impl Chair for ModernChair {
    fn sit(&self) -> &'static str {
        "Sitting on the modern chair."
    }
}

impl Sofa for ModernSofa {
    fn lie_down(&self) -> &'static str {
        "Lying on the modern sofa."
    }
}

impl FurnitureFactory for ModernFurniture {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ModernSofa)
    }
}

pub struct VictorianChair;
pub struct VictorianSofa;
pub struct VictorianFurniture;

impl Chair for VictorianChair {
    fn sit(&self) -> &'static str {
        "Sitting on the victorian chair."
    }
}

impl Sofa for VictorianSofa {
    fn lie_down(&self) -> &'static str {
        "Lying on the victorian sofa."
    }
}

impl FurnitureFactory for VictorianFurniture {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(VictorianChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(VictorianSofa)
    }
}

/// Client code: knows only the abstract factory.
pub fn furnish(factory: &dyn FurnitureFactory) -> [&'static str; 2] {
    let chair = factory.create_chair();
    let sofa = factory.create_sofa();
    [chair.sit(), sofa.lie_down()]
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let families: [&dyn FurnitureFactory; 2] = [&ModernFurniture, &VictorianFurniture];
    for factory in families {
        console.lines(furnish(factory))?;
    }
    Ok(())
}
