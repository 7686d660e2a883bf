//! Behavioral pattern: State
//! Example: a vending machine whose behaviour depends on its state
//!
//! The states are enum variants. Every action consumes the current state and
//! yields the next one along with the message the machine shows.

use crate::console::Console;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendingState {
    #[default]
    AwaitingPayment,
    ProductSelection,
    Dispensing,
}

impl VendingState {
    pub fn insert_coin(self) -> (Self, &'static str) {
        match self {
            VendingState::AwaitingPayment => (VendingState::ProductSelection, "Coin inserted."),
            VendingState::ProductSelection => {
                (self, "Coin already inserted. Choose the product.")
            }
            VendingState::Dispensing => (self, "Product being dispensed. Please wait."),
        }
    }

    pub fn choose_product(self) -> (Self, &'static str) {
        match self {
            VendingState::AwaitingPayment => (self, "Insert a coin first."),
            VendingState::ProductSelection => (VendingState::Dispensing, "Product chosen."),
            VendingState::Dispensing => (self, "Product already chosen."),
        }
    }

    pub fn dispense(self) -> (Self, &'static str) {
        match self {
            VendingState::AwaitingPayment => (self, "Insert a coin first."),
            VendingState::ProductSelection => (self, "Choose the product first."),
            VendingState::Dispensing => (VendingState::AwaitingPayment, "Product dispensed."),
        }
    }
}

/// The context: delegates every action to its current state.
#[derive(Debug, Default)]
pub struct VendingMachine {
    state: VendingState,
}

impl VendingMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> VendingState {
        self.state
    }

    pub fn insert_coin(&mut self) -> &'static str {
        self.apply(VendingState::insert_coin)
    }

    pub fn choose_product(&mut self) -> &'static str {
        self.apply(VendingState::choose_product)
    }

    pub fn dispense(&mut self) -> &'static str {
        self.apply(VendingState::dispense)
    }

    fn apply(&mut self, action: fn(VendingState) -> (VendingState, &'static str)) -> &'static str {
        let (next, message) = action(self.state);
        if next != self.state {
            tracing::trace!(from = ?self.state, to = ?next, "vending machine transition");
        }
        self.state = next;
        message
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let mut machine = VendingMachine::new();

    console.line(machine.choose_product())?;
    console.line(machine.insert_coin())?;
    console.line(machine.choose_product())?;
    console.line(machine.dispense())?;

    console.line(machine.insert_coin())?;
    console.line(machine.choose_product())?;
    console.line(machine.dispense())?;
    Ok(())
}
