//! Structural patterns: composing types into larger structures while keeping
//! them flexible.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;
