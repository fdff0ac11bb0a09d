//! Background services that keep the flight store current.

pub mod persistence;
pub mod sync;
