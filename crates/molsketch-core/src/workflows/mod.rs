//! High-level entry points for driving the model from a drawing front end.

pub mod config;
pub mod error;
pub mod sketch;
