pub mod chain;
pub mod directions;
