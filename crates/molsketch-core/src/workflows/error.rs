use crate::core::geometry::BondDirection;
use crate::core::models::error::ModelError;
use crate::core::models::ids::AtomId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SketchError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Atom {atom} has no free bonding slot left")]
    AtomSaturated { atom: AtomId },

    #[error("Direction {direction} is not available on atom {atom}")]
    DirectionNotAvailable {
        atom: AtomId,
        direction: BondDirection,
    },

    #[error("Bond length must be a positive, finite number (got {0})")]
    InvalidBondLength(f64),
}
