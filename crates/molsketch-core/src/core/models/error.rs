use super::ids::AtomId;
use thiserror::Error;

/// Failures reported by the molecular graph model.
///
/// All of these leave the molecule exactly as it was before the failing call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown atom label '{label}': no bonding capacity is defined for it")]
    UnknownLabel { label: String },

    #[error("Slot index {pos} is out of range for an atom with {capacity} slots")]
    SlotIndexOutOfRange { pos: usize, capacity: usize },

    #[error("Slot {pos} of atom {atom} is already occupied")]
    SlotOccupied { atom: AtomId, pos: usize },

    #[error("Atom {id} does not exist in this molecule")]
    UnknownAtomId { id: AtomId },

    #[error("Atom {atom} has no orientation yet: its first slot was never fixed by a directed bond")]
    AtomNotOriented { atom: AtomId },

    #[error("Atom {atom} cannot become '{label}': it has a bond beyond the {capacity} slots that label allows")]
    CapacityExceeded {
        atom: AtomId,
        label: String,
        capacity: usize,
    },

    #[error("Atom {atom} cannot be bonded to itself")]
    SelfBond { atom: AtomId },

    #[error("Invalid bond direction code {0}: expected a value in 0..=5")]
    InvalidDirectionCode(u8),
}
