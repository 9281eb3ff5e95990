use super::error::ModelError;
use super::ids::AtomId;
use super::topology::Bond;
use crate::core::geometry::{BondDirection, OrientationClass, candidate_directions};
use crate::core::valence::ValenceTable;
use tracing::trace;

const CARBON_LABEL: &str = "C";

/// An atom together with its directional bonding slots.
///
/// The number of slots is fixed by the label's capacity. Slots are positional:
/// slot 0 is the one whose bond fixes the atom's orientation, and once a slot
/// holds a bond it keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    id: AtomId,
    label: String,
    slots: Vec<Option<Bond>>,
    degree: usize,
    orientation: Option<OrientationClass>,
}

impl Atom {
    /// Creates an atom with every slot empty.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownLabel`] if `valence` has no capacity for `label`.
    pub fn new(id: AtomId, label: &str, valence: &ValenceTable) -> Result<Self, ModelError> {
        let capacity = valence
            .capacity(label)
            .ok_or_else(|| ModelError::UnknownLabel {
                label: label.to_string(),
            })?;

        Ok(Self {
            id,
            label: label.to_string(),
            slots: vec![None; capacity],
            degree: 0,
            orientation: None,
        })
    }

    pub fn id(&self) -> AtomId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn slots(&self) -> &[Option<Bond>] {
        &self.slots
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn is_saturated(&self) -> bool {
        self.degree == self.capacity()
    }

    pub fn orientation(&self) -> Option<OrientationClass> {
        self.orientation
    }

    fn check_pos(&self, pos: usize) -> Result<(), ModelError> {
        if pos >= self.capacity() {
            return Err(ModelError::SlotIndexOutOfRange {
                pos,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    pub fn has_bond(&self, pos: usize) -> Result<bool, ModelError> {
        self.check_pos(pos)?;
        Ok(self.slots[pos].is_some())
    }

    pub fn bond_at(&self, pos: usize) -> Result<Option<&Bond>, ModelError> {
        self.check_pos(pos)?;
        Ok(self.slots[pos].as_ref())
    }

    pub fn free_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(pos, _)| pos)
    }

    pub fn first_free_slot(&self) -> Option<usize> {
        self.free_slots().next()
    }

    /// Ids of the bonded atoms, in slot order.
    pub fn neighbors(&self) -> impl Iterator<Item = AtomId> + '_ {
        self.slots.iter().flatten().map(|bond| bond.target)
    }

    /// Stores a single bond to `target` in slot `pos`.
    ///
    /// When `pos` is 0 and a `direction` is given, the direction's parity
    /// becomes the atom's orientation class. The direction is the one the bond
    /// points in as seen from this atom.
    ///
    /// # Errors
    ///
    /// * [`ModelError::SlotIndexOutOfRange`] if `pos` is not a slot of this atom.
    /// * [`ModelError::SlotOccupied`] if the slot already holds a bond; the
    ///   existing bond is left untouched.
    pub fn add_bond(
        &mut self,
        target: AtomId,
        pos: usize,
        direction: Option<BondDirection>,
    ) -> Result<(), ModelError> {
        if self.has_bond(pos)? {
            return Err(ModelError::SlotOccupied { atom: self.id, pos });
        }

        self.slots[pos] = Some(Bond::single(target));
        self.degree += 1;
        if pos == 0 {
            self.orientation = direction.map(BondDirection::orientation_class);
        }
        trace!(atom = %self.id, %target, pos, degree = self.degree, "Slot filled");

        debug_assert_eq!(self.degree, self.slots.iter().flatten().count());
        Ok(())
    }

    /// The tripod of directions offered for this atom's bonds.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::AtomNotOriented`] until slot 0 has been filled by
    /// a directed bond.
    pub fn candidate_directions(&self) -> Result<[BondDirection; 3], ModelError> {
        self.orientation
            .map(candidate_directions)
            .ok_or(ModelError::AtomNotOriented { atom: self.id })
    }

    /// Whether a drawing layer should show this atom's text label.
    ///
    /// Carbon labels are hidden once the atom sits inside a chain (two or
    /// more bonds); every other element is always labelled.
    pub fn label_visible(&self) -> bool {
        self.label != CARBON_LABEL || self.degree < 2
    }

    /// Switches the element label, resizing the slot array to the new capacity.
    pub(crate) fn relabel(&mut self, label: &str, valence: &ValenceTable) -> Result<(), ModelError> {
        let capacity = valence
            .capacity(label)
            .ok_or_else(|| ModelError::UnknownLabel {
                label: label.to_string(),
            })?;

        if self.slots.iter().skip(capacity).any(Option::is_some) {
            return Err(ModelError::CapacityExceeded {
                atom: self.id,
                label: label.to_string(),
                capacity,
            });
        }

        self.slots.resize(capacity, None);
        self.label = label.to_string();
        Ok(())
    }
}
