use super::atom::Atom;
use super::error::ModelError;
use super::ids::AtomId;
use super::topology::BondOrder;
use crate::core::geometry::BondDirection;
use crate::core::valence::ValenceTable;
use tracing::debug;

/// A single molecule under construction.
///
/// The molecule exclusively owns its atoms. Atoms are only ever appended, so an
/// atom's id is its index and ids stay valid for the molecule's lifetime. Bonds
/// have no identity of their own: each is stored in one slot of each endpoint,
/// and every mutation here keeps the two halves in agreement.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Atoms indexed by their id.
    atoms: Vec<Atom>,
    /// Capacity table consulted when atoms are created or relabelled.
    valence: ValenceTable,
}

impl Molecule {
    /// Creates an empty molecule using the built-in valence table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty molecule with a custom valence table.
    ///
    /// # Arguments
    ///
    /// * `valence` - The label to capacity table used for every atom.
    pub fn with_valence(valence: ValenceTable) -> Self {
        Self {
            atoms: Vec::new(),
            valence,
        }
    }

    pub fn valence(&self) -> &ValenceTable {
        &self.valence
    }

    /// Returns the id the next added atom will receive.
    pub fn next_id(&self) -> AtomId {
        AtomId::new(self.atoms.len())
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns an iterator over all atoms in id order.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    /// Retrieves an atom by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownAtomId`] if no atom has this id.
    pub fn atom(&self, id: AtomId) -> Result<&Atom, ModelError> {
        self.atoms
            .get(id.index())
            .ok_or(ModelError::UnknownAtomId { id })
    }

    fn atom_mut(&mut self, id: AtomId) -> Result<&mut Atom, ModelError> {
        self.atoms
            .get_mut(id.index())
            .ok_or(ModelError::UnknownAtomId { id })
    }

    /// Appends a new atom with all slots empty.
    ///
    /// # Arguments
    ///
    /// * `label` - The element symbol; it must have an entry in the valence table.
    ///
    /// # Return
    ///
    /// The id of the new atom, equal to the previous [`next_id`](Self::next_id).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownLabel`] and leaves the molecule unchanged
    /// if the label has no capacity.
    pub fn add_atom(&mut self, label: &str) -> Result<AtomId, ModelError> {
        let id = self.next_id();
        let atom = Atom::new(id, label, &self.valence)?;
        self.atoms.push(atom);
        debug!(atom = %id, label, "Added atom");
        Ok(id)
    }

    /// Bonds slot `pos1` of `atom1` to slot `pos2` of `atom2` without fixing
    /// any orientation.
    ///
    /// Both halves are written or neither is.
    ///
    /// # Errors
    ///
    /// * [`ModelError::UnknownAtomId`] if either atom does not exist.
    /// * [`ModelError::SelfBond`] if both ids are the same.
    /// * [`ModelError::SlotIndexOutOfRange`] or [`ModelError::SlotOccupied`]
    ///   from either endpoint.
    pub fn add_bond(
        &mut self,
        atom1: AtomId,
        pos1: usize,
        atom2: AtomId,
        pos2: usize,
    ) -> Result<(), ModelError> {
        self.link(atom1, pos1, None, atom2, pos2, None)
    }

    /// Bonds two atoms along `direction`, measured from `atom1` toward `atom2`.
    ///
    /// If the bond lands in slot 0 of `atom1`, that atom records `direction`;
    /// if it lands in slot 0 of `atom2`, that atom records the opposite
    /// direction. Failure conditions are the same as [`add_bond`](Self::add_bond).
    pub fn add_oriented_bond(
        &mut self,
        atom1: AtomId,
        pos1: usize,
        atom2: AtomId,
        pos2: usize,
        direction: BondDirection,
    ) -> Result<(), ModelError> {
        self.link(
            atom1,
            pos1,
            Some(direction),
            atom2,
            pos2,
            Some(direction.opposite()),
        )
    }

    fn link(
        &mut self,
        atom1: AtomId,
        pos1: usize,
        direction1: Option<BondDirection>,
        atom2: AtomId,
        pos2: usize,
        direction2: Option<BondDirection>,
    ) -> Result<(), ModelError> {
        self.atom(atom1)?;
        self.atom(atom2)?;
        if atom1 == atom2 {
            return Err(ModelError::SelfBond { atom: atom1 });
        }

        self.transaction(&[atom1, atom2], |molecule| {
            molecule.atom_mut(atom1)?.add_bond(atom2, pos1, direction1)?;
            molecule.atom_mut(atom2)?.add_bond(atom1, pos2, direction2)
        })?;

        debug!(%atom1, pos1, %atom2, pos2, ?direction1, "Added bond");
        Ok(())
    }

    /// Changes the element label of an atom.
    ///
    /// The atom keeps its id, bonds and orientation; its slot array is resized
    /// to the new label's capacity.
    ///
    /// # Errors
    ///
    /// * [`ModelError::UnknownAtomId`] if the atom does not exist.
    /// * [`ModelError::UnknownLabel`] if the new label has no capacity.
    /// * [`ModelError::CapacityExceeded`] if a bond sits in a slot the new
    ///   label does not have.
    pub fn relabel(&mut self, id: AtomId, label: &str) -> Result<(), ModelError> {
        let valence = &self.valence;
        let atom = self
            .atoms
            .get_mut(id.index())
            .ok_or(ModelError::UnknownAtomId { id })?;
        atom.relabel(label, valence)?;
        debug!(atom = %id, label, "Relabelled atom");
        Ok(())
    }

    /// Retrieves the ids of the atoms bonded to `id`, in slot order.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownAtomId`] if the atom does not exist.
    pub fn neighbors(&self, id: AtomId) -> Result<impl Iterator<Item = AtomId> + '_, ModelError> {
        Ok(self.atom(id)?.neighbors())
    }

    /// Returns every bond once, as `(lower id, higher id, order)`.
    pub fn bonds(&self) -> impl Iterator<Item = (AtomId, AtomId, BondOrder)> + '_ {
        self.atoms.iter().flat_map(|atom| {
            atom.slots()
                .iter()
                .flatten()
                .filter(move |bond| atom.id() < bond.target)
                .map(move |bond| (atom.id(), bond.target, bond.order))
        })
    }

    pub fn bond_count(&self) -> usize {
        self.atoms.iter().map(Atom::degree).sum::<usize>() / 2
    }

    /// Runs `action` against the molecule, restoring the listed atoms to
    /// their prior state if it fails.
    ///
    /// Only the atoms named in `touched` are snapshotted, so `action` must not
    /// modify any other atom.
    fn transaction<F, R>(&mut self, touched: &[AtomId], action: F) -> Result<R, ModelError>
    where
        F: FnOnce(&mut Self) -> Result<R, ModelError>,
    {
        // 1. Record the original state of every atom the action may touch.
        let snapshots = touched
            .iter()
            .map(|&id| self.atom(id).cloned().map(|atom| (id, atom)))
            .collect::<Result<Vec<_>, _>>()?;

        // 2. Execute the action, reverting on failure.
        match action(self) {
            Ok(result) => Ok(result),
            Err(e) => {
                for (id, atom) in snapshots {
                    self.atoms[id.index()] = atom;
                }
                Err(e)
            }
        }
    }
}
