use super::config::SketchConfig;
use super::error::SketchError;
use crate::core::geometry::{BondDirection, direction_vector};
use crate::core::models::error::ModelError;
use crate::core::models::ids::AtomId;
use crate::core::models::molecule::Molecule;
use crate::core::valence::ValenceTable;
use nalgebra::Point2;
use tracing::{debug, instrument};

/// Where an atom sits on the drawing surface and which directions its bonds
/// were drawn in, as seen from the atom.
#[derive(Debug, Clone, PartialEq)]
struct AtomLayout {
    position: Point2<f64>,
    directions: Vec<BondDirection>,
}

/// One sketching session: a molecule plus the 2D layout a front end draws.
///
/// The session is the only writer of its molecule. Layout entries run parallel
/// to the molecule's atoms, so every atom has a position. Every operation
/// either succeeds completely or leaves the session unchanged.
#[derive(Debug, Clone)]
pub struct SketchSession {
    molecule: Molecule,
    config: SketchConfig,
    layout: Vec<AtomLayout>,
}

impl SketchSession {
    /// Starts an empty session using the built-in valence table.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidBondLength`] if the configured bond length
    /// is not a positive, finite number.
    pub fn new(config: SketchConfig) -> Result<Self, SketchError> {
        Self::with_valence(config, ValenceTable::new())
    }

    pub fn with_valence(config: SketchConfig, valence: ValenceTable) -> Result<Self, SketchError> {
        config.validate()?;
        Ok(Self {
            molecule: Molecule::with_valence(valence),
            config,
            layout: Vec::new(),
        })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn molecule(&self) -> &Molecule {
        &self.molecule
    }

    fn layout(&self, id: AtomId) -> Result<&AtomLayout, SketchError> {
        self.layout
            .get(id.index())
            .ok_or_else(|| ModelError::UnknownAtomId { id }.into())
    }

    pub fn position(&self, id: AtomId) -> Result<Point2<f64>, SketchError> {
        Ok(self.layout(id)?.position)
    }

    /// Places a free-standing atom at `position`.
    #[instrument(skip(self), level = "debug")]
    pub fn place_atom(&mut self, label: &str, position: Point2<f64>) -> Result<AtomId, SketchError> {
        let id = self.molecule.add_atom(label)?;
        self.layout.push(AtomLayout {
            position,
            directions: Vec::new(),
        });
        Ok(id)
    }

    /// Draws a bond from `from` along `direction` and places a new atom at
    /// its far end.
    ///
    /// The new atom carries the configured grow label and holds the bond in
    /// slot 0. The parent uses slot 0 if it is still empty, otherwise its
    /// first free slot.
    ///
    /// # Return
    ///
    /// The id of the new atom.
    ///
    /// # Errors
    ///
    /// * [`SketchError::AtomSaturated`] if the parent has no free slot.
    /// * [`SketchError::DirectionNotAvailable`] if `direction` is outside the
    ///   parent's tripod or already taken by one of its bonds.
    /// * [`ModelError::UnknownAtomId`] or [`ModelError::UnknownLabel`] wrapped
    ///   in [`SketchError::Model`].
    #[instrument(skip(self), level = "debug")]
    pub fn grow(&mut self, from: AtomId, direction: BondDirection) -> Result<AtomId, SketchError> {
        let parent_slot = self
            .molecule
            .atom(from)?
            .first_free_slot()
            .ok_or(SketchError::AtomSaturated { atom: from })?;

        if !self.available_directions(from)?.contains(&direction) {
            return Err(SketchError::DirectionNotAvailable {
                atom: from,
                direction,
            });
        }

        let label = self.config.grow_label.clone();
        if !self.molecule.valence().contains(&label) {
            return Err(ModelError::UnknownLabel { label }.into());
        }

        let position =
            self.layout(from)?.position + direction_vector(direction, self.config.bond_length);

        let child = self.molecule.add_atom(&label)?;
        self.layout.push(AtomLayout {
            position,
            directions: vec![direction.opposite()],
        });
        // Cannot fail: the parent slot is free and the new atom has no bonds yet.
        self.molecule
            .add_oriented_bond(from, parent_slot, child, 0, direction)?;
        self.layout[from.index()].directions.push(direction);

        debug!(%from, %child, %direction, parent_slot, "Grew bond");
        Ok(child)
    }

    /// Changes the label of an atom; see [`Molecule::relabel`].
    pub fn relabel(&mut self, id: AtomId, label: &str) -> Result<(), SketchError> {
        self.molecule.relabel(id, label)?;
        Ok(())
    }

    /// The tripod of directions fixed by the atom's first bond.
    pub fn candidate_directions(&self, id: AtomId) -> Result<[BondDirection; 3], SketchError> {
        Ok(self.molecule.atom(id)?.candidate_directions()?)
    }

    /// Directions a new bond from `id` may still be drawn in.
    ///
    /// An atom without bonds may grow in any of the six directions. After that
    /// the choice is limited to the unused members of its tripod, and a
    /// saturated atom offers none.
    pub fn available_directions(&self, id: AtomId) -> Result<Vec<BondDirection>, SketchError> {
        let atom = self.molecule.atom(id)?;
        if atom.is_saturated() {
            return Ok(Vec::new());
        }

        let offered = if atom.has_bond(0)? {
            atom.candidate_directions()?.to_vec()
        } else {
            BondDirection::ALL.to_vec()
        };
        let used = &self.layout(id)?.directions;

        Ok(offered
            .into_iter()
            .filter(|direction| !used.contains(direction))
            .collect())
    }

    pub fn label_visible(&self, id: AtomId) -> Result<bool, SketchError> {
        Ok(self.molecule.atom(id)?.label_visible())
    }
}
