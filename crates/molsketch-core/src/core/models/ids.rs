use std::fmt;

/// Identifier of an atom within a [`Molecule`](super::molecule::Molecule).
///
/// Ids are handed out by the owning molecule in insertion order, so the
/// wrapped value is always the atom's index in the molecule's atom list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AtomId(usize);

impl AtomId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for AtomId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_id_exposes_its_index() {
        assert_eq!(AtomId::new(7).index(), 7);
        assert_eq!(AtomId::from(3), AtomId::new(3));
    }

    #[test]
    fn atom_ids_order_by_insertion_index() {
        assert!(AtomId::new(0) < AtomId::new(1));
        assert_eq!(AtomId::default(), AtomId::new(0));
    }

    #[test]
    fn display_prefixes_index_with_hash() {
        assert_eq!(AtomId::new(12).to_string(), "#12");
    }
}
