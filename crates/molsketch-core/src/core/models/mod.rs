//! # Core Models Module
//!
//! Data structures for a molecule under construction.
//!
//! - [`ids`] - The [`AtomId`](ids::AtomId) handle, equal to an atom's insertion index
//! - [`atom`] - An atom with its fixed set of directional bonding slots
//! - [`topology`] - Bond values and bond orders
//! - [`molecule`] - The atom collection that keeps both halves of every bond consistent
//! - [`error`] - Failures reported by the model
//!
//! ## Usage
//!
//! ```
//! use molsketch::core::models::molecule::Molecule;
//!
//! let mut molecule = Molecule::new();
//! let a = molecule.add_atom("C")?;
//! let b = molecule.add_atom("C")?;
//! molecule.add_bond(a, 0, b, 0)?;
//!
//! assert_eq!(molecule.atom(a)?.degree(), 1);
//! # Ok::<(), molsketch::core::models::error::ModelError>(())
//! ```

pub mod atom;
pub mod error;
pub mod ids;
pub mod molecule;
pub mod topology;
