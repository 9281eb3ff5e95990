//! # Core Module
//!
//! The stateless foundation of the library: the molecular graph model, the
//! label to bonding-capacity table, and the bond-direction geometry used to
//! place newly drawn atoms.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds and the molecule that owns them
//! - **Bonding Capacity** ([`valence`]) - How many slots each element label provides
//! - **Placement Geometry** ([`geometry`]) - Direction codes, displacement vectors and candidate tripods

pub mod geometry;
pub mod models;
pub mod valence;
