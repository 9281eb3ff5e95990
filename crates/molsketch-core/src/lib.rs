//! # molsketch
//!
//! The model behind an interactive 2D chemical-structure sketcher: a molecular
//! graph whose atoms carry capacity-constrained, directional bonding slots,
//! plus the geometry convention that places new atoms consistently with those
//! slots.
//!
//! ## Layers
//!
//! - **[`core`]: The Foundation.** The `Molecule`/`Atom` graph, the valence
//!   table, and the pure bond-direction geometry.
//!
//! - **[`workflows`]: The Public API.** `SketchSession` ties the graph to a 2D
//!   layout and implements the draw-an-atom, grow-a-bond interaction that a
//!   drawing front end drives.
//!
//! Rendering, pointer handling and file formats are left to the caller.

pub mod core;
pub mod workflows;
