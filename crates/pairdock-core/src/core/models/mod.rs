//! # Core Models Module
//!
//! Minimal molecular data structures used as input to scoring-model
//! construction.
//!
//! The representation deliberately stops at what the scorer needs: atoms with
//! names and coordinates, residues with names and named-atom lookup, chains
//! with ordered residues, and a [`system::MolecularSystem`] tying them
//! together with stable IDs. Bonds, charges, and force-field metadata belong
//! to richer models upstream and are not carried here.
//!
//! - [`atom`] - Individual atom with a name and 3D position
//! - [`residue`] - Residue records and the fixed 20-residue type alphabet
//! - [`chain`] - Ordered residue containers
//! - [`system`] - The complete structure with insertion-ordered traversal
//! - [`ids`] - Stable identifier types for atoms, residues, and chains

pub mod atom;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod system;
