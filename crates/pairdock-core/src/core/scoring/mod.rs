//! # Pose Scoring Module
//!
//! The per-pose evaluation path of the library.
//!
//! A [`model::ScoringModel`] is built once per molecule by the [`adapter`]:
//! one representative point and one residue-type code per scorable residue.
//! The [`engine::Mj3hScorer`] then consumes a receptor/ligand model pair plus
//! pose-specific coordinate slices and returns a single scalar energy — the
//! distance-gated, cutoff-aware double sum over residue pairs.
//!
//! Every type here is read-only after construction, so scoring calls may run
//! concurrently from parallel workers without locking.

pub mod adapter;
pub mod engine;
pub mod model;
