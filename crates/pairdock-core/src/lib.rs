//! # PairDock Core Library
//!
//! A library for scoring candidate rigid-body protein-protein docking poses with a
//! coarse, statistics-derived residue contact potential (the Miyazawa-Jernigan
//! MJ3h set).
//!
//! ## Architectural Philosophy
//!
//! The library separates the data it scores from the act of scoring:
//!
//! - **[`core::models`]: The Structure.** A minimal molecular representation
//!   (chains of residues of atoms) used only as input to model construction.
//!
//! - **[`core::potential`]: The Numbers.** Immutable residue-pair interaction
//!   tables, loaded once and injected wherever they are needed — never ambient
//!   global state.
//!
//! - **[`core::scoring`]: The Engine.** The adapter that reduces a structure to
//!   one representative point per residue, and the pure pairwise scorer that a
//!   pose-search driver calls once per candidate placement.
//!
//! Search drivers, coordinate transforms, and structure-file I/O are external
//! collaborators; this crate owns only the scoring contract.

pub mod core;
