//! # Core Module
//!
//! The computational core of PairDock: molecular data models, statistical
//! potential tables, and the pairwise pose-scoring engine.
//!
//! ## Overview
//!
//! Scoring a docking pose proceeds in three stages, each owned by a submodule:
//!
//! - **Molecular Representation** ([`models`]) - Chains, residues, and atoms as
//!   read from an external structure parser
//! - **Statistical Potentials** ([`potential`]) - The Miyazawa-Jernigan
//!   residue-pair energy tables and their lookup semantics
//! - **Pose Scoring** ([`scoring`]) - Reduction of a structure to a per-residue
//!   scoring model, and the distance-gated pairwise summation over poses
//!
//! The potential table and the scoring models for a complex are built once per
//! docking run; only the pairwise summation runs per candidate pose.

pub mod models;
pub mod potential;
pub mod scoring;
