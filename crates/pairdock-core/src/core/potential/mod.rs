//! # Statistical Potential Module
//!
//! Residue-pair interaction energy tables derived from the Miyazawa-Jernigan
//! contact statistics, and their lookup semantics.
//!
//! The raw data source carries four statistically distinct sets (`MJ1`,
//! `MJ2`, `MJ2h`, `MJ3h`) over the same 20-residue alphabet; [`table`] loads
//! and validates them, and [`mj3h`] selects the single `MJ3h` matrix the
//! docking scorer uses. Tables are built once, immutable thereafter, and
//! shared read-only by every scoring call.

pub mod mj3h;
pub mod table;
