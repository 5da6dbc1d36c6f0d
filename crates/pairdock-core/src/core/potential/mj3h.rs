use super::table::{MjPotentialSet, PotentialMatrix, TableError, UnknownResidueError};
use crate::core::models::residue::ResidueType;

/// The MJ3h residue-pair contact potential.
///
/// Selects exactly one 20×20 matrix (the `MJ3h` set) from the raw
/// Miyazawa-Jernigan source. Built once, immutable, and shared read-only by
/// every scoring call.
#[derive(Debug, Clone)]
pub struct Mj3h {
    matrix: PotentialMatrix,
}

impl Mj3h {
    /// Name of the raw set this variant selects.
    pub const RAW_SET_NAME: &'static str = "MJ3h";

    /// Builds the potential from the canonical data shipped with the crate.
    pub fn new() -> Result<Self, TableError> {
        Self::from_set(&MjPotentialSet::embedded()?)
    }

    /// Selects the `MJ3h` matrix from an already-loaded raw set.
    pub fn from_set(set: &MjPotentialSet) -> Result<Self, TableError> {
        let matrix = set
            .matrix(Self::RAW_SET_NAME)
            .ok_or_else(|| TableError::MissingMatrix(Self::RAW_SET_NAME.to_string()))?
            .clone();
        Ok(Self { matrix })
    }

    /// Contact energy for a typed residue pair. Symmetric and O(1).
    #[inline]
    pub fn energy(&self, a: ResidueType, b: ResidueType) -> f64 {
        self.matrix.energy(a, b)
    }

    /// Contact energy looked up by three-letter residue codes.
    pub fn contact_energy(&self, code_a: &str, code_b: &str) -> Result<f64, UnknownResidueError> {
        self.matrix.lookup(code_a, code_b)
    }

    pub fn matrix(&self) -> &PotentialMatrix {
        &self.matrix
    }
}
