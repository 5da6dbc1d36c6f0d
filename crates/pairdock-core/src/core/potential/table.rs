use crate::core::models::residue::ResidueType;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Size of the residue alphabet every matrix is indexed by.
pub const ALPHABET_SIZE: usize = ResidueType::COUNT;

/// Names of the four raw statistical sets a canonical source must provide.
pub const RAW_SET_NAMES: [&str; 4] = ["MJ1", "MJ2", "MJ2h", "MJ3h"];

/// Canonical potential data shipped with the crate.
const EMBEDDED_POTENTIALS: &str = include_str!("../../../data/mj_potentials.toml");

#[derive(Debug, Error)]
pub enum TableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Expected exactly {expected} potential matrices, found {found}")]
    MatrixCount { expected: usize, found: usize },
    #[error("Potential set '{0}' is missing from the source")]
    MissingMatrix(String),
    #[error("Matrix '{name}' has {rows} rows, expected {expected}")]
    RowCount {
        name: String,
        rows: usize,
        expected: usize,
    },
    #[error("Matrix '{name}' row {row} has {columns} columns, expected {expected}")]
    ColumnCount {
        name: String,
        row: usize,
        columns: usize,
        expected: usize,
    },
}

/// A residue code could not be resolved against the 20-residue alphabet.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Residue code '{0}' is not in the 20-residue alphabet")]
pub struct UnknownResidueError(pub String);

/// A square, symmetric matrix of residue-pair interaction energies.
///
/// Rows and columns are indexed by [`ResidueType`] alphabet order. Values are
/// fixed at load time and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialMatrix {
    values: Box<[[f64; ALPHABET_SIZE]; ALPHABET_SIZE]>,
}

impl PotentialMatrix {
    fn from_rows(name: &str, rows: &[Vec<f64>]) -> Result<Self, TableError> {
        if rows.len() != ALPHABET_SIZE {
            return Err(TableError::RowCount {
                name: name.to_string(),
                rows: rows.len(),
                expected: ALPHABET_SIZE,
            });
        }

        let mut values = Box::new([[0.0; ALPHABET_SIZE]; ALPHABET_SIZE]);
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != ALPHABET_SIZE {
                return Err(TableError::ColumnCount {
                    name: name.to_string(),
                    row: row_index,
                    columns: row.len(),
                    expected: ALPHABET_SIZE,
                });
            }
            values[row_index].copy_from_slice(row);
        }

        Ok(Self { values })
    }

    /// O(1) energy lookup for a typed residue pair.
    #[inline]
    pub fn energy(&self, a: ResidueType, b: ResidueType) -> f64 {
        self.values[a.index()][b.index()]
    }

    /// Energy lookup by three-letter residue codes.
    ///
    /// Fails if either code is outside the fixed alphabet. The typed
    /// [`energy`](Self::energy) path is preferred in hot loops.
    pub fn lookup(&self, code_a: &str, code_b: &str) -> Result<f64, UnknownResidueError> {
        let a = ResidueType::from_three_letter(code_a)
            .ok_or_else(|| UnknownResidueError(code_a.to_string()))?;
        let b = ResidueType::from_three_letter(code_b)
            .ok_or_else(|| UnknownResidueError(code_b.to_string()))?;
        Ok(self.energy(a, b))
    }
}

#[derive(Debug, Deserialize)]
struct RawTableFile {
    matrices: HashMap<String, Vec<Vec<f64>>>,
}

/// The four raw Miyazawa-Jernigan statistical sets, loaded and shape-checked.
///
/// This is the generic multi-matrix source; scoring variants select the
/// single matrix they need from it (see
/// [`Mj3h`](crate::core::potential::mj3h::Mj3h)).
#[derive(Debug, Clone)]
pub struct MjPotentialSet {
    matrices: HashMap<String, PotentialMatrix>,
}

impl MjPotentialSet {
    /// Loads the canonical potential data embedded in the crate.
    pub fn embedded() -> Result<Self, TableError> {
        Self::parse(EMBEDDED_POTENTIALS, "<embedded>")
    }

    /// Loads a potential source from disk.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path).map_err(|e| TableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    fn parse(content: &str, origin: &str) -> Result<Self, TableError> {
        let raw: RawTableFile = toml::from_str(content).map_err(|e| TableError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        if raw.matrices.len() != RAW_SET_NAMES.len() {
            return Err(TableError::MatrixCount {
                expected: RAW_SET_NAMES.len(),
                found: raw.matrices.len(),
            });
        }

        let mut matrices = HashMap::new();
        for &name in RAW_SET_NAMES.iter() {
            let rows = raw
                .matrices
                .get(name)
                .ok_or_else(|| TableError::MissingMatrix(name.to_string()))?;
            matrices.insert(name.to_string(), PotentialMatrix::from_rows(name, rows)?);
        }

        Ok(Self { matrices })
    }

    /// Number of raw matrices in the set.
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Retrieves a raw matrix by its set name (e.g. `"MJ3h"`).
    pub fn matrix(&self, name: &str) -> Option<&PotentialMatrix> {
        self.matrices.get(name)
    }
}
