use super::model::ScoringModel;
use crate::core::potential::mj3h::Mj3h;
use nalgebra::Point3;
use std::fmt;
use thiserror::Error;

/// Which molecule of a scoring call an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Receptor,
    Ligand,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Receptor => write!(f, "Receptor"),
            Side::Ligand => write!(f, "Ligand"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("{side} pose supplies {coordinates} coordinates for {objects} residues")]
    ShapeMismatch {
        side: Side,
        coordinates: usize,
        objects: usize,
    },
}

/// The pairwise MJ3h pose scorer.
///
/// Holds the injected, immutable potential and nothing else: every call is a
/// pure function of its arguments, so one scorer may be shared by any number
/// of parallel pose-evaluation workers.
#[derive(Debug, Clone)]
pub struct Mj3hScorer {
    potential: Mj3h,
}

impl Mj3hScorer {
    /// Maximum residue-pair distance (Å) at which a contact is counted.
    pub const INTERACTION_CUTOFF: f64 = 7.0;

    /// Floor (Å) applied to pair distances before any distance-gated logic,
    /// so near-zero separations can never feed a diverging term.
    pub const MIN_CONTACT_DISTANCE: f64 = 2.0;

    const CUTOFF_SQUARED: f64 = Self::INTERACTION_CUTOFF * Self::INTERACTION_CUTOFF;
    const MIN_CONTACT_SQUARED: f64 = Self::MIN_CONTACT_DISTANCE * Self::MIN_CONTACT_DISTANCE;

    pub fn new(potential: Mj3h) -> Self {
        Self { potential }
    }

    pub fn potential(&self) -> &Mj3h {
        &self.potential
    }

    /// Scores one candidate pose of a receptor/ligand pair.
    ///
    /// The result is the raw double sum, receptor-major / ligand-minor, over
    /// every ordered receptor-ligand residue pair exactly once: pairs beyond
    /// [`INTERACTION_CUTOFF`](Self::INTERACTION_CUTOFF) contribute zero,
    /// pairs within it contribute the MJ3h table value for their residue
    /// types, with the pair distance clamped from below to
    /// [`MIN_CONTACT_DISTANCE`](Self::MIN_CONTACT_DISTANCE) first. No
    /// post-hoc rescaling is applied.
    ///
    /// Deterministic for fixed inputs; no retries, no partial results.
    pub fn score(
        &self,
        receptor: &ScoringModel,
        receptor_coords: &[Point3<f64>],
        ligand: &ScoringModel,
        ligand_coords: &[Point3<f64>],
    ) -> Result<f64, ScoringError> {
        if receptor_coords.len() != receptor.len() {
            return Err(ScoringError::ShapeMismatch {
                side: Side::Receptor,
                coordinates: receptor_coords.len(),
                objects: receptor.len(),
            });
        }
        if ligand_coords.len() != ligand.len() {
            return Err(ScoringError::ShapeMismatch {
                side: Side::Ligand,
                coordinates: ligand_coords.len(),
                objects: ligand.len(),
            });
        }

        let mut energy = 0.0;
        for (rec, rec_pos) in receptor.objects().iter().zip(receptor_coords) {
            for (lig, lig_pos) in ligand.objects().iter().zip(ligand_coords) {
                // Clamp before the gate: nothing downstream ever sees a
                // separation below the contact floor.
                let dist_squared = (lig_pos - rec_pos)
                    .norm_squared()
                    .max(Self::MIN_CONTACT_SQUARED);
                if dist_squared <= Self::CUTOFF_SQUARED {
                    energy += self.potential.energy(rec.residue_type, lig.residue_type);
                }
            }
        }

        Ok(energy)
    }
}
