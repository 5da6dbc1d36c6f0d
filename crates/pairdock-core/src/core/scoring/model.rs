use crate::core::models::residue::ResidueType;
use nalgebra::Point3;
use thiserror::Error;

/// A coordinate sequence disagrees with the model's residue count.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Coordinate sequence has {coordinates} points but the model carries {objects} residues")]
pub struct ShapeMismatchError {
    pub coordinates: usize,
    pub objects: usize,
}

/// Per-residue descriptor inside a [`ScoringModel`].
///
/// Fixed-shape on purpose: the residue type drives table lookup, and the
/// chain/sequence provenance is the minimal metadata residue-level
/// post-processing needs. Full atomic detail never enters the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringResidue {
    /// Type index into the residue alphabet (drives potential lookup).
    pub residue_type: ResidueType,
    /// Identifier of the chain the residue came from.
    pub chain_id: char,
    /// Residue sequence number from the source structure.
    pub residue_number: isize,
}

/// The reduced per-molecule representation the scorer consumes.
///
/// `objects` and every pose's coordinate sequence are aligned 1:1 by index;
/// that alignment is the load-bearing invariant of the whole scoring path.
/// Pose 0 holds the coordinates the model was built from; alternate poses
/// (e.g. conformers) can be attached with [`add_pose`](Self::add_pose)
/// without rebuilding the per-residue metadata.
///
/// Built once per structure, read-only thereafter; the engine never mutates
/// a model it scores.
#[derive(Debug, Clone)]
pub struct ScoringModel {
    objects: Vec<ScoringResidue>,
    coordinates: Vec<Vec<Point3<f64>>>,
    skipped_residues: usize,
}

impl ScoringModel {
    pub(crate) fn new(
        objects: Vec<ScoringResidue>,
        pose: Vec<Point3<f64>>,
        skipped_residues: usize,
    ) -> Self {
        debug_assert_eq!(objects.len(), pose.len());
        Self {
            objects,
            coordinates: vec![pose],
            skipped_residues,
        }
    }

    /// Ordered per-residue descriptors, one per representative point.
    pub fn objects(&self) -> &[ScoringResidue] {
        &self.objects
    }

    /// Number of scorable residues in the model.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of pose coordinate sequences attached to the model.
    pub fn pose_count(&self) -> usize {
        self.coordinates.len()
    }

    /// Coordinate sequence for pose `index`, aligned 1:1 with
    /// [`objects`](Self::objects).
    pub fn pose(&self, index: usize) -> Option<&[Point3<f64>]> {
        self.coordinates.get(index).map(Vec::as_slice)
    }

    /// Attaches an alternate pose coordinate sequence, returning its index.
    ///
    /// Fails if the sequence length disagrees with the residue count.
    pub fn add_pose(&mut self, pose: Vec<Point3<f64>>) -> Result<usize, ShapeMismatchError> {
        if pose.len() != self.objects.len() {
            return Err(ShapeMismatchError {
                coordinates: pose.len(),
                objects: self.objects.len(),
            });
        }
        self.coordinates.push(pose);
        Ok(self.coordinates.len() - 1)
    }

    /// Count of input residues the adapter excluded while building this
    /// model (missing representative atom or name outside the alphabet).
    ///
    /// Callers expecting full coverage should assert on this instead of
    /// trusting the silent skip.
    pub fn skipped_residues(&self) -> usize {
        self.skipped_residues
    }
}
