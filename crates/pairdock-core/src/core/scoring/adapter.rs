use super::model::{ScoringModel, ScoringResidue};
use crate::core::models::residue::ResidueType;
use crate::core::models::system::MolecularSystem;
use thiserror::Error;
use tracing::{debug, trace};

/// Atom selected as the single representative point of each residue.
pub const REPRESENTATIVE_ATOM_NAME: &str = "CA";

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Structure yields no scorable residues ({skipped} residues skipped)")]
    EmptyModel { skipped: usize },
}

/// Reduces a full atomic structure to the [`ScoringModel`] the scorer needs.
///
/// Chains are walked in structure order and residues in chain order; the
/// resulting object/coordinate alignment is what every later pose must match.
/// For each residue the Cα atom is taken as its representative point and the
/// residue name is resolved against the fixed 20-residue alphabet.
///
/// Residues without a usable representative atom, and residues outside the
/// alphabet (waters, hetero groups, modified residues), are excluded without
/// failing the build; the exclusion count is recorded on the model so callers
/// can assert expected coverage. Fails only when nothing at all qualifies —
/// a model with no scorable residues must be rejected early rather than
/// silently scoring to zero.
pub fn build_scoring_model(system: &MolecularSystem) -> Result<ScoringModel, AdapterError> {
    let mut objects = Vec::new();
    let mut coordinates = Vec::new();
    let mut skipped = 0usize;

    for chain in system.chains_iter() {
        for &residue_id in chain.residues() {
            let Some(residue) = system.residue(residue_id) else {
                continue;
            };

            let Some(residue_type) = ResidueType::from_three_letter(&residue.name) else {
                trace!(chain = %chain.id, residue = residue.id, name = %residue.name,
                    "residue name outside the alphabet, skipping");
                skipped += 1;
                continue;
            };

            let atom = residue
                .get_atom_id_by_name(REPRESENTATIVE_ATOM_NAME)
                .and_then(|atom_id| system.atom(atom_id));
            let Some(atom) = atom else {
                trace!(chain = %chain.id, residue = residue.id, name = %residue.name,
                    "residue lacks a representative atom, skipping");
                skipped += 1;
                continue;
            };

            objects.push(ScoringResidue {
                residue_type,
                chain_id: chain.id,
                residue_number: residue.id,
            });
            coordinates.push(atom.position);
        }
    }

    if objects.is_empty() {
        return Err(AdapterError::EmptyModel { skipped });
    }

    if skipped > 0 {
        debug!(
            kept = objects.len(),
            skipped, "excluded residues while building scoring model"
        );
    }

    Ok(ScoringModel::new(objects, coordinates, skipped))
}
