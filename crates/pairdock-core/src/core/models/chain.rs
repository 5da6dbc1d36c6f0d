use super::ids::ResidueId;

/// A single polypeptide chain: an ordered list of residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// Chain identifier (e.g., 'A', 'B').
    pub id: char,
    /// Ordered list of residue IDs belonging to this chain.
    pub(crate) residues: Vec<ResidueId>,
}

impl Chain {
    pub(crate) fn new(id: char) -> Self {
        Self {
            id,
            residues: Vec::new(),
        }
    }

    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }
}
