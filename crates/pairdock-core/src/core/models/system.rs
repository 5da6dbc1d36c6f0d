use super::atom::Atom;
use super::chain::Chain;
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::Residue;
use slotmap::SlotMap;
use std::collections::HashMap;

/// A complete molecular structure: chains of residues of atoms.
///
/// This is the input side of the scoring pipeline. Traversal order is
/// significant for downstream object/coordinate alignment, so chains are
/// walked in the order they were added and residues in the order they were
/// added to their chain — the order of the source structure file.
///
/// The mutation API is construction-only; once a structure has been handed to
/// the scoring adapter it is treated as read-only.
#[derive(Debug, Clone, Default)]
pub struct MolecularSystem {
    atoms: SlotMap<AtomId, Atom>,
    residues: SlotMap<ResidueId, Residue>,
    chains: SlotMap<ChainId, Chain>,
    /// Chain IDs in insertion order, driving deterministic traversal.
    chain_order: Vec<ChainId>,
    residue_id_map: HashMap<(ChainId, isize), ResidueId>,
    chain_id_map: HashMap<char, ChainId>,
}

impl MolecularSystem {
    /// Creates a new, empty molecular system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an atom by its ID, or `None` if it does not exist.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Retrieves a residue by its ID, or `None` if it does not exist.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Retrieves a chain by its ID, or `None` if it does not exist.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns an iterator over all chains in insertion order.
    pub fn chains_iter(&self) -> impl Iterator<Item = &Chain> {
        self.chain_order.iter().filter_map(|&id| self.chains.get(id))
    }

    /// Total number of residues in the system.
    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Finds a chain ID by its single-character identifier.
    pub fn find_chain_by_id(&self, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&id).copied()
    }

    /// Finds a residue ID by its chain ID and residue sequence number.
    pub fn find_residue_by_id(
        &self,
        chain_id: ChainId,
        residue_number: isize,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, residue_number))
            .copied()
    }

    /// Adds a new chain to the system or returns the existing one.
    ///
    /// Idempotent: if a chain with the given identifier already exists, its
    /// ID is returned without creating a duplicate.
    pub fn add_chain(&mut self, id: char) -> ChainId {
        if let Some(&chain_id) = self.chain_id_map.get(&id) {
            return chain_id;
        }
        let chain_id = self.chains.insert(Chain::new(id));
        self.chain_id_map.insert(id, chain_id);
        self.chain_order.push(chain_id);
        chain_id
    }

    /// Adds a new residue to a chain or returns the existing one.
    ///
    /// Idempotent on `(chain_id, residue_number)`. Returns `None` if the
    /// chain does not exist.
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, residue_number);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(residue_number, name, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a specific residue.
    ///
    /// Returns `None` if the residue does not exist.
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, atom: Atom) -> Option<AtomId> {
        if !self.residues.contains_key(residue_id) {
            return None;
        }

        let name = atom.name.clone();
        let atom_id = self.atoms.insert(atom);

        let residue = self.residues.get_mut(residue_id)?;
        residue.add_atom(&name, atom_id);

        Some(atom_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn add_chain_is_idempotent() {
        let mut system = MolecularSystem::new();
        let first = system.add_chain('A');
        let second = system.add_chain('A');
        assert_eq!(first, second);
        assert_eq!(system.chains_iter().count(), 1);
    }

    #[test]
    fn chains_iterate_in_insertion_order() {
        let mut system = MolecularSystem::new();
        system.add_chain('B');
        system.add_chain('A');
        system.add_chain('C');
        let ids: Vec<_> = system.chains_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!['B', 'A', 'C']);
    }

    #[test]
    fn add_residue_registers_in_chain_and_lookup_map() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A');
        let residue_id = system.add_residue(chain_id, 7, "GLY").unwrap();

        assert_eq!(system.find_residue_by_id(chain_id, 7), Some(residue_id));
        assert_eq!(system.chain(chain_id).unwrap().residues(), &[residue_id]);
        assert_eq!(system.residue(residue_id).unwrap().name, "GLY");
        assert_eq!(system.residue_count(), 1);
    }

    #[test]
    fn add_residue_fails_for_missing_chain() {
        let mut system = MolecularSystem::new();
        assert!(system.add_residue(ChainId::default(), 1, "ALA").is_none());
    }

    #[test]
    fn add_atom_to_residue_registers_name_lookup() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A');
        let residue_id = system.add_residue(chain_id, 1, "ALA").unwrap();
        let atom = Atom::new("CA", residue_id, Point3::new(1.0, 2.0, 3.0));

        let atom_id = system.add_atom_to_residue(residue_id, atom).unwrap();

        let residue = system.residue(residue_id).unwrap();
        assert_eq!(residue.get_atom_id_by_name("CA"), Some(atom_id));
        assert_eq!(
            system.atom(atom_id).unwrap().position,
            Point3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn add_atom_to_residue_fails_for_missing_residue() {
        let mut system = MolecularSystem::new();
        let atom = Atom::new("CA", ResidueId::default(), Point3::origin());
        assert!(
            system
                .add_atom_to_residue(ResidueId::default(), atom)
                .is_none()
        );
    }

    #[test]
    fn residues_within_a_chain_keep_file_order() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A');
        let r3 = system.add_residue(chain_id, 3, "ALA").unwrap();
        let r1 = system.add_residue(chain_id, 1, "GLY").unwrap();
        let r2 = system.add_residue(chain_id, 2, "SER").unwrap();
        assert_eq!(system.chain(chain_id).unwrap().residues(), &[r3, r1, r2]);
    }
}
