use super::ids::{AtomId, ChainId};
use phf::{Map, phf_map};
use std::collections::HashMap;

/// One of the 20 canonical amino-acid types.
///
/// Variants are declared in alphabetical order of their three-letter codes
/// (ALA, ARG, ..., VAL). This ordering is the row/column ordering of every
/// [`potential table`](crate::core::potential) in the library and must never
/// change: table entry `(i, j)` is only meaningful if index `i` always names
/// the same residue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResidueType {
    Alanine,       // ALA
    Arginine,      // ARG
    Asparagine,    // ASN
    AsparticAcid,  // ASP
    Cysteine,      // CYS
    Glutamine,     // GLN
    GlutamicAcid,  // GLU
    Glycine,       // GLY
    Histidine,     // HIS
    Isoleucine,    // ILE
    Leucine,       // LEU
    Lysine,        // LYS
    Methionine,    // MET
    Phenylalanine, // PHE
    Proline,       // PRO
    Serine,        // SER
    Threonine,     // THR
    Tryptophan,    // TRP
    Tyrosine,      // TYR
    Valine,        // VAL
}

static THREE_LETTER_CODES: Map<&'static str, ResidueType> = phf_map! {
    "ALA" => ResidueType::Alanine,
    "ARG" => ResidueType::Arginine,
    "ASN" => ResidueType::Asparagine,
    "ASP" => ResidueType::AsparticAcid,
    "CYS" => ResidueType::Cysteine,
    "GLN" => ResidueType::Glutamine,
    "GLU" => ResidueType::GlutamicAcid,
    "GLY" => ResidueType::Glycine,
    "HIS" => ResidueType::Histidine,
    "ILE" => ResidueType::Isoleucine,
    "LEU" => ResidueType::Leucine,
    "LYS" => ResidueType::Lysine,
    "MET" => ResidueType::Methionine,
    "PHE" => ResidueType::Phenylalanine,
    "PRO" => ResidueType::Proline,
    "SER" => ResidueType::Serine,
    "THR" => ResidueType::Threonine,
    "TRP" => ResidueType::Tryptophan,
    "TYR" => ResidueType::Tyrosine,
    "VAL" => ResidueType::Valine,
};

impl ResidueType {
    /// Number of residue types in the alphabet.
    pub const COUNT: usize = 20;

    /// Every residue type, in alphabet (table index) order.
    pub const ALL: [ResidueType; Self::COUNT] = [
        ResidueType::Alanine,
        ResidueType::Arginine,
        ResidueType::Asparagine,
        ResidueType::AsparticAcid,
        ResidueType::Cysteine,
        ResidueType::Glutamine,
        ResidueType::GlutamicAcid,
        ResidueType::Glycine,
        ResidueType::Histidine,
        ResidueType::Isoleucine,
        ResidueType::Leucine,
        ResidueType::Lysine,
        ResidueType::Methionine,
        ResidueType::Phenylalanine,
        ResidueType::Proline,
        ResidueType::Serine,
        ResidueType::Threonine,
        ResidueType::Tryptophan,
        ResidueType::Tyrosine,
        ResidueType::Valine,
    ];

    /// Resolves a three-letter residue code (e.g. `"ALA"`).
    ///
    /// Surrounding whitespace is tolerated; codes are case-sensitive.
    /// Returns `None` for anything outside the fixed alphabet (modified
    /// residues, waters, hetero groups).
    pub fn from_three_letter(code: &str) -> Option<ResidueType> {
        THREE_LETTER_CODES.get(code.trim()).copied()
    }

    /// The row/column index of this residue type in a potential table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn three_letter(self) -> &'static str {
        match self {
            ResidueType::Alanine => "ALA",
            ResidueType::Arginine => "ARG",
            ResidueType::Asparagine => "ASN",
            ResidueType::AsparticAcid => "ASP",
            ResidueType::Cysteine => "CYS",
            ResidueType::Glutamine => "GLN",
            ResidueType::GlutamicAcid => "GLU",
            ResidueType::Glycine => "GLY",
            ResidueType::Histidine => "HIS",
            ResidueType::Isoleucine => "ILE",
            ResidueType::Leucine => "LEU",
            ResidueType::Lysine => "LYS",
            ResidueType::Methionine => "MET",
            ResidueType::Phenylalanine => "PHE",
            ResidueType::Proline => "PRO",
            ResidueType::Serine => "SER",
            ResidueType::Threonine => "THR",
            ResidueType::Tryptophan => "TRP",
            ResidueType::Tyrosine => "TYR",
            ResidueType::Valine => "VAL",
        }
    }
}

/// An amino-acid residue: a named, ordered group of atoms within a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    /// Residue sequence number from the source structure.
    pub id: isize,
    /// Name of the residue as read from the source (e.g., "ALA", "HOH").
    pub name: String,
    /// ID of the parent chain.
    pub chain_id: ChainId,
    pub(crate) atoms: Vec<AtomId>,
    atom_name_map: HashMap<String, AtomId>,
}

impl Residue {
    pub(crate) fn new(id: isize, name: &str, chain_id: ChainId) -> Self {
        Self {
            id,
            name: name.to_string(),
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.push(atom_id);
        self.atom_name_map.insert(atom_name.to_string(), atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn alphabet_has_twenty_types_in_code_order() {
        assert_eq!(ResidueType::ALL.len(), ResidueType::COUNT);
        for (index, residue_type) in ResidueType::ALL.iter().enumerate() {
            assert_eq!(residue_type.index(), index);
        }
        let codes: Vec<_> = ResidueType::ALL
            .iter()
            .map(|t| t.three_letter())
            .collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn from_three_letter_resolves_every_alphabet_code() {
        for residue_type in ResidueType::ALL {
            assert_eq!(
                ResidueType::from_three_letter(residue_type.three_letter()),
                Some(residue_type)
            );
        }
    }

    #[test]
    fn from_three_letter_boundary_indices_match_table_convention() {
        assert_eq!(ResidueType::from_three_letter("ALA").unwrap().index(), 0);
        assert_eq!(ResidueType::from_three_letter("ASP").unwrap().index(), 3);
        assert_eq!(ResidueType::from_three_letter("SER").unwrap().index(), 15);
        assert_eq!(ResidueType::from_three_letter("VAL").unwrap().index(), 19);
    }

    #[test]
    fn from_three_letter_rejects_codes_outside_the_alphabet() {
        assert_eq!(ResidueType::from_three_letter("HOH"), None);
        assert_eq!(ResidueType::from_three_letter("MSE"), None);
        assert_eq!(ResidueType::from_three_letter(""), None);
        assert_eq!(ResidueType::from_three_letter("ala"), None);
    }

    #[test]
    fn from_three_letter_trims_whitespace() {
        assert_eq!(
            ResidueType::from_three_letter(" GLY "),
            Some(ResidueType::Glycine)
        );
    }

    #[test]
    fn new_residue_initializes_fields_correctly() {
        let chain_id = ChainId::default();
        let residue = Residue::new(10, "GLY", chain_id);
        assert_eq!(residue.id, 10);
        assert_eq!(residue.name, "GLY");
        assert_eq!(residue.chain_id, chain_id);
        assert!(residue.atoms().is_empty());
        assert!(residue.get_atom_id_by_name("CA").is_none());
    }

    #[test]
    fn add_atom_adds_atom_and_maps_name() {
        let mut residue = Residue::new(5, "ALA", ChainId::default());
        let atom_id = dummy_atom_id(42);
        residue.add_atom("CA", atom_id);
        assert_eq!(residue.atoms(), &[atom_id]);
        assert_eq!(residue.get_atom_id_by_name("CA"), Some(atom_id));
    }

    #[test]
    fn get_atom_id_by_name_returns_none_for_unknown_name() {
        let mut residue = Residue::new(11, "LEU", ChainId::default());
        residue.add_atom("CD1", dummy_atom_id(300));
        assert!(residue.get_atom_id_by_name("CD2").is_none());
    }
}
