use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents an atom in a molecular structure.
///
/// Only the fields the scoring pipeline reads are carried: the atom name
/// (used to select a residue's representative point) and its 3D position.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            residue_id,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_name_and_position() {
        let residue_id = ResidueId::default();
        let atom = Atom::new("CA", residue_id, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.name, "CA");
        assert_eq!(atom.residue_id, residue_id);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new("N", ResidueId::default(), Point3::origin());
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
