use std::collections::HashSet;
use std::ops::Range;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DeletionError {
    #[error("Invalid atom index {index}: structure has {total} atoms")]
    AtomIndexOutOfRange { index: isize, total: usize },

    #[error("Atom index {index} was requested more than once")]
    DuplicateAtomIndex { index: usize },

    #[error(
        "Inconsistent structure: {positions} position lines and {flags} flag sets for {total} counted atoms"
    )]
    InconsistentRecord {
        positions: usize,
        flags: usize,
        total: usize,
    },
}

/// An in-memory POSCAR/CONTCAR structure.
///
/// Lattice vectors and atom lines are kept as raw text so that an edited file
/// reproduces the original numbers byte-for-byte. Atoms are stored in global
/// order: the first `atom_counts[0]` positions belong to `elements[0]`, the
/// next `atom_counts[1]` to `elements[1]`, and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct Poscar {
    pub title: String,
    pub scale_factor: f64,
    pub lattice_vectors: [String; 3],
    pub elements: Vec<String>,
    pub atom_counts: Vec<usize>,
    pub selective_dynamics: bool,
    pub positions: Vec<String>,
    /// Trailing flag tokens of each atom line. Empty unless `selective_dynamics` is set.
    pub selective_flags: Vec<Vec<String>>,
}

impl Poscar {
    pub fn total_atoms(&self) -> usize {
        self.atom_counts.iter().sum()
    }

    /// Returns the species (block) index owning the atom at global position `index`.
    pub fn species_of(&self, index: usize) -> Option<usize> {
        let mut block_end = 0;
        for (species, &count) in self.atom_counts.iter().enumerate() {
            block_end += count;
            if index < block_end {
                return Some(species);
            }
        }
        None
    }

    /// Iterates over each species label together with the global index range of its block.
    pub fn species_ranges(&self) -> impl Iterator<Item = (&str, Range<usize>)> + '_ {
        let mut start = 0;
        self.elements
            .iter()
            .zip(&self.atom_counts)
            .map(move |(element, &count)| {
                let range = start..start + count;
                start += count;
                (element.as_str(), range)
            })
    }

    /// Removes the atoms at the given 0-based global indices and returns the edited structure.
    ///
    /// Every index is validated against the current atom total before anything is removed,
    /// so a failed call never yields a half-edited record. Indices may be given in any order
    /// but must be unique. Species left with zero atoms are dropped from both `elements` and
    /// `atom_counts`; the relative order of the remaining species is unchanged.
    ///
    /// # Errors
    ///
    /// - [`DeletionError::AtomIndexOutOfRange`] if an index is negative or `>= total_atoms()`.
    /// - [`DeletionError::DuplicateAtomIndex`] if an index appears twice.
    /// - [`DeletionError::InconsistentRecord`] if the position or flag lists disagree with the counts.
    pub fn delete_atoms(&self, indices: &[isize]) -> Result<Self, DeletionError> {
        let total = self.total_atoms();
        let expected_flags = if self.selective_dynamics { total } else { 0 };
        if self.positions.len() != total || self.selective_flags.len() != expected_flags {
            return Err(DeletionError::InconsistentRecord {
                positions: self.positions.len(),
                flags: self.selective_flags.len(),
                total,
            });
        }

        let mut seen = HashSet::with_capacity(indices.len());
        let mut targets = Vec::with_capacity(indices.len());
        for &index in indices {
            let (atom, species) = usize::try_from(index)
                .ok()
                .and_then(|atom| self.species_of(atom).map(|species| (atom, species)))
                .ok_or(DeletionError::AtomIndexOutOfRange { index, total })?;
            if !seen.insert(atom) {
                return Err(DeletionError::DuplicateAtomIndex { index: atom });
            }
            targets.push((atom, species));
        }

        // Highest index first, so each removal leaves the lower indices in place.
        targets.sort_unstable_by(|a, b| b.0.cmp(&a.0));

        let mut edited = self.clone();
        for (atom, species) in targets {
            trace!(atom, species, "Removing atom");
            edited.positions.remove(atom);
            if edited.selective_dynamics {
                edited.selective_flags.remove(atom);
            }
            edited.atom_counts[species] -= 1;
        }
        edited.drop_empty_species();

        Ok(edited)
    }

    fn drop_empty_species(&mut self) {
        let elements = std::mem::take(&mut self.elements);
        let counts = std::mem::take(&mut self.atom_counts);
        (self.elements, self.atom_counts) = elements
            .into_iter()
            .zip(counts)
            .filter(|&(_, count)| count > 0)
            .unzip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lattice() -> [String; 3] {
        [
            "1.0 0.0 0.0".to_string(),
            "0.0 1.0 0.0".to_string(),
            "0.0 0.0 1.0".to_string(),
        ]
    }

    fn structure(elements: &[&str], counts: &[usize]) -> Poscar {
        let total: usize = counts.iter().sum();
        Poscar {
            title: "test".to_string(),
            scale_factor: 1.0,
            lattice_vectors: lattice(),
            elements: elements.iter().map(|e| e.to_string()).collect(),
            atom_counts: counts.to_vec(),
            selective_dynamics: false,
            positions: (0..total).map(|i| format!("p{}", i)).collect(),
            selective_flags: Vec::new(),
        }
    }

    fn with_flags(mut poscar: Poscar) -> Poscar {
        poscar.selective_dynamics = true;
        poscar.selective_flags = (0..poscar.positions.len())
            .map(|i| vec![format!("T{}", i), "F".to_string(), "F".to_string()])
            .collect();
        poscar
    }

    #[test]
    fn species_of_follows_block_boundaries() {
        let poscar = structure(&["A", "B", "C"], &[2, 3, 2]);

        let owners: Vec<_> = (0..8).map(|i| poscar.species_of(i)).collect();

        assert_eq!(
            owners,
            vec![
                Some(0),
                Some(0),
                Some(1),
                Some(1),
                Some(1),
                Some(2),
                Some(2),
                None
            ]
        );
    }

    #[test]
    fn species_of_skips_empty_blocks() {
        let poscar = structure(&["A", "B", "C"], &[1, 0, 1]);

        assert_eq!(poscar.species_of(0), Some(0));
        assert_eq!(poscar.species_of(1), Some(2));
    }

    #[test]
    fn species_ranges_cover_all_atoms_in_order() {
        let poscar = structure(&["Fe", "O"], &[2, 3]);

        let ranges: Vec<_> = poscar.species_ranges().collect();

        assert_eq!(ranges, vec![("Fe", 0..2), ("O", 2..5)]);
    }

    #[test]
    fn deletes_requested_atoms_and_renumbers_counts() {
        let poscar = structure(&["A", "B"], &[2, 2]);

        let edited = poscar.delete_atoms(&[1, 3]).unwrap();

        assert_eq!(edited.atom_counts, vec![1, 1]);
        assert_eq!(edited.elements, vec!["A", "B"]);
        assert_eq!(edited.positions, vec!["p0", "p2"]);
    }

    #[test]
    fn removes_exactly_the_atoms_at_the_requested_global_positions() {
        let poscar = structure(&["A", "B", "C"], &[2, 3, 2]);

        let edited = poscar.delete_atoms(&[5, 2]).unwrap();

        assert_eq!(edited.atom_counts, vec![2, 2, 1]);
        assert_eq!(edited.positions, vec!["p0", "p1", "p3", "p4", "p6"]);
    }

    #[test]
    fn counts_stay_consistent_with_positions_after_deletion() {
        let poscar = structure(&["A", "B", "C", "D"], &[3, 1, 4, 2]);
        let indices = [9, 0, 4, 3, 7];

        let edited = poscar.delete_atoms(&indices).unwrap();

        assert_eq!(edited.total_atoms(), poscar.total_atoms() - indices.len());
        assert_eq!(edited.positions.len(), edited.total_atoms());
    }

    #[test]
    fn drops_emptied_species_and_preserves_order_of_the_rest() {
        let poscar = structure(&["A", "B", "C"], &[2, 1, 2]);

        let edited = poscar.delete_atoms(&[2]).unwrap();

        assert_eq!(edited.elements, vec!["A", "C"]);
        assert_eq!(edited.atom_counts, vec![2, 2]);
        assert_eq!(edited.positions, vec!["p0", "p1", "p3", "p4"]);
    }

    #[test]
    fn removes_selective_flags_alongside_positions() {
        let poscar = with_flags(structure(&["A", "B"], &[2, 2]));

        let edited = poscar.delete_atoms(&[0, 2]).unwrap();

        assert_eq!(edited.positions, vec!["p1", "p3"]);
        assert_eq!(edited.selective_flags.len(), 2);
        assert_eq!(edited.selective_flags[0][0], "T1");
        assert_eq!(edited.selective_flags[1][0], "T3");
    }

    #[test]
    fn deletion_does_not_modify_the_source_record() {
        let poscar = structure(&["A", "B"], &[2, 2]);
        let before = poscar.clone();

        let _ = poscar.delete_atoms(&[0, 1, 2]).unwrap();

        assert_eq!(poscar, before);
    }

    #[test]
    fn empty_index_list_returns_an_identical_record() {
        let poscar = structure(&["A"], &[3]);

        let edited = poscar.delete_atoms(&[]).unwrap();

        assert_eq!(edited, poscar);
    }

    #[test]
    fn rejects_index_equal_to_total() {
        let poscar = structure(&["A", "B", "C"], &[2, 3, 2]);

        let result = poscar.delete_atoms(&[2, 5, 7]);

        assert_eq!(
            result,
            Err(DeletionError::AtomIndexOutOfRange { index: 7, total: 7 })
        );
    }

    #[test]
    fn rejects_negative_index() {
        let poscar = structure(&["A"], &[2]);

        let result = poscar.delete_atoms(&[-1]);

        assert_eq!(
            result,
            Err(DeletionError::AtomIndexOutOfRange {
                index: -1,
                total: 2
            })
        );
    }

    #[test]
    fn rejects_duplicate_indices() {
        let poscar = structure(&["A", "B"], &[2, 2]);

        let result = poscar.delete_atoms(&[1, 3, 1]);

        assert_eq!(result, Err(DeletionError::DuplicateAtomIndex { index: 1 }));
    }

    #[test]
    fn rejects_record_whose_positions_disagree_with_counts() {
        let mut poscar = structure(&["A"], &[2]);
        poscar.positions.pop();

        let result = poscar.delete_atoms(&[0]);

        assert!(matches!(
            result,
            Err(DeletionError::InconsistentRecord {
                positions: 1,
                total: 2,
                ..
            })
        ));
    }
}
