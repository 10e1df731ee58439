//! Selection of the atom pairs entering a radial distribution function.
//!
//! A [`Topology`] stores the identity of the atoms in a trajectory (name and
//! molecule), and [`Topology::select_pairs`] resolves two atom predicates into
//! a [`PairList`].
use log::debug;

use crate::Error;

mod pairs;
pub use self::pairs::PairList;

mod atom_selection;
pub use self::atom_selection::AtomSelection;

/// Identity of a single atom in a [`Topology`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// Name of the atom, e.g. `"OW"` or `"C1"`
    pub name: String,
    /// Index of the molecule this atom belongs to
    pub molecule: usize,
}

/// Which pairs should be left out when selecting pairs of atoms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairExclusion {
    /// Only exclude pairs between an atom and itself
    SelfPairs,
    /// Exclude pairs between an atom and itself, as well as all pairs between
    /// atoms in the same molecule
    SameMolecule,
}

/// The list of atoms in a trajectory. The index of an atom in the topology is
/// the same as its index in the frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    atoms: Vec<Atom>,
}

impl Topology {
    /// Create a new empty topology
    pub fn new() -> Topology {
        Topology {
            atoms: Vec::new(),
        }
    }

    /// Add an atom with the given `name`, part of the given `molecule`
    pub fn add_atom(&mut self, name: impl Into<String>, molecule: usize) {
        self.atoms.push(Atom {
            name: name.into(),
            molecule: molecule,
        });
    }

    /// Get the number of atoms in this topology
    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    /// Get all the atoms in this topology
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Get the indexes of all atoms matching the given predicate
    pub fn select(&self, predicate: impl Fn(&Atom) -> bool) -> Vec<usize> {
        self.atoms.iter()
            .enumerate()
            .filter(|(_, atom)| predicate(atom))
            .map(|(index, _)| index)
            .collect()
    }

    /// Create the list of pairs between atoms matching the `first` predicate
    /// and atoms matching the `second` predicate.
    ///
    /// Self pairs are never included, and `exclusion` controls whether pairs
    /// within the same molecule are included. When an atom matches both
    /// predicates, the pairs it creates are only included once.
    pub fn select_pairs(
        &self,
        first: impl Fn(&Atom) -> bool,
        second: impl Fn(&Atom) -> bool,
        exclusion: PairExclusion,
    ) -> Result<PairList, Error> {
        let first = self.select(first);
        let second = self.select(second);

        let mut pairs = PairList::new();
        for &i in &first {
            for &j in &second {
                if i == j {
                    continue;
                }

                if exclusion == PairExclusion::SameMolecule && self.atoms[i].molecule == self.atoms[j].molecule {
                    continue;
                }

                pairs.add(i, j)?;
            }
        }

        debug!(
            "selected {} pairs between {} and {} atoms",
            pairs.len(), first.len(), second.len()
        );

        return Ok(pairs);
    }

    /// Same as [`Topology::select_pairs`], using [`AtomSelection`] strings
    /// such as `"name OW"` to select the atoms.
    pub fn select_pairs_by_name(
        &self,
        first: &str,
        second: &str,
        exclusion: PairExclusion,
    ) -> Result<PairList, Error> {
        let first = AtomSelection::new(first)?;
        let second = AtomSelection::new(second)?;
        return self.select_pairs(|atom| first.matches(atom), |atom| second.matches(atom), exclusion);
    }
}
