use crate::Error;

use super::Atom;

/// Simple text-based atom selection.
///
/// The following selections are supported:
///
/// - `all` selects every atom;
/// - `name <name> [<name> ...]` selects atoms with any of the given names;
/// - `molecule <index> [<index> ...]` selects atoms in any of the given
///   molecules.
///
/// ```
/// # use rdfkit::{Atom, AtomSelection};
/// let selection = AtomSelection::new("name OW HW1").unwrap();
/// let oxygen = Atom { name: "OW".into(), molecule: 3 };
/// assert!(selection.matches(&oxygen));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomSelection {
    /// Select all atoms
    All,
    /// Select atoms by name
    Names(Vec<String>),
    /// Select atoms by molecule index
    Molecules(Vec<usize>),
}

impl AtomSelection {
    /// Parse the given `selection` string
    pub fn new(selection: &str) -> Result<AtomSelection, Error> {
        let mut tokens = selection.split_whitespace();
        let kind = tokens.next().ok_or_else(|| Error::InvalidArgument(
            "atom selection can not be empty".into()
        ))?;
        let values = tokens.collect::<Vec<_>>();

        match kind {
            "all" => {
                if !values.is_empty() {
                    return Err(Error::InvalidArgument(format!(
                        "unexpected values after 'all' in atom selection '{}'", selection
                    )));
                }
                return Ok(AtomSelection::All);
            }
            "name" => {
                if values.is_empty() {
                    return Err(Error::InvalidArgument(format!(
                        "missing atom names in atom selection '{}'", selection
                    )));
                }
                return Ok(AtomSelection::Names(values.into_iter().map(String::from).collect()));
            }
            "molecule" => {
                if values.is_empty() {
                    return Err(Error::InvalidArgument(format!(
                        "missing molecule indexes in atom selection '{}'", selection
                    )));
                }

                let mut molecules = Vec::new();
                for value in values {
                    let molecule = value.parse().map_err(|_| Error::InvalidArgument(format!(
                        "invalid molecule index '{}' in atom selection '{}'", value, selection
                    )))?;
                    molecules.push(molecule);
                }
                return Ok(AtomSelection::Molecules(molecules));
            }
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "unknown atom selection kind '{}', expected one of 'all', 'name' or 'molecule'", kind
                )));
            }
        }
    }

    /// Check if the given `atom` is part of this selection
    pub fn matches(&self, atom: &Atom) -> bool {
        match self {
            AtomSelection::All => true,
            AtomSelection::Names(names) => names.iter().any(|name| name == &atom.name),
            AtomSelection::Molecules(molecules) => molecules.contains(&atom.molecule),
        }
    }
}

impl std::str::FromStr for AtomSelection {
    type Err = Error;

    fn from_str(selection: &str) -> Result<AtomSelection, Error> {
        AtomSelection::new(selection)
    }
}
