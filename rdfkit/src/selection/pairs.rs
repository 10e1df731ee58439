use indexmap::IndexSet;

use crate::Error;

/// A set of unique pairs of atoms, used to select which distances enter a
/// radial distribution function.
///
/// Pairs are unordered: `(i, j)` and `(j, i)` refer to the same pair, and are
/// stored once as `(min(i, j), max(i, j))`. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairList {
    pairs: IndexSet<(usize, usize)>,
}

impl PairList {
    /// Create an empty pair list
    pub fn new() -> PairList {
        PairList {
            pairs: IndexSet::new(),
        }
    }

    /// Create a pair list from all the given pairs, ignoring duplicates
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, usize)>) -> Result<PairList, Error> {
        let mut list = PairList::new();
        for (first, second) in pairs {
            list.add(first, second)?;
        }
        return Ok(list);
    }

    /// Add the pair between atoms `first` and `second` to this list.
    ///
    /// This returns `true` if the pair was not already part of the list, and
    /// `false` otherwise. Self pairs (`first == second`) are rejected.
    pub fn add(&mut self, first: usize, second: usize) -> Result<bool, Error> {
        if first == second {
            return Err(Error::InvalidArgument(format!(
                "can not add a pair between atom {} and itself", first
            )));
        }

        let pair = if first < second {
            (first, second)
        } else {
            (second, first)
        };

        return Ok(self.pairs.insert(pair));
    }

    /// Get the number of pairs in this list
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if this list contains no pair
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Check if the pair between `first` and `second` is part of this list,
    /// in any order
    pub fn contains(&self, first: usize, second: usize) -> bool {
        self.pairs.contains(&(first, second)) || self.pairs.contains(&(second, first))
    }

    /// Iterate over the pairs in this list, in insertion order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }

    /// Get the largest atom index used by any pair in this list
    pub fn max_index(&self) -> Option<usize> {
        // pairs are stored with the largest index in second position
        self.pairs.iter().map(|&(_, second)| second).max()
    }

    /// Check that all pairs in this list refer to atoms in a trajectory
    /// containing `size` atoms
    pub fn check_indexes(&self, size: usize) -> Result<(), Error> {
        match self.max_index() {
            Some(index) if index >= size => Err(Error::IndexOutOfRange {
                index: index,
                size: size,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates() {
        let mut pairs = PairList::new();
        assert!(pairs.add(0, 3).unwrap());
        assert!(pairs.add(1, 2).unwrap());
        assert!(!pairs.add(0, 3).unwrap());
        assert!(!pairs.add(3, 0).unwrap());

        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(3, 0));
        assert!(!pairs.contains(0, 2));
        assert_eq!(pairs.iter().collect::<Vec<_>>(), [(0, 3), (1, 2)]);
    }

    #[test]
    fn self_pairs() {
        let error = PairList::from_pairs([(0, 1), (2, 2)]).unwrap_err();
        assert_eq!(error.to_string(), "invalid argument: can not add a pair between atom 2 and itself");
    }

    #[test]
    fn indexes() {
        let pairs = PairList::from_pairs([(5, 1), (2, 3)]).unwrap();
        assert_eq!(pairs.max_index(), Some(5));
        assert!(pairs.check_indexes(6).is_ok());

        let error = pairs.check_indexes(5).unwrap_err();
        assert!(matches!(error, Error::IndexOutOfRange { index: 5, size: 5 }));

        assert_eq!(PairList::new().max_index(), None);
        assert!(PairList::new().check_indexes(0).is_ok());
    }
}
