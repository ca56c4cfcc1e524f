//! Character sources
//!
//! A [`Source`] maps a global index in `[0, count)` onto the code points of a
//! set of [`Range`] tables, taken in the order supplied. Sources are immutable
//! once built and may be read from any number of threads at once.

use enum_dispatch::enum_dispatch;
use serde::Deserialize;

use crate::{Error, Range};

mod flat;
mod ranged;

pub use flat::Flat;
pub use ranged::Ranged;

/// Index to code point lookup over a set of ranges
#[enum_dispatch]
pub trait Source {
    /// The total number of code points held.
    fn count(&self) -> usize;

    /// The `index`-th code point, counting from zero through every range in
    /// construction order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= self.count()`.
    fn at(&self, index: usize) -> Result<char, Error>;
}

/// Which [`Source`] implementation to build
#[derive(Debug, Deserialize, serde::Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Materialize every code point, see [`Flat`].
    Flat,
    /// Store only the ranges, see [`Ranged`].
    #[default]
    Ranged,
}

/// Either [`Source`] implementation behind one type
#[enum_dispatch(Source)]
#[derive(Debug, Clone)]
pub enum SourceKind {
    /// See [`Flat`]
    Flat(Flat),
    /// See [`Ranged`]
    Ranged(Ranged),
}

impl SourceKind {
    /// Build the source named by `method` over `tables`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the total code point count does not fit
    /// in a `usize`.
    pub fn new<T>(method: Method, tables: &[T]) -> Result<Self, Error>
    where
        T: AsRef<[Range]>,
    {
        Ok(match method {
            Method::Flat => Flat::new(tables)?.into(),
            Method::Ranged => Ranged::new(tables)?.into(),
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::SmallRng};

    use super::{Flat, Method, Ranged, Source, SourceKind};
    use crate::{Error, Range, fixture};

    fn assert_complete<S>(name: &str, source: &S, tables: &[Vec<Range>])
    where
        S: Source,
    {
        let mut expected: HashSet<char> = tables
            .iter()
            .flat_map(|table| table.iter().flat_map(Range::iter))
            .collect();
        assert_eq!(source.count(), expected.len(), "{name}: count mismatch");
        for idx in 0..source.count() {
            let c = source.at(idx).expect("index in bounds");
            assert!(
                expected.remove(&c),
                "{name}: {c:?} at {idx} is not in the tables or is repeated"
            );
        }
        assert!(expected.is_empty(), "{name}: {} code points missing", expected.len());
        assert!(matches!(
            source.at(source.count()),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn flat_complete() {
        for (name, tables) in fixture::datasets() {
            let source = Flat::new(&tables).expect("source builds");
            assert_complete(name, &source, &tables);
        }
    }

    #[test]
    fn ranged_complete() {
        for (name, tables) in fixture::datasets() {
            let source = Ranged::new(&tables).expect("source builds");
            assert_complete(name, &source, &tables);
        }
    }

    #[test]
    fn kind_dispatches() {
        let tables = fixture::alphanumeric();
        for method in [Method::Flat, Method::Ranged] {
            let source = SourceKind::new(method, &tables).expect("source builds");
            assert_eq!(source.count(), 62);
            assert_eq!(source.at(10).expect("in bounds"), 'A');
            assert_eq!(source.at(61).expect("in bounds"), 'z');
        }
    }

    #[test]
    fn sources_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Flat>();
        assert_send_sync::<Ranged>();
        assert_send_sync::<SourceKind>();
    }

    // Flat and Ranged agree on every index for arbitrary disjoint tables.
    proptest! {
        #[test]
        fn flat_ranged_equivalent(seed: u64) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let tables = fixture::random_tables(&mut rng);

            let flat = Flat::new(&tables).expect("source builds");
            let ranged = Ranged::new(&tables).expect("source builds");
            prop_assert_eq!(flat.count(), ranged.count());
            for idx in 0..flat.count() {
                prop_assert_eq!(flat.at(idx).ok(), ranged.at(idx).ok());
            }
            prop_assert!(flat.at(flat.count()).is_err());
            prop_assert!(ranged.at(ranged.count()).is_err());
        }
    }
}
