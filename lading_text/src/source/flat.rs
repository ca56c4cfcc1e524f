//! Flat character source.

use tracing::debug;

use super::Source;
use crate::{Error, Range, range};

/// A [`Source`] holding every code point in a dense vector
///
/// Construction costs time and memory in proportion to the total number of
/// code points; lookup is a vector index. Preferable when the alphabet is
/// small or lookups dominate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flat {
    chars: Vec<char>,
}

impl Flat {
    /// Create a new `Flat` by expanding every range of `tables` in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the total code point count does not fit
    /// in a `usize`.
    pub fn new<T>(tables: &[T]) -> Result<Self, Error>
    where
        T: AsRef<[Range]>,
    {
        let size = range::total_len(tables)?;
        let mut chars = Vec::with_capacity(size);
        for table in tables {
            for range in table.as_ref() {
                chars.extend(range.iter());
            }
        }
        debug!("Flat source materialized {} code points.", chars.len());

        Ok(Self { chars })
    }
}

impl Source for Flat {
    #[inline]
    fn count(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Result<char, Error> {
        self.chars
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index,
                count: self.chars.len(),
            })
    }
}
