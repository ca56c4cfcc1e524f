//! Ranged character source.

use tracing::debug;

use super::Source;
use crate::{Error, Range};

/// A [`Source`] holding only ranges and their cumulative index bounds
///
/// Construction costs time and memory in proportion to the number of ranges,
/// no matter how many code points each covers. Lookup binary searches the
/// ranges. Preferable when the alphabet is large relative to its range count,
/// the full graphic set being the typical case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranged {
    ranges: Vec<Range>,
    // Global index of the first code point of each range.
    range_starts: Vec<usize>,
    // Global index of the last code point of each range. Strictly increasing,
    // and together with `range_starts` partitions `[0, count)` without gaps.
    range_ends: Vec<usize>,
    count: usize,
}

impl Ranged {
    /// Create a new `Ranged` from `tables`, concatenated in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the total code point count does not fit
    /// in a `usize`.
    pub fn new<T>(tables: &[T]) -> Result<Self, Error>
    where
        T: AsRef<[Range]>,
    {
        let total_ranges = tables.iter().map(|table| table.as_ref().len()).sum();
        let mut ranges = Vec::with_capacity(total_ranges);
        let mut range_starts = Vec::with_capacity(total_ranges);
        let mut range_ends = Vec::with_capacity(total_ranges);

        let mut count: usize = 0;
        for range in tables.iter().flat_map(|table| table.as_ref().iter()) {
            range_starts.push(count);
            count = count.checked_add(range.len()).ok_or(Error::Overflow)?;
            // Ranges are never empty so `count` is at least one here.
            range_ends.push(count - 1);
            ranges.push(*range);
        }
        debug!(
            "Ranged source indexed {count} code points across {} ranges.",
            ranges.len()
        );

        Ok(Self {
            ranges,
            range_starts,
            range_ends,
            count,
        })
    }

    /// The concatenated ranges, in construction order.
    #[must_use]
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }
}

impl Source for Ranged {
    #[inline]
    fn count(&self) -> usize {
        self.count
    }

    fn at(&self, index: usize) -> Result<char, Error> {
        let out_of_bounds = Error::IndexOutOfBounds {
            index,
            count: self.count,
        };
        if index >= self.count {
            return Err(out_of_bounds);
        }
        // The first range whose last index is not below `index` holds it.
        let range_idx = self.range_ends.partition_point(|&end| end < index);
        let offset = index - self.range_starts[range_idx];
        self.ranges[range_idx].nth(offset).ok_or(out_of_bounds)
    }
}
