//! Code point range descriptors.
//!
//! A [`Range`] names the inclusive arithmetic sequence `low, low + stride, ...`
//! up to and including `high`. Ranges are validated individually on
//! construction. Whether a group of ranges is sorted or overlapping is never
//! checked: callers must supply disjoint ranges if they want every code point
//! drawn with equal probability.

use serde::Deserialize;

use crate::Error;

const MAX_CODE_POINT: u32 = char::MAX as u32;
pub(crate) const SURROGATE_LOW: u32 = 0xD800;
pub(crate) const SURROGATE_HIGH: u32 = 0xDFFF;

/// An inclusive, fixed-stride range of Unicode scalar values
#[derive(Debug, Deserialize, serde::Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct Range {
    low: u32,
    high: u32,
    stride: u32,
}

/// Unvalidated form of [`Range`] as it appears in configuration.
#[derive(Debug, Deserialize, serde::Serialize, Clone, Copy)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "snake_case")]
struct RawRange {
    low: u32,
    high: u32,
    #[serde(default = "default_stride")]
    stride: u32,
}

fn default_stride() -> u32 {
    1
}

impl TryFrom<RawRange> for Range {
    type Error = Error;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Range::new(raw.low, raw.high, raw.stride)
    }
}

impl From<Range> for RawRange {
    fn from(range: Range) -> Self {
        Self {
            low: range.low,
            high: range.high,
            stride: range.stride,
        }
    }
}

impl Range {
    /// Create a new `Range`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `low > high`, if `stride` is zero,
    /// if `high` is beyond the last Unicode code point or if any element of
    /// the sequence is a surrogate code point.
    pub fn new(low: u32, high: u32, stride: u32) -> Result<Self, Error> {
        let invalid = |reason| Error::InvalidRange {
            low,
            high,
            stride,
            reason,
        };
        if low > high {
            return Err(invalid("low must be less than or equal to high"));
        }
        if stride == 0 {
            return Err(invalid("stride must be positive"));
        }
        if high > MAX_CODE_POINT {
            return Err(invalid("high is beyond the last Unicode code point"));
        }

        // First element at or above the surrogate block, if any lands in it.
        let first = if low >= SURROGATE_LOW {
            u64::from(low)
        } else {
            u64::from(low)
                + u64::from((SURROGATE_LOW - low).div_ceil(stride)) * u64::from(stride)
        };
        if first <= u64::from(high.min(SURROGATE_HIGH)) && first >= u64::from(SURROGATE_LOW) {
            return Err(invalid("range contains surrogate code points"));
        }

        Ok(Self { low, high, stride })
    }

    /// Create a new `Range` with a stride of one.
    ///
    /// # Errors
    ///
    /// See [`Range::new`].
    pub fn inclusive(low: u32, high: u32) -> Result<Self, Error> {
        Self::new(low, high, 1)
    }

    /// The first code point of the range.
    #[must_use]
    pub fn low(&self) -> u32 {
        self.low
    }

    /// The upper bound of the range. Only an element if it is reached by
    /// stepping from `low`.
    #[must_use]
    pub fn high(&self) -> u32 {
        self.high
    }

    /// The step between consecutive elements.
    #[must_use]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// The number of code points in the range, never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        ((self.high - self.low) / self.stride) as usize + 1
    }

    /// Always `false`, a `Range` holds at least `low`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `code_point` is an element of the range.
    #[must_use]
    pub fn contains(&self, code_point: u32) -> bool {
        (self.low..=self.high).contains(&code_point) && (code_point - self.low) % self.stride == 0
    }

    /// The `offset`-th element of the range, or `None` if `offset` is not
    /// less than [`Range::len`].
    #[must_use]
    pub fn nth(&self, offset: usize) -> Option<char> {
        if offset >= self.len() {
            return None;
        }
        let code_point = u64::from(self.low) + u64::from(self.stride) * offset as u64;
        u32::try_from(code_point).ok().and_then(char::from_u32)
    }

    /// Iterate the elements of the range in ascending order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = char> + use<> {
        (self.low..=self.high)
            .step_by(self.stride as usize)
            .filter_map(char::from_u32)
    }

    /// Extend this range by `code_point` if the result is still a single
    /// fixed-stride range with the same elements plus `code_point`. A range
    /// holding one element adopts whatever stride reaches `code_point`.
    pub(crate) fn absorb(&mut self, code_point: u32) -> bool {
        if code_point <= self.high {
            return false;
        }
        let gap = code_point - self.high;
        if self.low == self.high || gap == self.stride {
            self.stride = gap;
            self.high = code_point;
            true
        } else {
            false
        }
    }
}

/// Sum the sizes of every range in `tables`.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the total does not fit in a `usize`.
pub fn total_len<T>(tables: &[T]) -> Result<usize, Error>
where
    T: AsRef<[Range]>,
{
    checked_sum(
        tables
            .iter()
            .flat_map(|table| table.as_ref().iter())
            .map(Range::len),
    )
}

fn checked_sum<I>(lens: I) -> Result<usize, Error>
where
    I: IntoIterator<Item = usize>,
{
    lens.into_iter().try_fold(0_usize, |total, len| {
        total.checked_add(len).ok_or(Error::Overflow)
    })
}
