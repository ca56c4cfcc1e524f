//! Named alphabets
//!
//! Unicode property data comes from `regex-syntax`. A character class is
//! parsed, its canonical ranges read back and folded into [`Range`] tables.
//! Runs of lone code points separated by a constant gap, common in case
//! mapping blocks, are folded into a single strided range.

use regex_syntax::{
    Parser,
    hir::{Class, HirKind},
};
use serde::Deserialize;

use crate::{
    Error, Range,
    range::{SURROGATE_HIGH, SURROGATE_LOW},
};

const ASCII_HEX_DIGIT: &str = r"\p{ASCII_Hex_Digit}";
const ASCII_ALPHANUMERIC: &str = r"[0-9A-Za-z]";
const LATIN: &str = r"\p{Latin}";
const SYMBOL: &str = r"\p{Symbol}";
// Letters, marks, numbers, punctuation, symbols and the space separators.
const GRAPHIC: &str = r"[\p{L}\p{M}\p{N}\p{P}\p{S}\p{Zs}]";

/// An alphabet to draw code points from
#[derive(Debug, Deserialize, serde::Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// `0-9`, `A-F` and `a-f`
    AsciiHexDigit,
    /// `0-9`, `A-Z` and `a-z`
    AsciiAlphanumeric,
    /// The Latin script
    Latin,
    /// The Symbol general category
    Symbol,
    /// Every graphic code point: letters, marks, numbers, punctuation,
    /// symbols and space separators
    Graphic,
    /// A character class in regex syntax, for instance `[α-ω]` or `\p{Greek}`
    Class {
        /// The class expression.
        pattern: String,
    },
    /// User supplied ranges, taken as-is
    Custom {
        /// The ranges, in order.
        ranges: Vec<Range>,
    },
}

impl Alphabet {
    /// The range table of this alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Class`] if a class pattern does not parse and
    /// [`Error::NotAClass`] if it parses to something other than a set of
    /// characters.
    pub fn ranges(&self) -> Result<Vec<Range>, Error> {
        match self {
            Alphabet::AsciiHexDigit => class_ranges(ASCII_HEX_DIGIT),
            Alphabet::AsciiAlphanumeric => class_ranges(ASCII_ALPHANUMERIC),
            Alphabet::Latin => class_ranges(LATIN),
            Alphabet::Symbol => class_ranges(SYMBOL),
            Alphabet::Graphic => class_ranges(GRAPHIC),
            Alphabet::Class { pattern } => class_ranges(pattern),
            Alphabet::Custom { ranges } => Ok(ranges.clone()),
        }
    }
}

/// Parse `pattern` as a character class and return its compacted range
/// table.
///
/// # Errors
///
/// See [`Alphabet::ranges`].
pub fn class_ranges(pattern: &str) -> Result<Vec<Range>, Error> {
    let hir = Parser::new().parse(pattern).map_err(Box::new)?;
    let bounds: Vec<(u32, u32)> = match hir.kind() {
        HirKind::Class(Class::Unicode(class)) => class
            .ranges()
            .iter()
            .map(|r| (u32::from(r.start()), u32::from(r.end())))
            .collect(),
        HirKind::Class(Class::Bytes(class)) => class
            .ranges()
            .iter()
            .map(|r| (u32::from(r.start()), u32::from(r.end())))
            .collect(),
        // A class of one character is simplified to a literal.
        HirKind::Literal(literal) => {
            let mut chars = std::str::from_utf8(&literal.0)
                .map_err(|_| Error::NotAClass(pattern.to_string()))?
                .chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => vec![(u32::from(c), u32::from(c))],
                _ => return Err(Error::NotAClass(pattern.to_string())),
            }
        }
        _ => return Err(Error::NotAClass(pattern.to_string())),
    };
    compact(&bounds)
}

/// Cut the surrogate block out of the inclusive span `low..=high`. Class
/// ranges are `char` bounds, so a span may step over the block numerically.
fn without_surrogates(low: u32, high: u32) -> impl Iterator<Item = (u32, u32)> {
    let below = (low < SURROGATE_LOW).then(|| (low, high.min(SURROGATE_LOW - 1)));
    let above = (high > SURROGATE_HIGH).then(|| (low.max(SURROGATE_HIGH + 1), high));
    below.into_iter().chain(above)
}

/// Fold sorted, disjoint inclusive `bounds` into ranges, merging runs of lone
/// code points with a constant gap into one strided range.
fn compact(bounds: &[(u32, u32)]) -> Result<Vec<Range>, Error> {
    let mut ranges: Vec<Range> = Vec::with_capacity(bounds.len());
    // Whether the last range was built only from lone code points and so may
    // take on more of them.
    let mut open_run = false;
    for (low, high) in bounds
        .iter()
        .flat_map(|&(low, high)| without_surrogates(low, high))
    {
        if low == high && open_run && ranges.last_mut().is_some_and(|last| last.absorb(low)) {
            continue;
        }
        ranges.push(Range::inclusive(low, high)?);
        open_run = low == high;
    }
    Ok(ranges)
}
