//! The lading text generator
//!
//! This library produces random strings whose characters are drawn uniformly
//! from an arbitrary set of Unicode code point [`Range`]s. The set of allowed
//! code points is held by a [`Source`], of which there are two:
//! [`source::Flat`] materializes every code point up front while
//! [`source::Ranged`] keeps only the ranges and binary searches them on
//! lookup. A [`Generator`] draws from either without knowing which.

#![deny(clippy::all)]
#![deny(clippy::cargo)]
#![deny(clippy::pedantic)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::unwrap_used)]
#![deny(unused_extern_crates)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![deny(unreachable_pub)]
#![deny(missing_docs)]
#![deny(missing_copy_implementations)]
#![deny(missing_debug_implementations)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::multiple_crate_versions)]

use serde::Deserialize;

pub mod alphabet;
pub mod generator;
pub mod range;
pub mod source;

#[cfg(test)]
pub(crate) mod fixture;

pub use alphabet::Alphabet;
pub use generator::Generator;
pub use range::Range;
pub use source::{Method, Source, SourceKind};

/// Errors produced by this crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A lookup index fell outside of `[0, count)`.
    #[error("index {index} out of bounds for source of {count} code points")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of code points in the source.
        count: usize,
    },
    /// Sampling was requested from a source holding no code points.
    #[error("source holds no code points, cannot sample")]
    EmptySource,
    /// Summing range sizes overflowed. Validated ranges hold at most
    /// 0x10F800 code points each, so this needs a narrow `usize` or a very
    /// large number of ranges.
    #[error("total code point count overflows usize")]
    Overflow,
    /// A range descriptor is malformed.
    #[error("invalid range {low:#x}..={high:#x} step {stride}: {reason}")]
    InvalidRange {
        /// The lower bound of the range.
        low: u32,
        /// The upper bound of the range.
        high: u32,
        /// The step between elements of the range.
        stride: u32,
        /// Why the range was rejected.
        reason: &'static str,
    },
    /// See [`regex_syntax::Error`]
    #[error("unable to parse character class: {0}")]
    Class(#[from] Box<regex_syntax::Error>),
    /// The pattern parsed but does not describe a character class.
    #[error("pattern {0:?} is not a character class")]
    NotAClass(String),
    /// Configuration named no alphabets.
    #[error("configuration must name at least one alphabet")]
    NoAlphabet,
}

/// Configuration for a [`Generator`]
#[derive(Debug, Deserialize, serde::Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// The character source implementation to build.
    #[serde(default)]
    pub method: Method,
    /// The alphabets to draw from, concatenated in order.
    pub alphabets: Vec<Alphabet>,
}

impl Config {
    /// Resolve every configured alphabet into its range table, preserving
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoAlphabet`] if no alphabets are configured, else any
    /// error from [`Alphabet::ranges`].
    pub fn tables(&self) -> Result<Vec<Vec<Range>>, Error> {
        if self.alphabets.is_empty() {
            return Err(Error::NoAlphabet);
        }
        self.alphabets.iter().map(Alphabet::ranges).collect()
    }
}
