//! Random string generation over a [`Source`].
//!
//! A [`Generator`] draws code points uniformly and independently from its
//! source. It shares the source by [`Arc`], so any number of generators and
//! threads may read the same source. Randomness is always supplied by the
//! caller.

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use crate::{Config, Error, Method, Range, Source, SourceKind};

/// Sources smaller than this have their encoded width averaged exactly.
const EXACT_ESTIMATE_LIMIT: usize = 1_000;
/// Number of code points sampled to estimate the encoded width of larger
/// sources.
const ESTIMATE_SAMPLES: usize = 500;

/// Random text generator
#[derive(Debug)]
pub struct Generator<S = SourceKind> {
    source: Arc<S>,
    // Average UTF-8 width of a drawn code point. Only a capacity hint.
    est_bytes_per_char: f64,
}

impl<S> Clone for Generator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            est_bytes_per_char: self.est_bytes_per_char,
        }
    }
}

impl Generator<SourceKind> {
    /// Create a new `Generator` over a [`source::Flat`](crate::source::Flat)
    /// built from `tables`.
    ///
    /// # Errors
    ///
    /// See [`Generator::with_method`].
    pub fn flat<T, R>(tables: &[T], rng: &mut R) -> Result<Self, Error>
    where
        T: AsRef<[Range]>,
        R: Rng + ?Sized,
    {
        Self::with_method(Method::Flat, tables, rng)
    }

    /// Create a new `Generator` over a
    /// [`source::Ranged`](crate::source::Ranged) built from `tables`.
    ///
    /// # Errors
    ///
    /// See [`Generator::with_method`].
    pub fn ranged<T, R>(tables: &[T], rng: &mut R) -> Result<Self, Error>
    where
        T: AsRef<[Range]>,
        R: Rng + ?Sized,
    {
        Self::with_method(Method::Ranged, tables, rng)
    }

    /// Create a new `Generator` over the source named by `method`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the tables hold more code points than
    /// fit in a `usize` and [`Error::EmptySource`] if they hold none.
    pub fn with_method<T, R>(method: Method, tables: &[T], rng: &mut R) -> Result<Self, Error>
    where
        T: AsRef<[Range]>,
        R: Rng + ?Sized,
    {
        let source = SourceKind::new(method, tables)?;
        Self::new(Arc::new(source), rng)
    }

    /// Create a new `Generator` from configuration.
    ///
    /// # Errors
    ///
    /// Any error from [`Config::tables`] or [`Generator::with_method`].
    pub fn from_config<R>(config: &Config, rng: &mut R) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
    {
        let tables = config.tables()?;
        Self::with_method(config.method, &tables, rng)
    }
}

impl<S> Generator<S>
where
    S: Source,
{
    /// Create a new `Generator` drawing from `source`.
    ///
    /// The average encoded width of the source is computed here: exactly for
    /// small sources, from a sample drawn with `rng` for large ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySource`] if `source` holds no code points.
    pub fn new<R>(source: Arc<S>, rng: &mut R) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
    {
        let count = source.count();
        if count == 0 {
            return Err(Error::EmptySource);
        }

        let mut total_bytes: usize = 0;
        let total_chars = if count < EXACT_ESTIMATE_LIMIT {
            for idx in 0..count {
                total_bytes += source.at(idx)?.len_utf8();
            }
            count
        } else {
            for _ in 0..ESTIMATE_SAMPLES {
                total_bytes += source.at(rng.random_range(0..count))?.len_utf8();
            }
            ESTIMATE_SAMPLES
        };
        let est_bytes_per_char = total_bytes as f64 / total_chars as f64;
        debug!(
            "Generator over {count} code points estimates {est_bytes_per_char:.3} bytes per char."
        );

        Ok(Self {
            source,
            est_bytes_per_char,
        })
    }

    /// The estimated average UTF-8 width, in bytes, of a generated
    /// character.
    #[must_use]
    pub fn estimated_bytes_per_char(&self) -> f64 {
        self.est_bytes_per_char
    }

    /// The source this generator draws from.
    #[must_use]
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Generate a string of `min_len` to `max_len` characters, inclusive.
    ///
    /// The length is drawn uniformly from `[min_len, max_len]` only when
    /// `min_len < max_len`. Otherwise `max_len` is ignored and the string is
    /// exactly `min_len` characters long; the bounds are never swapped.
    ///
    /// # Errors
    ///
    /// Only if the source fails a lookup inside its own bounds, which the
    /// sources of this crate never do.
    pub fn generate_string<R>(
        &self,
        rng: &mut R,
        min_len: usize,
        max_len: usize,
    ) -> Result<String, Error>
    where
        R: Rng + ?Sized,
    {
        let len = if min_len < max_len {
            rng.random_range(min_len..=max_len)
        } else {
            min_len
        };
        let mut buf = String::new();
        self.generate_into(rng, len, &mut buf)?;
        Ok(buf)
    }

    /// Append exactly `len` random characters to `buf`.
    ///
    /// # Errors
    ///
    /// See [`Generator::generate_string`].
    pub fn generate_into<R>(&self, rng: &mut R, len: usize, buf: &mut String) -> Result<(), Error>
    where
        R: Rng + ?Sized,
    {
        buf.reserve(self.capacity_hint(len));
        let count = self.source.count();
        for _ in 0..len {
            buf.push(self.source.at(rng.random_range(0..count))?);
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    fn capacity_hint(&self, len: usize) -> usize {
        (self.est_bytes_per_char * len as f64).round() as usize
    }
}
