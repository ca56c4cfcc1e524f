//! Shared test datasets.

use rand::Rng;

use crate::{Alphabet, Range};

pub(crate) fn alphanumeric() -> Vec<Vec<Range>> {
    vec![
        Alphabet::AsciiAlphanumeric
            .ranges()
            .expect("alphabet resolves"),
    ]
}

/// Named range tables, from a handful of code points up to the full graphic
/// set.
pub(crate) fn datasets() -> Vec<(&'static str, Vec<Vec<Range>>)> {
    let resolve = |alphabet: Alphabet| alphabet.ranges().expect("alphabet resolves");
    vec![
        ("ascii_hex_digit", vec![resolve(Alphabet::AsciiHexDigit)]),
        ("ascii_alphanumeric", alphanumeric()),
        ("latin", vec![resolve(Alphabet::Latin)]),
        ("symbol", vec![resolve(Alphabet::Symbol)]),
        ("graphic", vec![resolve(Alphabet::Graphic)]),
        (
            "strided_groups",
            vec![
                vec![
                    Range::new(65, 90, 5).expect("valid range"),
                    Range::new(0x0100, 0x017F, 2).expect("valid range"),
                ],
                vec![],
                vec![Range::new(0x1_0000, 0x10_FFFF, 0x1_0000).expect("valid range")],
            ],
        ),
    ]
}

/// Between one and four groups of ascending, disjoint ranges below the
/// surrogate block, with strides up to eight.
pub(crate) fn random_tables<R>(rng: &mut R) -> Vec<Vec<Range>>
where
    R: Rng + ?Sized,
{
    let groups = rng.random_range(1..=4);
    let mut tables = Vec::with_capacity(groups);
    let mut low: u32 = rng.random_range(0..64);
    for _ in 0..groups {
        let ranges = rng.random_range(0..16);
        let mut table = Vec::with_capacity(ranges);
        for _ in 0..ranges {
            let high = low + rng.random_range(0..256);
            let stride = rng.random_range(1..=8);
            table.push(Range::new(low, high, stride).expect("valid range"));
            low = high + rng.random_range(1..64);
        }
        tables.push(table);
    }
    tables
}
