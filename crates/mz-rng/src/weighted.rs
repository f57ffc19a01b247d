//! Weighted choice over an ordered list

use crate::UnitSource;

/// An item paired with its selection weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weighted<T> {
    pub item: T,
    pub weight: f64,
}

impl<T> Weighted<T> {
    pub fn new(item: T, weight: f64) -> Self {
        Self { item, weight }
    }
}

/// Pick one entry with probability proportional to its weight.
///
/// Draws a single ticket in `[0, total)` and walks the list in order,
/// subtracting each weight until the ticket drops to zero or below. If
/// floating point rounding runs past the end, the last entry is returned.
/// Returns `None` only for an empty list.
pub fn pick_weighted<'a, T>(
    items: &'a [Weighted<T>],
    source: &mut impl UnitSource,
) -> Option<&'a Weighted<T>> {
    let last = items.last()?;
    let total: f64 = items.iter().map(|w| w.weight).sum();

    let mut ticket = source.next_unit() * total;
    for entry in items {
        ticket -= entry.weight;
        if ticket <= 0.0 {
            return Some(entry);
        }
    }

    Some(last)
}
