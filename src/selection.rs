//! Candidate filtering and weighted-random selection.

use crate::error::SelectionError;
use crate::location::Location;
use rand::Rng;

/// Keep only the locations the predicate reports as free, preserving order.
pub fn filter_unoccupied<I, F>(locations: I, is_occupied: F) -> Vec<Location>
where
    I: IntoIterator<Item = Location>,
    F: Fn(Location) -> bool,
{
    locations
        .into_iter()
        .filter(|&location| !is_occupied(location))
        .collect()
}

/// Pick one candidate at random, with probability proportional to its weight.
///
/// Cumulative-weight sampling: one pass builds the prefix sums, a single
/// uniform draw in `0..total` is mapped back to its owner by binary search.
/// A zero weight excludes a candidate from the draw entirely. Returns the
/// index so the caller can remove the winner from the set.
pub fn pick_weighted<T, F, R>(
    candidates: &[T],
    mut weight: F,
    rng: &mut R,
) -> Result<usize, SelectionError>
where
    F: FnMut(&T) -> u32,
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(SelectionError::NoCandidates);
    }

    let mut prefix = Vec::with_capacity(candidates.len());
    let mut total = 0u64;
    for candidate in candidates {
        total += weight(candidate) as u64;
        prefix.push(total);
    }
    if total == 0 {
        return Err(SelectionError::NoCandidates);
    }

    let draw = rng.gen_range(0..total);
    // First index whose cumulative weight exceeds the draw; a candidate with
    // weight w owns w values of the draw range.
    Ok(prefix.partition_point(|&cumulative| cumulative <= draw))
}
