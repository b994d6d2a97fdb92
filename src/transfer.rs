//! Factory-driven element transfer.
//!
//! [`transfer_elements`] copies every element of a source sequence into a
//! destination collection that is created on demand by a factory. The
//! factory is usually a constructor path such as `Vec::new` or
//! `HashSet::new`, which keeps the choice of destination at the call site.

/// Moves every element of `source` into a collection produced by `factory`.
///
/// The factory is called exactly once, before the source is iterated. The
/// elements are then added in source order through [`Extend`], so the
/// destination's own rules apply (a set drops duplicates, a map keeps the
/// last value per key).
///
/// # Type Parameters
///
/// * `S` - The source sequence
/// * `D` - The destination collection
///
/// # Arguments
///
/// * `source` - Any sequence; pass `&collection` or `.iter().cloned()` to
///   keep the original
/// * `factory` - Produces the empty destination
///
/// # Examples
///
/// ```
/// use std::collections::{BTreeSet, HashSet};
/// use sift::transfer::transfer_elements;
///
/// let names = vec!["Fred", "Jane", "Fred", "George"];
///
/// let unique: HashSet<&str> = transfer_elements(names.iter().copied(), HashSet::new);
/// assert_eq!(unique.len(), 3);
///
/// let ordered = transfer_elements(names.iter().copied(), || BTreeSet::new());
/// assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec!["Fred", "George", "Jane"]);
/// ```
#[inline]
pub fn transfer_elements<S, D, F>(source: S, factory: F) -> D
where
    S: IntoIterator,
    D: Extend<S::Item>,
    F: FnOnce() -> D,
{
    let mut destination = factory();
    destination.extend(source);
    destination
}
