#![cfg_attr(not(test), no_std)]

//! Linear search over slices.
//!
//! [`find_first`] reports the lowest index holding the target (or
//! [`NOT_FOUND`]), [`find_all`] reports every such index in ascending order.
//! The `try_` forms accept a possibly absent sequence and reject it with
//! [`SearchError::InvalidArgument`] before scanning. [`SeqExt`] offers the
//! same scans as `Option`-returning methods on any slice.

extern crate alloc;

pub mod error;
pub mod utils;

use alloc::vec::Vec;

pub use error::{Result, SearchError};
pub use utils::SeqExt;

/// Returned by [`find_first`] when no element matches.
pub const NOT_FOUND: isize = -1;

/// Index of the first element equal to `target`, or [`NOT_FOUND`].
///
/// Positions beyond `isize::MAX`, reachable only with zero-sized elements,
/// are reported as [`NOT_FOUND`].
///
/// ```
/// use linear_scan::{find_first, NOT_FOUND};
///
/// let sample = [3, 5, 2, 5, 7];
/// assert_eq!(find_first(&sample, &5), 1);
/// assert_eq!(find_first(&sample, &4), NOT_FOUND);
/// ```
pub fn find_first<T, U>(sequence: &[T], target: &U) -> isize
where
    T: PartialEq<U>,
    U: ?Sized,
{
    let found = sequence.index_of(target);
    log::trace!("find_first over {} elements: {:?}", sequence.len(), found);
    found.and_then(|index| isize::try_from(index).ok()).unwrap_or(NOT_FOUND)
}

/// Every index whose element equals `target`, ascending. Empty when nothing matches.
///
/// ```
/// use linear_scan::find_all;
///
/// let sample = [3, 5, 2, 5, 7];
/// assert_eq!(find_all(&sample, &5), vec![1, 3]);
/// assert!(find_all(&sample, &9).is_empty());
/// ```
pub fn find_all<T, U>(sequence: &[T], target: &U) -> Vec<usize>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    let found = sequence.indices_of(target);
    log::trace!("find_all over {} elements: {} matches", sequence.len(), found.len());
    found
}

/// [`find_first`] for a sequence that may be absent.
pub fn try_find_first<T, U>(sequence: Option<&[T]>, target: &U) -> Result<isize>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    require(sequence).map(|present| find_first(present, target))
}

/// [`find_all`] for a sequence that may be absent.
pub fn try_find_all<T, U>(sequence: Option<&[T]>, target: &U) -> Result<Vec<usize>>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    require(sequence).map(|present| find_all(present, target))
}

fn require<T>(sequence: Option<&[T]>) -> Result<&[T]> {
    sequence.ok_or_else(|| {
        log::debug!("rejecting scan: no sequence provided");
        SearchError::InvalidArgument
    })
}
