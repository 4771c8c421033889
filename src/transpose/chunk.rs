//! Chunking and adjacent-pair iteration.

use std::iter::Fuse;
use std::slice::ChunksExact;

use crate::error::{EngineError, Result};

/// Split into consecutive chunks of `n`; the last one may be shorter.
pub fn clump<T: Clone>(items: &[T], n: usize) -> Result<Vec<Vec<T>>> {
    if n == 0 {
        return Err(EngineError::ZeroChunkSize);
    }
    Ok(items.chunks(n).map(<[T]>::to_vec).collect())
}

/// Complete clumps: chunks of exactly `n`, dropping a short remainder.
///
/// Used to consume argument lists in fixed-arity groups such as
/// `(control, value)` pairs.
pub fn cclump<T>(items: &[T], n: usize) -> Result<ChunksExact<'_, T>> {
    if n == 0 {
        return Err(EngineError::ZeroChunkSize);
    }
    Ok(items.chunks_exact(n))
}

/// Lazy overlapping pairs `(v0, v1), (v1, v2), ...`.
///
/// Single pass over one forward cursor: once consumed it cannot restart,
/// and each consumer needs its own.
pub fn pairwise<I>(items: I) -> Pairwise<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Pairwise {
        iter: items.into_iter().fuse(),
        prev: None,
    }
}

/// Iterator returned by [`pairwise`].
pub struct Pairwise<I: Iterator> {
    iter: Fuse<I>,
    prev: Option<I::Item>,
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let first = match self.prev.take() {
            Some(prev) => prev,
            None => self.iter.next()?,
        };
        let second = self.iter.next()?;
        self.prev = Some(second.clone());
        Some((first, second))
    }
}
