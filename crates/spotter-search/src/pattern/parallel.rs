//! rayon bridge for pattern matching
//!
//! [`PatternMatches`] is an unindexed producer: rayon splits it with
//! [`PatternMatches::try_split`] until every worker has a range, then each
//! half is drained sequentially. The first half is always the left side of
//! the split, so collecting keeps row-major order.

use super::PatternMatches;
use rayon::iter::ParallelIterator;
use rayon::iter::plumbing::{Folder, UnindexedConsumer, UnindexedProducer, bridge_unindexed};
use spotter_core::{PixelBuffer, Point, Sample};

impl<B, S> UnindexedProducer for PatternMatches<'_, B, S>
where
    B: PixelBuffer + Sync,
    S: Sample + Sync,
{
    type Item = Point;

    fn split(mut self) -> (Self, Option<Self>) {
        match self.try_split() {
            Some(prefix) => (prefix, Some(self)),
            None => (self, None),
        }
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        folder.consume_iter(self)
    }
}

/// Parallel iterator over pattern matches, see
/// [`PatternMatcher::par_matches`](super::PatternMatcher::par_matches).
#[derive(Debug)]
pub struct ParPatternMatches<'m, B, S> {
    matches: PatternMatches<'m, B, S>,
}

impl<'m, B, S> ParPatternMatches<'m, B, S> {
    pub(crate) fn new(matches: PatternMatches<'m, B, S>) -> Self {
        Self { matches }
    }
}

impl<B, S> ParallelIterator for ParPatternMatches<'_, B, S>
where
    B: PixelBuffer + Sync,
    S: Sample + Sync,
{
    type Item = Point;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge_unindexed(self.matches, consumer)
    }
}
