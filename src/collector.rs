use crate::config::QueryParameters;
use crate::metric::Metric;
use crate::points::{Coordinate, PointSet};
use num_traits::{Float, NumCast};
use std::ops::Range;

/// Applies the radius filter, self-index exclusion and neighbor cap for one
/// query point at a time.
///
/// Candidates are visited in ascending global source index. A candidate is
/// accepted when it lies within the radius and, if `ignore_same_index` is set,
/// its index differs from the query's. Once `max_num_neighbors` candidates are
/// accepted the remaining candidates of the range are not examined.
pub struct NeighborCollector<'a, T: Coordinate, M> {
    sources: PointSet<'a, T>,
    queries: PointSet<'a, T>,
    radius: T::Wide,
    max_num_neighbors: usize,
    ignore_same_index: bool,
    metric: &'a M,
}

impl<'a, T: Coordinate, M: Metric<T>> NeighborCollector<'a, T, M> {
    pub fn new(
        sources: PointSet<'a, T>,
        queries: PointSet<'a, T>,
        params: &QueryParameters,
        metric: &'a M,
    ) -> Self {
        // Floats always convert; NaN keeps the "matches nothing" semantics.
        let radius = <T::Wide as NumCast>::from(params.radius).unwrap_or_else(<T::Wide as Float>::nan);
        Self {
            sources,
            queries,
            radius,
            max_num_neighbors: params.max_num_neighbors,
            ignore_same_index: params.ignore_same_index,
            metric,
        }
    }

    /// Appends the accepted global source indices for query `qi` among
    /// `candidates` to `out`, returning how many were appended.
    pub fn collect_into(&self, qi: usize, candidates: Range<usize>, out: &mut Vec<usize>) -> usize {
        if self.max_num_neighbors == 0 {
            return 0;
        }
        let query = self.queries.point(qi);
        let mut accepted = 0;
        for ci in candidates {
            if !self.metric.within(query, self.sources.point(ci), self.radius) {
                continue;
            }
            if self.ignore_same_index && ci == qi {
                continue;
            }
            out.push(ci);
            accepted += 1;
            if accepted == self.max_num_neighbors {
                break;
            }
        }
        accepted
    }

    /// The accepted global source indices for query `qi` among `candidates`.
    pub fn collect(&self, qi: usize, candidates: Range<usize>) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_into(qi, candidates, &mut out);
        out
    }
}
