use crate::batch::{segments, BatchBoundaries, Segment};
use crate::collector::NeighborCollector;
use crate::config::{Execution, QueryParameters};
use crate::error::{RadiusError, Result};
use crate::metric::{Euclidean, Metric};
use crate::points::{Coordinate, PointSet};
use rayon::prelude::*;

/// A sparse radius graph as `(source_index, query_index)` pairs.
///
/// Both indices are global positions in the original buffers. Pairs are
/// ordered by segment, then query index, then source index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeList {
    sources: Vec<usize>,
    queries: Vec<usize>,
}

impl EdgeList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sources: Vec::with_capacity(capacity),
            queries: Vec::with_capacity(capacity),
        }
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source index of every edge, in edge order.
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Query index of every edge, in edge order.
    pub fn queries(&self) -> &[usize] {
        &self.queries
    }

    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sources.iter().copied().zip(self.queries.iter().copied())
    }

    /// The edges as a row-major 2×K matrix: all source indices followed by
    /// all query indices.
    pub fn to_index_matrix(&self) -> Vec<i64> {
        self.sources
            .iter()
            .chain(self.queries.iter())
            .map(|&i| i as i64)
            .collect()
    }

    /// Splits into the source and query index vectors.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.sources, self.queries)
    }
}

/// Builds radius graphs with a fixed set of parameters and a distance metric.
#[derive(Clone, Debug)]
pub struct RadiusGraph<M> {
    pub params: QueryParameters,
    pub metric: M,
    pub execution: Execution,
}

impl RadiusGraph<Euclidean> {
    pub fn euclidean(params: QueryParameters) -> Self {
        Self::new(params, Euclidean)
    }
}

impl<M> RadiusGraph<M> {
    pub fn new(params: QueryParameters, metric: M) -> Self {
        Self {
            params,
            metric,
            execution: Execution::default(),
        }
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Finds, for every query point, the source points within the radius.
    ///
    /// Source and query sets must share their feature width. With `batch`,
    /// only points of the same segment are compared; without, the whole sets
    /// form one segment.
    pub fn build<T>(&self, x: &PointSet<'_, T>, y: &PointSet<'_, T>, batch: Option<BatchBoundaries<'_>>) -> Result<EdgeList>
    where
        T: Coordinate,
        M: Metric<T>,
    {
        if x.dim() != y.dim() {
            return Err(RadiusError::DimensionMismatch { source_dim: x.dim(), query_dim: y.dim() });
        }
        let plan: Vec<Segment> = segments(batch, x.len(), y.len())?.collect();
        let collector = NeighborCollector::new(*x, *y, &self.params, &self.metric);

        let edges = match self.execution {
            Execution::Sequential => build_sequential(&collector, &plan),
            Execution::Parallel => build_parallel(&collector, &plan),
        };

        tracing::debug!(
            sources = x.len(),
            queries = y.len(),
            segments = plan.len(),
            edges = edges.len(),
            execution = ?self.execution,
            "radius graph built"
        );
        Ok(edges)
    }
}

fn build_sequential<T: Coordinate, M: Metric<T>>(collector: &NeighborCollector<'_, T, M>, segments: &[Segment]) -> EdgeList {
    let mut edges = EdgeList::default();
    for segment in segments {
        for qi in segment.queries() {
            let accepted = collector.collect_into(qi, segment.sources(), &mut edges.sources);
            edges.queries.resize(edges.queries.len() + accepted, qi);
        }
    }
    edges
}

fn build_parallel<T: Coordinate, M: Metric<T>>(collector: &NeighborCollector<'_, T, M>, segments: &[Segment]) -> EdgeList {
    let units: Vec<(usize, Segment)> = segments
        .iter()
        .flat_map(|segment| segment.queries().map(move |qi| (qi, *segment)))
        .collect();

    let per_query: Vec<Vec<usize>> = units
        .par_iter()
        .map(|&(qi, segment)| collector.collect(qi, segment.sources()))
        .collect();

    // Ordered merge; `collect` on an indexed parallel iterator keeps unit order.
    let total = per_query.iter().map(Vec::len).sum();
    let mut edges = EdgeList::with_capacity(total);
    for (&(qi, _), accepted) in units.iter().zip(per_query) {
        edges.queries.resize(edges.queries.len() + accepted.len(), qi);
        edges.sources.extend(accepted);
    }
    edges
}

/// Euclidean radius graph with the default execution mode.
pub fn radius<T: Coordinate>(
    x: &PointSet<'_, T>,
    y: &PointSet<'_, T>,
    batch: Option<BatchBoundaries<'_>>,
    params: &QueryParameters,
) -> Result<EdgeList> {
    RadiusGraph::euclidean(*params).build(x, y, batch)
}
