//! Query parameters and execution settings for radius graph construction.

use serde::{Deserialize, Serialize};

/// The scalar parameters of one radius query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParameters {
    /// Inclusive distance threshold. A candidate at exactly `radius` matches.
    /// A negative or NaN radius matches nothing.
    pub radius: f64,
    /// Maximum number of edges emitted per query point. Candidates are taken
    /// in ascending source index order, not ranked by distance.
    pub max_num_neighbors: usize,
    /// Drop a candidate whose global source index equals the query's global
    /// index. Only meaningful when both sets share one indexing.
    pub ignore_same_index: bool,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            radius: 1.0,
            max_num_neighbors: 32,
            ignore_same_index: false,
        }
    }
}

impl QueryParameters {
    pub fn new(radius: f64, max_num_neighbors: usize, ignore_same_index: bool) -> Self {
        Self {
            radius,
            max_num_neighbors,
            ignore_same_index,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_max_num_neighbors(mut self, max_num_neighbors: usize) -> Self {
        self.max_num_neighbors = max_num_neighbors;
        self
    }

    pub fn with_ignore_same_index(mut self, ignore_same_index: bool) -> Self {
        self.ignore_same_index = ignore_same_index;
        self
    }
}

/// How the per-query work is scheduled.
///
/// Both modes produce bit-identical edge lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Execution {
    /// Nested loops on the calling thread, appending straight into the output.
    Sequential,
    /// One rayon task per query point; per-task buffers are concatenated in order.
    #[default]
    Parallel,
}
