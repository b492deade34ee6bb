//! # radius-graph
//!
//! `radius-graph` is a Rust library for building radius neighbor graphs between two point
//! clouds, designed to be used in Rust as well as compiled to WebAssembly (WASM). For every
//! query point it finds the source points within a distance threshold and emits the result as
//! a sparse `(source_index, query_index)` edge list.
//!
//! ## Features
//!
//! - **Batching**: Several independent point clouds can be packed back-to-back in one pair of
//!   flat buffers; offset arrays keep each batch isolated from the others.
//! - **Deterministic**: Edges are ordered by batch, then query index, then source index, and
//!   the per-query neighbor cap truncates in that visitation order. Sequential and parallel
//!   execution produce bit-identical output.
//! - **Mixed precision**: `f32`, `f64`, `f16` and `i32` coordinates, with distances computed in
//!   a floating type at least 32 bits wide.
//! - **Pluggable metrics**: Euclidean by default, any [`Metric`] implementation otherwise.
//!
//! ## Example
//!
//! ```
//! use radius_graph::{radius, PointSet, QueryParameters};
//!
//! let x = [0.0, 0.0, 1.0, 0.0, 5.0, 5.0];
//! let y = [0.0, 0.0];
//! let x = PointSet::new(&x, 2).unwrap();
//! let y = PointSet::new(&y, 2).unwrap();
//!
//! let edges = radius(&x, &y, None, &QueryParameters::new(1.5, 10, false)).unwrap();
//! assert_eq!(edges.pairs().collect::<Vec<_>>(), vec![(0, 0), (1, 0)]);
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`RadiusGraph`] struct, which holds the query parameters,
//! the metric and the execution mode. [`radius`] is a shorthand for the Euclidean case.

mod batch;
mod collector;
mod config;
mod error;
mod graph;
mod metric;
mod points;
mod wasm;

pub use batch::offsets_from_signed;
pub use batch::segments;
pub use batch::BatchBoundaries;
pub use batch::Segment;
pub use batch::Segments;
pub use collector::NeighborCollector;
pub use config::Execution;
pub use config::QueryParameters;
pub use error::BoundaryViolation;
pub use error::RadiusError;
pub use error::Result;
pub use error::Side;
pub use graph::radius;
pub use graph::EdgeList;
pub use graph::RadiusGraph;
pub use metric::Euclidean;
pub use metric::Manhattan;
pub use metric::Metric;
pub use points::random_points;
pub use points::random_points_seeded;
pub use points::Coordinate;
pub use points::PointSet;

pub use half::f16;
