use crate::batch::{offsets_from_signed, BatchBoundaries};
use crate::config::QueryParameters;
use crate::error::{BoundaryViolation, RadiusError, Side};
use crate::graph::{self, EdgeList};
use crate::points::{self, Coordinate, PointSet};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

/// Radius graph edges exposed to JavaScript.
#[wasm_bindgen(js_name = EdgeList)]
pub struct EdgeListWasm {
    sources: Vec<u32>,
    queries: Vec<u32>,
}

impl From<EdgeList> for EdgeListWasm {
    fn from(edges: EdgeList) -> Self {
        let (sources, queries) = edges.into_parts();
        Self {
            sources: sources.into_iter().map(|i| i as u32).collect(),
            queries: queries.into_iter().map(|i| i as u32).collect(),
        }
    }
}

#[wasm_bindgen(js_class = EdgeList)]
impl EdgeListWasm {
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[wasm_bindgen(getter)]
    pub fn sources(&self) -> Vec<u32> {
        self.sources.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn queries(&self) -> Vec<u32> {
        self.queries.clone()
    }

    /// Flat 2×K matrix: all source indices followed by all query indices.
    #[wasm_bindgen(getter)]
    pub fn matrix(&self) -> Vec<u32> {
        [self.sources.as_slice(), self.queries.as_slice()].concat()
    }
}

/// Euclidean radius graph over `Float64Array` coordinates.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn radius(
    x: &[f64],
    y: &[f64],
    dim: usize,
    ptr_x: Option<Vec<i32>>,
    ptr_y: Option<Vec<i32>>,
    r: f64,
    max_num_neighbors: usize,
    ignore_same_index: bool,
) -> Result<EdgeListWasm, JsError> {
    radius_impl(x, y, dim, ptr_x, ptr_y, QueryParameters::new(r, max_num_neighbors, ignore_same_index))
}

/// Euclidean radius graph over `Float32Array` coordinates.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn radius_f32(
    x: &[f32],
    y: &[f32],
    dim: usize,
    ptr_x: Option<Vec<i32>>,
    ptr_y: Option<Vec<i32>>,
    r: f64,
    max_num_neighbors: usize,
    ignore_same_index: bool,
) -> Result<EdgeListWasm, JsError> {
    radius_impl(x, y, dim, ptr_x, ptr_y, QueryParameters::new(r, max_num_neighbors, ignore_same_index))
}

/// Uniformly distributed fixture points in `[low, high)`.
#[wasm_bindgen]
pub fn random_points(count: usize, dim: usize, low: f64, high: f64) -> Result<Vec<f64>, JsError> {
    if !(low < high) {
        return Err(JsError::new("random_points requires low < high"));
    }
    Ok(points::random_points(count, dim, low, high))
}

fn radius_impl<T: Coordinate>(
    x: &[T],
    y: &[T],
    dim: usize,
    ptr_x: Option<Vec<i32>>,
    ptr_y: Option<Vec<i32>>,
    params: QueryParameters,
) -> Result<EdgeListWasm, JsError> {
    let x = PointSet::new(x, dim)?;
    let y = PointSet::new(y, dim)?;
    let offsets = parse_offsets(ptr_x, ptr_y)?;
    let batch = offsets.as_ref().map(|(px, py)| BatchBoundaries::new(px, py));
    Ok(graph::radius(&x, &y, batch, &params)?.into())
}

// Both pointer arrays or neither; a lone array is a length mismatch.
fn parse_offsets(ptr_x: Option<Vec<i32>>, ptr_y: Option<Vec<i32>>) -> Result<Option<(Vec<usize>, Vec<usize>)>, RadiusError> {
    match (ptr_x, ptr_y) {
        (None, None) => Ok(None),
        (px, py) => {
            let px = offsets_from_signed(px.as_deref().unwrap_or_default(), Side::Source)?;
            let py = offsets_from_signed(py.as_deref().unwrap_or_default(), Side::Query)?;
            if px.len() != py.len() {
                return Err(BoundaryViolation::LengthMismatch { source_len: px.len(), query_len: py.len() }.into());
            }
            Ok(Some((px, py)))
        }
    }
}
