use crate::error::{RadiusError, Result};
use half::f16;
use num_traits::Float;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::fmt::Debug;
use std::iter::Sum;

/// A scalar that can be stored in a point buffer.
///
/// Every storage type names a wide floating type that distance arithmetic is
/// carried out in, so narrow inputs never overflow or lose their ordering
/// before the radius comparison. Half precision and integer coordinates are
/// widened to `f32`; `f64` stays `f64`.
pub trait Coordinate: Copy + Debug + Send + Sync + 'static {
    type Wide: Float + Debug + Send + Sync + Sum;

    fn widen(self) -> Self::Wide;
}

impl Coordinate for f32 {
    type Wide = f32;

    #[inline(always)]
    fn widen(self) -> f32 {
        self
    }
}

impl Coordinate for f64 {
    type Wide = f64;

    #[inline(always)]
    fn widen(self) -> f64 {
        self
    }
}

impl Coordinate for f16 {
    type Wide = f32;

    #[inline(always)]
    fn widen(self) -> f32 {
        self.to_f32()
    }
}

impl Coordinate for i32 {
    type Wide = f32;

    #[inline(always)]
    fn widen(self) -> f32 {
        self as f32
    }
}

/// A borrowed view over a flat buffer of `dim`-dimensional points.
///
/// Point `i` occupies `data[i * dim..(i + 1) * dim]`.
#[derive(Clone, Copy, Debug)]
pub struct PointSet<'a, T> {
    data: &'a [T],
    dim: usize,
}

impl<'a, T: Coordinate> PointSet<'a, T> {
    /// Wraps `data` as a set of `dim`-dimensional points.
    ///
    /// Fails with [`RadiusError::InvalidShape`] if `dim` is zero or the buffer
    /// length is not a multiple of `dim`. An empty buffer is a valid empty set.
    pub fn new(data: &'a [T], dim: usize) -> Result<Self> {
        if dim == 0 || data.len() % dim != 0 {
            return Err(RadiusError::InvalidShape { len: data.len(), dim });
        }
        Ok(Self { data, dim })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Feature width shared by every point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordinates of point `index`.
    #[inline(always)]
    pub fn point(&self, index: usize) -> &'a [T] {
        &self.data[index * self.dim..(index + 1) * self.dim]
    }

    pub fn iter(&self) -> std::slice::ChunksExact<'a, T> {
        self.data.chunks_exact(self.dim)
    }
}

/// Generates `count` points of width `dim`, uniformly distributed in `[low, high)`.
///
/// Natively the generator is seeded with a fixed value so fixtures are
/// reproducible; in the browser it is seeded from `Math.random`.
///
/// # Panics
///
/// Panics if `low >= high`.
pub fn random_points(count: usize, dim: usize, low: f64, high: f64) -> Vec<f64> {
    random_points_seeded(count, dim, low, high, get_seed())
}

/// Same as [`random_points`] with an explicit seed.
pub fn random_points_seeded(count: usize, dim: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count * dim).map(|_| rng.gen_range(low..high)).collect()
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}
