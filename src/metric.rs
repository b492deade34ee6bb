use crate::points::Coordinate;
use num_traits::{Float, Zero};

/// A distance between two coordinate vectors of equal width.
///
/// Implementations are stateless from the caller's point of view and may be
/// evaluated concurrently for arbitrary pairs.
pub trait Metric<T: Coordinate>: Send + Sync {
    /// Distance between `query` and `candidate`, computed in the wide type.
    fn distance(&self, query: &[T], candidate: &[T]) -> T::Wide;

    /// Whether `candidate` lies within the inclusive `radius` of `query`.
    ///
    /// Any comparison involving NaN is false, so a NaN coordinate or a NaN
    /// radius rejects the candidate.
    fn within(&self, query: &[T], candidate: &[T], radius: T::Wide) -> bool {
        self.distance(query, candidate) <= radius
    }
}

/// Euclidean (L2) distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl Euclidean {
    #[inline(always)]
    pub fn distance_sq<T: Coordinate>(&self, query: &[T], candidate: &[T]) -> T::Wide {
        debug_assert_eq!(query.len(), candidate.len());
        query
            .iter()
            .zip(candidate.iter())
            .map(|(&a, &b)| {
                let diff = b.widen() - a.widen();
                diff * diff
            })
            .sum()
    }

    // Divides by the largest component before squaring, so the result is
    // representable where the plain sum of squares overflows or underflows. NaN
    // components propagate.
    fn distance_scaled<T: Coordinate>(&self, query: &[T], candidate: &[T]) -> T::Wide {
        let scale = query
            .iter()
            .zip(candidate.iter())
            .map(|(&a, &b)| (b.widen() - a.widen()).abs())
            .fold(T::Wide::zero(), |max, d| if d > max || d.is_nan() { d } else { max });
        if scale == T::Wide::zero() || !scale.is_finite() {
            return scale;
        }
        let sum: T::Wide = query
            .iter()
            .zip(candidate.iter())
            .map(|(&a, &b)| {
                let diff = (b.widen() - a.widen()) / scale;
                diff * diff
            })
            .sum();
        sum.sqrt() * scale
    }
}

impl<T: Coordinate> Metric<T> for Euclidean {
    fn distance(&self, query: &[T], candidate: &[T]) -> T::Wide {
        let d2 = self.distance_sq(query, candidate);
        if d2.is_normal() {
            d2.sqrt()
        } else {
            self.distance_scaled(query, candidate)
        }
    }

    // Compares squared lengths while r * r is a normal number; otherwise the
    // squares would overflow or flush to zero and the true length is used.
    // The sign guard keeps a negative radius from matching through r * r.
    #[inline(always)]
    fn within(&self, query: &[T], candidate: &[T], radius: T::Wide) -> bool {
        if !(radius >= T::Wide::zero()) {
            return false;
        }
        let r2 = radius * radius;
        if r2.is_normal() {
            self.distance_sq(query, candidate) <= r2
        } else {
            self.distance(query, candidate) <= radius
        }
    }
}

/// Manhattan (L1) distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl<T: Coordinate> Metric<T> for Manhattan {
    fn distance(&self, query: &[T], candidate: &[T]) -> T::Wide {
        debug_assert_eq!(query.len(), candidate.len());
        query
            .iter()
            .zip(candidate.iter())
            .map(|(&a, &b)| (b.widen() - a.widen()).abs())
            .sum()
    }
}
