use crate::error::{BoundaryViolation, Result, Side};
use std::ops::Range;

/// Offsets partitioning the source and query sets into aligned batches.
///
/// Batch `b` covers source indices `ptr_x[b]..ptr_x[b + 1]` and query indices
/// `ptr_y[b]..ptr_y[b + 1]`.
#[derive(Clone, Copy, Debug)]
pub struct BatchBoundaries<'a> {
    pub ptr_x: &'a [usize],
    pub ptr_y: &'a [usize],
}

impl<'a> BatchBoundaries<'a> {
    pub fn new(ptr_x: &'a [usize], ptr_y: &'a [usize]) -> Self {
        Self { ptr_x, ptr_y }
    }

    /// Number of batches described, `B` for arrays of length `B + 1`.
    pub fn count(&self) -> usize {
        self.ptr_x.len().saturating_sub(1)
    }

    /// Checks the pointer arrays against a source set of `n` and a query set
    /// of `m` points.
    ///
    /// Both arrays must have the same non-zero length, start at 0, never
    /// decrease, and end at `n` and `m` respectively.
    pub fn validate(&self, n: usize, m: usize) -> std::result::Result<(), BoundaryViolation> {
        if self.ptr_x.len() != self.ptr_y.len() {
            return Err(BoundaryViolation::LengthMismatch {
                source_len: self.ptr_x.len(),
                query_len: self.ptr_y.len(),
            });
        }
        validate_side(self.ptr_x, n, Side::Source)?;
        validate_side(self.ptr_y, m, Side::Query)
    }
}

fn validate_side(ptr: &[usize], total: usize, side: Side) -> std::result::Result<(), BoundaryViolation> {
    let (&first, &last) = match (ptr.first(), ptr.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(BoundaryViolation::Empty),
    };
    if first != 0 {
        return Err(BoundaryViolation::NonZeroStart { side, value: first });
    }
    if let Some(position) = ptr.windows(2).position(|w| w[1] < w[0]) {
        return Err(BoundaryViolation::Decreasing { side, position: position + 1 });
    }
    if last != total {
        return Err(BoundaryViolation::EndMismatch { side, value: last, expected: total });
    }
    Ok(())
}

/// Converts signed offsets, as handed over from JavaScript typed arrays, into
/// boundary offsets.
pub fn offsets_from_signed(ptr: &[i32], side: Side) -> std::result::Result<Vec<usize>, BoundaryViolation> {
    ptr.iter()
        .enumerate()
        .map(|(position, &value)| {
            usize::try_from(value).map_err(|_| BoundaryViolation::Negative {
                side,
                position,
                value: value as i64,
            })
        })
        .collect()
}

/// One batch: a range of global source indices paired with a range of global
/// query indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub x_start: usize,
    pub x_end: usize,
    pub y_start: usize,
    pub y_end: usize,
}

impl Segment {
    pub fn sources(&self) -> Range<usize> {
        self.x_start..self.x_end
    }

    pub fn queries(&self) -> Range<usize> {
        self.y_start..self.y_end
    }

    /// A segment without sources or without queries produces no edges.
    pub fn is_empty(&self) -> bool {
        self.x_start == self.x_end || self.y_start == self.y_end
    }
}

/// Lazily yields the non-empty segments of a source/query pair in ascending
/// batch order.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    boundaries: Option<BatchBoundaries<'a>>,
    whole: Option<Segment>,
    next: usize,
}

/// Splits a source set of `n` and a query set of `m` points into segments.
///
/// Without boundaries the whole of both sets forms a single segment. Empty
/// segments are skipped, not reported.
pub fn segments(boundaries: Option<BatchBoundaries<'_>>, n: usize, m: usize) -> Result<Segments<'_>> {
    match boundaries {
        Some(b) => {
            b.validate(n, m)?;
            Ok(Segments { boundaries: Some(b), whole: None, next: 0 })
        }
        None => Ok(Segments {
            boundaries: None,
            whole: Some(Segment { x_start: 0, x_end: n, y_start: 0, y_end: m }),
            next: 0,
        }),
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let Some(b) = self.boundaries else {
            return self.whole.take().filter(|s| !s.is_empty());
        };
        while self.next < b.count() {
            let i = self.next;
            self.next += 1;
            let segment = Segment {
                x_start: b.ptr_x[i],
                x_end: b.ptr_x[i + 1],
                y_start: b.ptr_y[i],
                y_end: b.ptr_y[i + 1],
            };
            if segment.is_empty() {
                tracing::trace!(batch = i, ?segment, "skipping empty segment");
                continue;
            }
            return Some(segment);
        }
        None
    }
}
