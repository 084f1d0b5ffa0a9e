//! Decorative diamond layout.
//!
//! Spreads N markers over the viewport by splitting it into a near-square
//! grid and dropping one marker per cell at a jittered position. Each marker
//! stays inside the inner 80% of its cell so neighbours never bunch up on a
//! shared edge.
//!
//! ## Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use trip_core::markers;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let layout = markers::generate(12, 10.0, 30.0, &mut rng).unwrap();
//! assert_eq!(layout.len(), 12);
//! ```

use rand::Rng;

use crate::error::{TripError, TripResult};

/// Fraction of a cell left empty on each side.
const CELL_MARGIN: f64 = 0.1;

/// Animation delay range in seconds.
pub const DELAY_RANGE: std::ops::Range<f64> = 0.0..5.0;

/// Animation duration range in seconds.
pub const DURATION_RANGE: std::ops::Range<f64> = 10.0..20.0;

/// A single decorative, non-interactive diamond in the page background.
///
/// Positions are percentages of the containing rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorativeMarker {
    /// Index within the generated batch
    pub id: usize,
    pub top_percent: f64,
    pub left_percent: f64,
    pub size_px: f64,
    pub rotation_deg: f64,
    pub animation_delay_sec: f64,
    pub animation_duration_sec: f64,
}

/// Grid dimensions `(cols, rows)` used for `count` markers.
///
/// `cols = ceil(sqrt(count))`, `rows = ceil(count / cols)`. Returns `(0, 0)`
/// for an empty batch.
pub fn grid_dims(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    // Integer ceil(sqrt) avoids float rounding on perfect squares.
    let mut cols = (count as f64).sqrt() as usize;
    while cols * cols < count {
        cols += 1;
    }
    let rows = count.div_ceil(cols);
    (cols, rows)
}

/// Grid cell (`row * cols + col`) a marker was placed in.
///
/// `None` for an empty grid.
pub fn cell_index(marker: &DecorativeMarker, cols: usize, rows: usize) -> Option<usize> {
    if cols == 0 || rows == 0 {
        return None;
    }
    let cell_w = 100.0 / cols as f64;
    let cell_h = 100.0 / rows as f64;
    let row = ((marker.top_percent / cell_h) as usize).min(rows - 1);
    let col = ((marker.left_percent / cell_w) as usize).min(cols - 1);
    Some(row * cols + col)
}

/// Convert a signed marker count, rejecting negatives.
pub fn checked_count(count: i64) -> TripResult<usize> {
    usize::try_from(count)
        .map_err(|_| TripError::InvalidArgument(format!("marker count {count} is negative")))
}

fn check_sizes(min_size: f64, max_size: f64) -> TripResult<()> {
    if !min_size.is_finite() || !max_size.is_finite() {
        return Err(TripError::InvalidArgument(format!(
            "marker sizes must be finite (got {min_size}..{max_size})"
        )));
    }
    if min_size <= 0.0 || max_size <= 0.0 {
        return Err(TripError::InvalidArgument(format!(
            "marker sizes must be positive (got {min_size}..{max_size})"
        )));
    }
    if min_size > max_size {
        return Err(TripError::InvalidArgument(format!(
            "min_size {min_size} exceeds max_size {max_size}"
        )));
    }
    Ok(())
}

/// Generate `count` markers spread across a jittered grid.
///
/// Fails with [`TripError::InvalidArgument`] when the size range is empty,
/// non-positive or non-finite.
pub fn generate<R: Rng + ?Sized>(
    count: usize,
    min_size: f64,
    max_size: f64,
    rng: &mut R,
) -> TripResult<Vec<DecorativeMarker>> {
    check_sizes(min_size, max_size)?;

    let (cols, rows) = grid_dims(count);
    if count == 0 {
        return Ok(Vec::new());
    }

    let cell_w = 100.0 / cols as f64;
    let cell_h = 100.0 / rows as f64;
    let inner = CELL_MARGIN..(1.0 - CELL_MARGIN);

    let markers: Vec<DecorativeMarker> = (0..count)
        .map(|i| {
            let row = i / cols;
            let col = i % cols;
            DecorativeMarker {
                id: i,
                top_percent: row as f64 * cell_h + cell_h * rng.random_range(inner.clone()),
                left_percent: col as f64 * cell_w + cell_w * rng.random_range(inner.clone()),
                size_px: rng.random_range(min_size..=max_size),
                rotation_deg: rng.random_range(0.0..360.0),
                animation_delay_sec: rng.random_range(DELAY_RANGE),
                animation_duration_sec: rng.random_range(DURATION_RANGE),
            }
        })
        .collect();

    tracing::debug!(count, cols, rows, "Generated decorative markers");
    Ok(markers)
}

/// Like [`generate`], for callers holding a signed count.
///
/// Negative counts are rejected with [`TripError::InvalidArgument`].
pub fn generate_signed<R: Rng + ?Sized>(
    count: i64,
    min_size: f64,
    max_size: f64,
    rng: &mut R,
) -> TripResult<Vec<DecorativeMarker>> {
    generate(checked_count(count)?, min_size, max_size, rng)
}

/// Generate markers using the thread-local RNG.
pub fn generate_random(
    count: usize,
    min_size: f64,
    max_size: f64,
) -> TripResult<Vec<DecorativeMarker>> {
    generate(count, min_size, max_size, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_grid_dims() {
        assert_eq!(grid_dims(0), (0, 0));
        assert_eq!(grid_dims(1), (1, 1));
        assert_eq!(grid_dims(2), (2, 1));
        assert_eq!(grid_dims(5), (3, 2));
        assert_eq!(grid_dims(9), (3, 3));
        assert_eq!(grid_dims(10), (4, 3));
        assert_eq!(grid_dims(16), (4, 4));
        assert_eq!(grid_dims(17), (5, 4));
    }

    #[test]
    fn test_empty_batch() {
        let markers = generate(0, 5.0, 5.0, &mut rng()).unwrap();
        assert!(markers.is_empty());
    }

    #[test]
    fn test_ids_are_sequential() {
        let markers = generate(7, 10.0, 20.0, &mut rng()).unwrap();
        let ids: Vec<usize> = markers.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_marker_stays_inside_inner_cell() {
        let markers = generate(6, 10.0, 20.0, &mut rng()).unwrap();
        let (cols, rows) = grid_dims(6);
        let cell_w = 100.0 / cols as f64;
        let cell_h = 100.0 / rows as f64;

        for m in &markers {
            let row = m.id / cols;
            let col = m.id % cols;
            let top_in_cell = m.top_percent - row as f64 * cell_h;
            let left_in_cell = m.left_percent - col as f64 * cell_w;
            assert!(top_in_cell >= cell_h * 0.1 - 1e-9 && top_in_cell < cell_h * 0.9);
            assert!(left_in_cell >= cell_w * 0.1 - 1e-9 && left_in_cell < cell_w * 0.9);
        }
    }

    #[test]
    fn test_equal_sizes_allowed() {
        let markers = generate(3, 16.0, 16.0, &mut rng()).unwrap();
        assert!(markers.iter().all(|m| m.size_px == 16.0));
    }

    #[test]
    fn test_inverted_size_range_rejected() {
        let err = generate(3, 30.0, 10.0, &mut rng()).unwrap_err();
        assert!(matches!(err, TripError::InvalidArgument(_)));
    }

    #[test]
    fn test_non_positive_size_rejected() {
        assert!(generate(3, 0.0, 10.0, &mut rng()).is_err());
        assert!(generate(3, -4.0, 10.0, &mut rng()).is_err());
        assert!(generate(3, 1.0, f64::NAN, &mut rng()).is_err());
    }

    #[test]
    fn test_invalid_sizes_rejected_even_when_empty() {
        assert!(generate(0, 30.0, 10.0, &mut rng()).is_err());
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = generate_signed(-1, 10.0, 20.0, &mut rng()).unwrap_err();
        assert!(matches!(err, TripError::InvalidArgument(_)));
        assert_eq!(generate_signed(4, 10.0, 20.0, &mut rng()).unwrap().len(), 4);
    }

    #[test]
    fn test_cell_index_empty_grid() {
        let marker = DecorativeMarker {
            id: 0,
            top_percent: 50.0,
            left_percent: 50.0,
            size_px: 10.0,
            rotation_deg: 0.0,
            animation_delay_sec: 0.0,
            animation_duration_sec: 10.0,
        };
        let (cols, rows) = grid_dims(0);
        assert_eq!(cell_index(&marker, cols, rows), None);
        assert_eq!(cell_index(&marker, 2, 2), Some(3));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = generate(10, 10.0, 20.0, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = generate(10, 10.0, 20.0, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_thread_rng_variant() {
        let markers = generate_random(5, 8.0, 12.0).unwrap();
        assert_eq!(markers.len(), 5);
    }
}
