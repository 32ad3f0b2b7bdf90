//! Elevation statistics over a decoded grid.
//!
//! # Void handling
//!
//! The statistics treat [`VOID_VALUE`] differently on purpose, and the
//! differences must be kept:
//!
//! - [`ElevationGrid::min_max`] never reports a void as the minimum, but a void
//!   is still a candidate for the maximum. On an all-void grid the result is
//!   `(i16::MAX, VOID_VALUE)`.
//! - [`ElevationGrid::mean`] replaces each void with the current running
//!   average before folding it in, so voids barely move the result.
//! - [`ElevationGrid::percentile`] sorts voids together with real samples, so
//!   low percentiles of a grid with voids return [`VOID_VALUE`].

use crate::coords::Point;
use crate::error::{Result, SrtmError};
use crate::grid::{ElevationGrid, VOID_VALUE};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Aggregate statistics for a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSummary {
    /// Smallest non-void sample, `i16::MAX` if there is none.
    pub min: i16,
    /// Largest sample, voids included.
    pub max: i16,
    /// Running mean, see [`ElevationGrid::mean`].
    pub mean: i16,
    /// Exact mean of non-void samples, `None` if every sample is void.
    pub exact_mean: Option<f64>,
    /// Number of void samples.
    pub void_count: usize,
    /// Total number of samples.
    pub element_count: usize,
}

impl GridSummary {
    /// Fraction of samples that are void (0.0 to 1.0).
    pub fn void_ratio(&self) -> f64 {
        self.void_count as f64 / self.element_count as f64
    }
}

impl ElevationGrid {
    /// Returns the minimum and maximum elevation values.
    ///
    /// Voids never become the minimum. They can still be reported as the
    /// maximum when no real sample is larger, which only happens if the grid
    /// holds nothing but voids.
    pub fn min_max(&self) -> (i16, i16) {
        let mut min = i16::MAX;
        let mut max = i16::MIN;

        for &v in self.samples() {
            if v != VOID_VALUE && v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }

        (min, max)
    }

    /// Returns the mean elevation, truncated to whole meters.
    ///
    /// Computed as a single-pass running average so it can't overflow. Each
    /// void is replaced by the current average before it is folded in. The
    /// fold is order-dependent and always runs sequentially; integer division
    /// truncates at every step, so the result can differ slightly from
    /// [`Self::exact_mean`].
    pub fn mean(&self) -> i16 {
        let mut avg: i64 = 0;

        for (i, &v) in self.samples().iter().enumerate() {
            let v = if v == VOID_VALUE { avg } else { i64::from(v) };
            avg += (v - avg) / (i as i64 + 1);
        }

        // The running average of i16 samples stays within i16 range.
        avg as i16
    }

    /// Returns the arithmetic mean of all non-void samples.
    ///
    /// Sums into an `i64`, so the result is exact up to `f64` precision and
    /// independent of scan order. Returns `None` if every sample is void.
    pub fn exact_mean(&self) -> Option<f64> {
        let (sum, count) = self.non_void_sum();
        if count == 0 {
            None
        } else {
            Some(sum as f64 / count as f64)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn non_void_sum(&self) -> (i64, u64) {
        self.samples()
            .iter()
            .filter(|&&v| v != VOID_VALUE)
            .fold((0i64, 0u64), |(sum, count), &v| {
                (sum + i64::from(v), count + 1)
            })
    }

    #[cfg(feature = "parallel")]
    fn non_void_sum(&self) -> (i64, u64) {
        self.samples()
            .par_iter()
            .filter(|&&v| v != VOID_VALUE)
            .fold(
                || (0i64, 0u64),
                |(sum, count), &v| (sum + i64::from(v), count + 1),
            )
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
    }

    /// Returns the number of void samples.
    pub fn void_count(&self) -> usize {
        self.samples().iter().filter(|&&v| v == VOID_VALUE).count()
    }

    /// Returns the linear indices of all void samples in scan order.
    pub fn void_indices(&self) -> Vec<usize> {
        self.samples()
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == VOID_VALUE)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the coordinates of all void samples in row-major scan order.
    pub fn void_points(&self) -> Vec<Point> {
        let side = self.side_length();
        self.void_indices()
            .into_iter()
            .map(|i| Point::new((i % side) as i64, (i / side) as i64))
            .collect()
    }

    /// Returns the sample at the given coordinate.
    ///
    /// The result may be [`VOID_VALUE`].
    ///
    /// # Errors
    ///
    /// Returns [`SrtmError::OutOfBounds`] if the point lies outside the grid.
    pub fn elevation_at(&self, point: Point) -> Result<i16> {
        let index = self.format().point_to_index(point)?;
        Ok(self.samples()[index as usize])
    }

    /// Returns the nearest-rank percentile of all samples, voids included.
    ///
    /// The rank is `floor(len * p)`, except that `p == 1.0` selects the last
    /// element. `percentile(0.0)` is therefore the smallest sample, which is
    /// [`VOID_VALUE`] whenever the grid contains a void.
    ///
    /// # Errors
    ///
    /// Returns [`SrtmError::InvalidPercentile`] unless `0.0 <= p <= 1.0`.
    pub fn percentile(&self, p: f64) -> Result<i16> {
        if !(0.0..=1.0).contains(&p) {
            return Err(SrtmError::InvalidPercentile { p });
        }

        let mut sorted = self.samples().to_vec();
        sort_samples(&mut sorted);

        let len = sorted.len();
        let rank = if p == 1.0 {
            len - 1
        } else {
            ((len as f64 * p).floor() as usize).min(len - 1)
        };

        Ok(sorted[rank])
    }

    /// Compute min/max, both means and the void count.
    pub fn summary(&self) -> GridSummary {
        let (min, max) = self.min_max();
        GridSummary {
            min,
            max,
            mean: self.mean(),
            exact_mean: self.exact_mean(),
            void_count: self.void_count(),
            element_count: self.format().element_count(),
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn sort_samples(samples: &mut [i16]) {
    samples.sort_unstable();
}

#[cfg(feature = "parallel")]
fn sort_samples(samples: &mut [i16]) {
    samples.par_sort_unstable();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::GridFormat;

    const F3: GridFormat = GridFormat::Format3;

    fn grid_with(values: &[(usize, i16)]) -> ElevationGrid {
        let mut data = vec![0i16; F3.element_count()];
        for &(i, v) in values {
            data[i] = v;
        }
        ElevationGrid::from_samples(F3, data).unwrap()
    }

    #[test]
    fn test_min_max_ignores_void_for_min() {
        let grid = grid_with(&[(0, VOID_VALUE), (10, -12), (20, 4000)]);
        assert_eq!(grid.min_max(), (-12, 4000));
    }

    #[test]
    fn test_min_max_all_void() {
        let grid = ElevationGrid::filled(F3, VOID_VALUE);
        assert_eq!(grid.min_max(), (i16::MAX, VOID_VALUE));
    }

    #[test]
    fn test_min_max_constant_grid() {
        let grid = ElevationGrid::filled(F3, 250);
        assert_eq!(grid.min_max(), (250, 250));
    }

    #[test]
    fn test_mean_constant_grid() {
        assert_eq!(ElevationGrid::filled(F3, 100).mean(), 100);
        assert_eq!(ElevationGrid::filled(F3, -430).mean(), -430);
        assert_eq!(ElevationGrid::zeroed(F3).mean(), 0);
    }

    #[test]
    fn test_mean_all_void_stays_zero() {
        assert_eq!(ElevationGrid::filled(F3, VOID_VALUE).mean(), 0);
    }

    #[test]
    fn test_mean_voids_are_no_ops() {
        let mut data = vec![100i16; F3.element_count()];
        for i in (1..data.len()).step_by(3) {
            data[i] = VOID_VALUE;
        }
        let grid = ElevationGrid::from_samples(F3, data).unwrap();
        assert_eq!(grid.mean(), 100);
    }

    #[test]
    fn test_mean_leading_void_rounding_artifact() {
        // A void in first position folds in as 0, and truncating division
        // then stalls the average below the real value.
        let mut data = vec![100i16; F3.element_count()];
        for i in (0..data.len()).step_by(3) {
            data[i] = VOID_VALUE;
        }
        let grid = ElevationGrid::from_samples(F3, data).unwrap();
        assert_eq!(grid.mean(), 85);
        assert_eq!(grid.exact_mean(), Some(100.0));
    }

    #[test]
    fn test_mean_extremes_do_not_overflow() {
        let data: Vec<i16> = (0..F3.element_count())
            .map(|i| if i % 2 == 0 { i16::MAX } else { i16::MAX - 1 })
            .collect();
        let grid = ElevationGrid::from_samples(F3, data).unwrap();
        assert!(grid.mean() >= i16::MAX - 1);
    }

    #[test]
    fn test_mean_truncates() {
        // Running average over [0, 1]: 0, then 0 + (1 - 0) / 2 = 0
        let grid = grid_with(&[(1, 1)]);
        assert_eq!(grid.mean(), 0);
    }

    #[test]
    fn test_exact_mean() {
        assert_eq!(ElevationGrid::filled(F3, 100).exact_mean(), Some(100.0));
        assert_eq!(ElevationGrid::filled(F3, VOID_VALUE).exact_mean(), None);

        let count = F3.element_count() as f64;
        let grid = grid_with(&[(0, VOID_VALUE), (1, 1000)]);
        let expected = 1000.0 / (count - 1.0);
        assert!((grid.exact_mean().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_void_enumeration() {
        let side = F3.side_length();
        let grid = grid_with(&[(5, VOID_VALUE), (side + 2, VOID_VALUE), (side * side - 1, VOID_VALUE)]);

        assert_eq!(grid.void_count(), 3);
        assert_eq!(grid.void_indices(), vec![5, side + 2, side * side - 1]);
        assert_eq!(
            grid.void_points(),
            vec![
                Point::new(5, 0),
                Point::new(2, 1),
                Point::new(side as i64 - 1, side as i64 - 1)
            ]
        );
    }

    #[test]
    fn test_no_voids() {
        let grid = ElevationGrid::zeroed(F3);
        assert_eq!(grid.void_count(), 0);
        assert!(grid.void_points().is_empty());
    }

    #[test]
    fn test_elevation_at() {
        let side = F3.side_length();
        let grid = grid_with(&[(600 * side + 600, 500), (1, VOID_VALUE)]);

        assert_eq!(grid.elevation_at(Point::new(600, 600)).unwrap(), 500);
        assert_eq!(grid.elevation_at(Point::new(1, 0)).unwrap(), VOID_VALUE);
        assert_eq!(grid.elevation_at(Point::new(0, 0)).unwrap(), 0);
        assert!(matches!(
            grid.elevation_at(Point::new(1201, 0)),
            Err(SrtmError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_percentile_bounds() {
        let grid = grid_with(&[(0, VOID_VALUE), (1, -5), (2, 8848)]);

        // Voids sort first and count towards the rank
        assert_eq!(grid.percentile(0.0).unwrap(), VOID_VALUE);
        assert_eq!(grid.percentile(1.0).unwrap(), 8848);
        assert_eq!(grid.percentile(0.5).unwrap(), 0);
    }

    #[test]
    fn test_percentile_nearest_rank() {
        // Column index as the value: each value 0..=1200 appears 1201 times.
        let side = F3.side_length();
        let data: Vec<i16> = (0..F3.element_count()).map(|i| (i % side) as i16).collect();
        let grid = ElevationGrid::from_samples(F3, data).unwrap();

        let len = F3.element_count() as f64;
        for p in [0.1, 0.25, 0.5, 0.75, 0.99] {
            let rank = (len * p).floor() as usize;
            assert_eq!(grid.percentile(p).unwrap(), (rank / side) as i16);
        }
        assert_eq!(grid.percentile(0.0).unwrap(), 0);
        assert_eq!(grid.percentile(1.0).unwrap(), 1200);
    }

    #[test]
    fn test_percentile_invalid_argument() {
        let grid = ElevationGrid::zeroed(F3);
        for p in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                grid.percentile(p),
                Err(SrtmError::InvalidPercentile { .. })
            ));
        }
    }

    #[test]
    fn test_summary() {
        let grid = grid_with(&[(0, VOID_VALUE), (1, -20), (2, 900)]);
        let summary = grid.summary();

        assert_eq!(summary.min, -20);
        assert_eq!(summary.max, 900);
        assert_eq!(summary.mean, grid.mean());
        assert_eq!(summary.void_count, 1);
        assert_eq!(summary.element_count, F3.element_count());
        assert!((summary.void_ratio() - 1.0 / F3.element_count() as f64).abs() < 1e-12);
    }
}
