use crate::error::RangeError;
use tracing::warn;

/// Largest magnitude accepted for a bound of the range
pub const LIMIT: f64 = 9_999_999.0;
/// Largest number of samples in a grid
pub const MAX_SAMPLES: usize = 1_000_000;

/// One of the two bounds of a `PlotRange`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The minimum value of `x`
    Min,
    /// The maximum value of `x`
    Max,
}

/// The interval of `x` values a function is plotted on.
///
/// Both bounds stay within `[-LIMIT, LIMIT]`, and `min < max` always holds:
/// edits that would break the ordering are corrected, and reported as an
/// error.
///
/// # Examples
///
/// ```
/// # use fnplot::{PlotRange, RangeError};
/// let mut range = PlotRange::default();
/// assert_eq!((range.min(), range.max()), (0.0, 10.0));
///
/// assert_eq!(range.set_max(-3.0), Err(RangeError::MaxNotAboveMin));
/// assert_eq!((range.min(), range.max()), (0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRange {
    min: f64,
    max: f64,
}

impl Default for PlotRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10.0,
        }
    }
}

impl PlotRange {
    /// Create a new range, with bounds clamped to `[-LIMIT, LIMIT]`.
    ///
    /// # Errors
    ///
    /// Fails if a bound is NaN, or if `min >= max` after clamping.
    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        let min = clamp(min)?;
        let max = clamp(max)?;
        if min >= max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Set the given `bound` to `value`
    pub fn set(&mut self, bound: Bound, value: f64) -> Result<(), RangeError> {
        match bound {
            Bound::Min => self.set_min(value),
            Bound::Max => self.set_max(value),
        }
    }

    /// Set the minimum. If it is not below the maximum anymore, the maximum is
    /// decreased by one, and then raised to `min + 1` if that was not enough,
    /// and `MinNotBelowMax` is returned.
    pub fn set_min(&mut self, value: f64) -> Result<(), RangeError> {
        self.min = clamp(value)?;
        if self.min < self.max {
            return Ok(());
        }
        let previous_max = self.max;
        self.max = clamp(self.max - 1.0)?;
        if self.min >= self.max {
            self.raise_max();
        }
        warn!(
            min = self.min,
            max = self.max,
            previous_max,
            "corrected maximum after editing minimum"
        );
        Err(RangeError::MinNotBelowMax)
    }

    /// Set the maximum. If it is not above the minimum anymore, it is raised
    /// to `min + 1` and `MaxNotAboveMin` is returned.
    pub fn set_max(&mut self, value: f64) -> Result<(), RangeError> {
        self.max = clamp(value)?;
        if self.min < self.max {
            return Ok(());
        }
        let edited = self.max;
        self.raise_max();
        warn!(
            min = self.min,
            max = self.max,
            edited,
            "corrected maximum after editing maximum"
        );
        Err(RangeError::MaxNotAboveMin)
    }

    /// Restore `min < max` by moving the maximum to `min + 1`, or the minimum
    /// to `max - 1` when the maximum is stuck at `LIMIT`.
    fn raise_max(&mut self) {
        self.max = (self.min + 1.0).min(LIMIT);
        if self.min >= self.max {
            self.min = self.max - 1.0;
        }
    }

    /// Uniformly sample `samples` values of `x` over the range, including both
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fnplot::PlotRange;
    /// let range = PlotRange::new(0.0, 10.0).unwrap();
    /// assert_eq!(range.grid(5), Ok(vec![0.0, 2.5, 5.0, 7.5, 10.0]));
    /// ```
    pub fn grid(&self, samples: usize) -> Result<Vec<f64>, RangeError> {
        if samples < 2 {
            return Err(RangeError::TooFewSamples(samples));
        }
        if samples > MAX_SAMPLES {
            return Err(RangeError::TooManySamples(samples));
        }
        let last = samples - 1;
        let step = (self.max - self.min) / last as f64;
        let mut grid: Vec<f64> = (0..last).map(|i| self.min + i as f64 * step).collect();
        grid.push(self.max);
        Ok(grid)
    }
}

fn clamp(value: f64) -> Result<f64, RangeError> {
    if value.is_nan() {
        return Err(RangeError::NotANumber);
    }
    Ok(value.max(-LIMIT).min(LIMIT))
}

#[cfg(test)]
mod tests {
    use super::{Bound, PlotRange, LIMIT, MAX_SAMPLES};
    use crate::error::RangeError;
    use test_case::test_case;

    #[test]
    fn new() {
        assert!(PlotRange::new(-1.0, 1.0).is_ok());
        assert_eq!(
            PlotRange::new(2.0, 2.0),
            Err(RangeError::Inverted { min: 2.0, max: 2.0 })
        );
        assert_eq!(PlotRange::new(f64::NAN, 2.0), Err(RangeError::NotANumber));

        let range = PlotRange::new(-1e12, 1e12).unwrap();
        assert_eq!((range.min(), range.max()), (-LIMIT, LIMIT));
    }

    #[test]
    fn valid_edits() {
        let mut range = PlotRange::default();
        assert_eq!(range.set_min(-4.5), Ok(()));
        assert_eq!(range.set_max(3.0), Ok(()));
        assert_eq!(range.set(Bound::Min, 2.0), Ok(()));
        assert_eq!((range.min(), range.max()), (2.0, 3.0));
    }

    #[test_case(10.0 => (10.0, 11.0) ; "min equal to max")]
    #[test_case(25.0 => (25.0, 26.0) ; "min above max")]
    #[test_case(LIMIT => (LIMIT - 1.0, LIMIT) ; "min at the upper limit")]
    fn min_not_below_max(min: f64) -> (f64, f64) {
        let mut range = PlotRange::default();
        assert_eq!(range.set_min(min), Err(RangeError::MinNotBelowMax));
        (range.min(), range.max())
    }

    #[test_case(0.0 => (0.0, 1.0) ; "max equal to min")]
    #[test_case(-7.0 => (0.0, 1.0) ; "max below min")]
    fn max_not_above_min(max: f64) -> (f64, f64) {
        let mut range = PlotRange::default();
        assert_eq!(range.set_max(max), Err(RangeError::MaxNotAboveMin));
        (range.min(), range.max())
    }

    #[test]
    fn nan_edits_are_rejected() {
        let mut range = PlotRange::default();
        assert_eq!(range.set_min(f64::NAN), Err(RangeError::NotANumber));
        assert_eq!(range, PlotRange::default());
    }

    #[test]
    fn grid() {
        let range = PlotRange::new(-1.0, 1.0).unwrap();
        assert_eq!(range.grid(3), Ok(vec![-1.0, 0.0, 1.0]));
        assert_eq!(range.grid(1), Err(RangeError::TooFewSamples(1)));
        assert_eq!(range.grid(MAX_SAMPLES).map(|grid| grid.len()), Ok(MAX_SAMPLES));
        assert_eq!(
            range.grid(10_000_000_000_000),
            Err(RangeError::TooManySamples(10_000_000_000_000))
        );

        let grid = PlotRange::default().grid(50).unwrap();
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[49], 10.0);
        assert!(grid.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
