use crate::error::{Error, RangeError};
use crate::range::{PlotRange, MAX_SAMPLES};

/// Number of sampled values of `x` per plot
pub const DEFAULT_SAMPLES: usize = 50;
/// Default image width, in pixels
pub const DEFAULT_WIDTH: u32 = 750;
/// Default image height, in pixels
pub const DEFAULT_HEIGHT: u32 = 750;
/// Example expression shown to the user
pub const PLACEHOLDER: &str = "Ex: 5*x^3 + 2*x";

/// Settings of a plotting session
#[derive(Debug, Clone, PartialEq)]
pub struct PlotterConfig {
    /// Initial minimum value of `x`
    pub min: f64,
    /// Initial maximum value of `x`
    pub max: f64,
    /// Number of sampled values of `x`
    pub samples: usize,
    /// Image width, in pixels
    pub width: u32,
    /// Image height, in pixels
    pub height: u32,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        let range = PlotRange::default();
        Self {
            min: range.min(),
            max: range.max(),
            samples: DEFAULT_SAMPLES,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl PlotterConfig {
    /// Check the settings, and build the initial range.
    ///
    /// # Errors
    ///
    /// Fails on an invalid range, on a number of samples outside of
    /// `[2, MAX_SAMPLES]`, or with an empty image.
    pub fn validate(&self) -> Result<PlotRange, Error> {
        let range = PlotRange::new(self.min, self.max)?;
        if self.samples < 2 {
            return Err(RangeError::TooFewSamples(self.samples).into());
        }
        if self.samples > MAX_SAMPLES {
            return Err(RangeError::TooManySamples(self.samples).into());
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::RenderError(format!(
                "invalid image size {}x{}",
                self.width, self.height
            )));
        }
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::PlotterConfig;
    use crate::error::{Error, RangeError};
    use crate::range::PlotRange;

    #[test]
    fn default_is_valid() {
        assert_eq!(PlotterConfig::default().validate(), Ok(PlotRange::default()));
    }

    #[test]
    fn invalid() {
        let config = PlotterConfig {
            min: 3.0,
            max: 1.0,
            ..PlotterConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::Range(RangeError::Inverted { min: 3.0, max: 1.0 }))
        );

        let config = PlotterConfig {
            samples: 1,
            ..PlotterConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::Range(RangeError::TooFewSamples(1)))
        );

        let config = PlotterConfig {
            samples: 10_000_000_000_000,
            ..PlotterConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::Range(RangeError::TooManySamples(10_000_000_000_000)))
        );
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "at most 1000000 samples are allowed, got 10000000000000"
        );

        let config = PlotterConfig {
            width: 0,
            ..PlotterConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
