use thiserror::Error;

/// Error type for the fnplot crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A word outside of the allowed words was found in the expression
    #[error("'{0}' is forbidden to use")]
    Forbidden(String),
    /// Error while parsing an expression
    #[error("ParseError: {0}")]
    ParseError(String),
    /// Error while evaluating an expression
    #[error("EvalError: {0}")]
    EvalError(String),
    /// The plot range had to be corrected, or can not be sampled
    #[error(transparent)]
    Range(#[from] RangeError),
    /// The plotting backend failed to draw the curve
    #[error("RenderError: {0}")]
    RenderError(String),
}

/// Error type for the plot range bounds
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// The minimum was edited to a value greater or equal to the maximum
    #[error("'min x' should be less than 'max x'.")]
    MinNotBelowMax,
    /// The maximum was edited to a value less or equal to the minimum
    #[error("'max x' should be greater than 'min x'.")]
    MaxNotAboveMin,
    /// A range was built with `min >= max`
    #[error("invalid range [{min}, {max}]: 'min x' should be less than 'max x'.")]
    Inverted {
        /// requested minimum
        min: f64,
        /// requested maximum
        max: f64,
    },
    /// A bound is not a number
    #[error("range bounds must be numbers")]
    NotANumber,
    /// A sample grid needs both ends of the range
    #[error("at least 2 samples are needed, got {0}")]
    TooFewSamples(usize),
    /// A sample grid is limited to `MAX_SAMPLES` values
    #[error("at most {max} samples are allowed, got {0}", max = crate::range::MAX_SAMPLES)]
    TooManySamples(usize),
}

#[cfg(test)]
mod tests {
    use super::{Error, RangeError};

    #[test]
    fn messages() {
        assert_eq!(
            Error::Forbidden("y".into()).to_string(),
            "'y' is forbidden to use"
        );
        assert_eq!(
            Error::from(RangeError::MinNotBelowMax).to_string(),
            "'min x' should be less than 'max x'."
        );
        assert_eq!(
            Error::ParseError("mismatched parenthesis".into()).to_string(),
            "ParseError: mismatched parenthesis"
        );
    }
}
