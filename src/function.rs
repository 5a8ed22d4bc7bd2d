use crate::error::Error;

/// Named functions usable in an expression, as `name(argument)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `sqrt`, defined for non-negative arguments
    Sqrt,
    /// `exp`
    Exp,
}

impl Function {
    /// Get the spelling of the function in expressions
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
        }
    }

    /// Apply the function to `value`.
    ///
    /// # Errors
    ///
    /// Returns an `EvalError` when `value` is outside of the function domain.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fnplot::Function;
    /// assert_eq!(Function::Sqrt.apply(9.0), Ok(3.0));
    /// assert!(Function::Sqrt.apply(-1.0).is_err());
    /// ```
    pub fn apply(self, value: f64) -> Result<f64, Error> {
        match self {
            Self::Sin => Ok(libm::sin(value)),
            Self::Cos => Ok(libm::cos(value)),
            Self::Sqrt if value < 0.0 => Err(Error::EvalError(format!(
                "sqrt of negative value {}",
                value
            ))),
            Self::Sqrt => Ok(libm::sqrt(value)),
            Self::Exp => Ok(libm::exp(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Function;
    use crate::Error;
    use test_case::test_case;

    #[test_case(Function::Sin, 0.0 => Ok(0.0) ; "sin of zero")]
    #[test_case(Function::Cos, 0.0 => Ok(1.0) ; "cos of zero")]
    #[test_case(Function::Exp, 0.0 => Ok(1.0) ; "exp of zero")]
    #[test_case(Function::Sqrt, 16.0 => Ok(4.0) ; "sqrt of a square")]
    #[test_case(Function::Sqrt, 0.0 => Ok(0.0) ; "sqrt of zero")]
    #[test_case(Function::Sqrt, -4.0 => Err(Error::EvalError("sqrt of negative value -4".into())) ; "sqrt of a negative value")]
    fn apply(func: Function, value: f64) -> Result<f64, Error> {
        func.apply(value)
    }
}
