use crate::ast::Ast;
use crate::lexer::{check_words, Lexer};
use crate::Error;
use std::fmt::{self, Display, Formatter};
use tracing::debug;

/// A callable built from an expression: it maps the sampled values of `x` to
/// the values of the expression, one for one.
pub type CompiledFn = Box<dyn Fn(&[f64]) -> Result<Vec<f64>, Error>>;

/// Evaluate the expression in `input` for every value of `xs`.
///
/// Returns `Ok(results)` with one result per value of `xs` if the
/// evaluation is successful, or `Err(cause)` if checking, parsing or
/// evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use fnplot::eval;
/// assert_eq!(eval("2*x", &[0.0, 1.0, 2.0]), Ok(vec![0.0, 2.0, 4.0]));
/// assert_eq!(eval("x^2", &[0.0, 1.0, 2.0, 3.0]), Ok(vec![0.0, 1.0, 4.0, 9.0]));
/// assert!(eval("sqrt(x)", &[-1.0, 0.0]).is_err());
/// ```
pub fn eval(input: &str, xs: &[f64]) -> Result<Vec<f64>, Error> {
    Expr::parse(input).and_then(|expr| expr.eval_all(xs))
}

/// Check and parse `input`, and turn it into a function of `x` working on
/// whole sample arrays.
///
/// # Example
///
/// ```
/// # use fnplot::compile;
/// let function = compile("5").unwrap();
/// assert_eq!(function(&[0.0, 2.5, 5.0]), Ok(vec![5.0, 5.0, 5.0]));
///
/// assert!(compile("y + 1").is_err());
/// ```
pub fn compile(input: &str) -> Result<CompiledFn, Error> {
    Expr::parse(input).map(Expr::compile)
}

/// A checked, parsed and optimized mathematical expression of `x`.
///
/// # Examples
/// ```
/// # use fnplot::Expr;
/// let expr = Expr::parse("3 + 5 * 2").unwrap();
/// assert!(expr.is_constant());
/// assert_eq!(expr.eval(0.0), Ok(13.0));
///
/// let expr = Expr::parse("-2 * x").unwrap();
/// assert_eq!(expr.eval(21.0), Ok(-42.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    ast: Ast,
}

impl Expr {
    /// Parse the given mathematical `expression` into an `Expr`.
    ///
    /// The words of the expression are checked against the allowed words
    /// first, from left to right, and nothing is parsed if one of them is
    /// forbidden.
    ///
    /// # Examples
    /// ```
    /// # use fnplot::{Error, Expr};
    /// // A valid expression
    /// assert!(Expr::parse("5*x^3 + 2*x").is_ok());
    /// // invalid expressions
    /// assert_eq!(
    ///     Expr::parse("cosh(x)").unwrap_err(),
    ///     Error::Forbidden("cosh".into())
    /// );
    /// assert!(Expr::parse("(x + 2").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        check_words(expression)?;
        let mut lexer = Lexer::new(expression);
        let ast = Ast::from_tokens(&mut lexer.parse()?)?;
        debug!(%expression, parsed = %ast, "parsed expression");
        Ok(Self { ast })
    }

    /// Check if the expression does not depend on `x`
    pub fn is_constant(&self) -> bool {
        !self.ast.has_variable()
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    /// Evaluate the expression for a single value of `x`.
    ///
    /// # Errors
    ///
    /// Fails with an `EvalError` when `x` is outside of the expression domain,
    /// or when the result is not a finite number.
    pub fn eval(&self, x: f64) -> Result<f64, Error> {
        let undefined = |cause: String| {
            Error::EvalError(format!("f(x) is undefined for x = {}: {}", x, cause))
        };
        match self.ast.eval(x) {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(value) => Err(undefined(format!("result is {}", value))),
            Err(Error::EvalError(cause)) => Err(undefined(cause)),
            Err(err) => Err(err),
        }
    }

    /// Evaluate the expression for every value of `xs`. A constant expression
    /// is evaluated once, and repeated for every value.
    ///
    /// # Errors
    ///
    /// Fails on the first value of `xs` for which the evaluation fails.
    pub fn eval_all(&self, xs: &[f64]) -> Result<Vec<f64>, Error> {
        if self.is_constant() {
            let value = self.constant()?;
            return Ok(vec![value; xs.len()]);
        }
        let ys = xs.iter().map(|&x| self.eval(x)).collect::<Result<Vec<_>, _>>()?;
        debug!(samples = ys.len(), "evaluated expression");
        Ok(ys)
    }

    /// Turn the expression into a function of whole sample arrays
    pub fn compile(self) -> CompiledFn {
        Box::new(move |xs: &[f64]| self.eval_all(xs))
    }

    fn constant(&self) -> Result<f64, Error> {
        match self.ast.eval(0.0) {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(value) => Err(Error::EvalError(format!("constant value is {}", value))),
            Err(err) => Err(err),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.ast, fmt)
    }
}
