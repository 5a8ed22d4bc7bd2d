#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal,
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

//! fnplot, a crate for plotting single-variable mathematical expressions.
//!
//! This crate turns an expression of `x`, embedded in a string, into a
//! function of whole sample arrays, and plots it over a range of `x`. The
//! easiest way to use this crate is with the [`eval`](fn.eval.html)
//! function:
//!
//! ```
//! assert_eq!(fnplot::eval("2*x + 1", &[0.0, 1.0, 2.0]), Ok(vec![1.0, 3.0, 5.0]));
//! ```
//!
//! Expressions that do not depend on `x` are repeated for every sample:
//!
//! ```
//! assert_eq!(fnplot::eval("5", &[0.0, 5.0, 10.0]), Ok(vec![5.0, 5.0, 5.0]));
//! ```
//!
//! It is also possible to separate the parsing from the evaluation of an
//! expression with the [`Expr`](struct.Expr.html) type, or to sample a
//! [`PlotRange`](struct.PlotRange.html):
//!
//! ```
//! use fnplot::{Expr, PlotRange};
//!
//! let expr = Expr::parse("x^2").unwrap();
//! let xs = PlotRange::new(-2.0, 2.0).unwrap().grid(5).unwrap();
//! assert_eq!(expr.eval_all(&xs), Ok(vec![4.0, 1.0, 0.0, 1.0, 4.0]));
//! ```
//!
//! A [`Plotter`](struct.Plotter.html) ties everything together: it keeps
//! the expression and the range edited by a user, and hands the sampled curve
//! to a [`Renderer`](trait.Renderer.html).
//!
//! # Language definition
//!
//! The language implemented by fnplot can contain the following elements:
//!
//! - float literal values: `12.456`, `.5`, `3.`, ...;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction and
//!   negation, `*` for multiplication, `/` for division and `^` for
//!   exponentiation;
//! - the variable `x`;
//! - function calls: `sin(x)`, `cos(x)`, `sqrt(x)` and `exp(x)`.
//!
//! Any other word (run of ASCII letters and `_`) is forbidden, and is
//! reported before anything is parsed. Any other symbol is a parse error.
//!
//! The mathematical operators obey the usual relations of associativity and
//! precedence. Negation binds tighter than multiplication but looser than
//! exponentiation, so `-x^2` is `-(x^2)`. Evaluation fails on square roots of
//! negative values, on divisions by zero and on any result which is not a
//! finite number.
//!
//! # Technical details
//!
//! fnplot is based on an AST interpreter, and uses a simple Shunting-Yard
//! algorithm for parsing the expressions. It works only with `f64` data, and
//! perform a simple constant propagation to optimize the expressions.

#[macro_use]
extern crate lazy_static;

mod ast;
mod config;
mod error;
mod expr;
mod function;
mod lexer;
mod plot;
mod range;
mod session;
mod token;
mod util;

pub use ast::Ast;
pub use config::{PlotterConfig, DEFAULT_HEIGHT, DEFAULT_SAMPLES, DEFAULT_WIDTH, PLACEHOLDER};
pub use error::{Error, RangeError};
pub use expr::{compile, eval, CompiledFn, Expr};
pub use function::Function;
pub use lexer::{check_words, words, MAX_DEPTH};
pub use plot::{ChartRenderer, Plot, Renderer};
pub use range::{Bound, PlotRange, LIMIT, MAX_SAMPLES};
pub use session::{Event, Plotter};
pub use util::{ALLOWED_WORDS, FUNCTIONS, VARIABLE};
