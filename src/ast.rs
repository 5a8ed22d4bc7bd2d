use crate::error::Error;
use crate::function::Function;
use crate::token::{Op, Token};
use crate::util::VARIABLE;
use std::fmt::{self, Display, Formatter};

/// Ast nodes for the expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// The variable `x`
    Variable,
    /// A constant value
    Value(f64),
    /// -<arg>
    Neg(Box<Ast>),
    /// <left> + <right>
    Add(Box<Ast>, Box<Ast>),
    /// <left> - <right>
    Sub(Box<Ast>, Box<Ast>),
    /// <left> * <right>
    Mul(Box<Ast>, Box<Ast>),
    /// <left> / <right>
    Div(Box<Ast>, Box<Ast>),
    /// <left> ^ <right>
    Exp(Box<Ast>, Box<Ast>),
    /// fn(<arg>)
    Function(Function, Box<Ast>),
}

impl Ast {
    /// Construct the AST for a vector of tokens in reverse polish notation.
    /// This function eats the tokens as it uses them, and fails if some of
    /// them are left over.
    pub fn from_tokens(tokens: &mut Vec<Token>) -> Result<Self, Error> {
        let ast = Self::from_tokens_internal(tokens, "")?;
        if let Some(token) = tokens.pop() {
            return Err(Error::ParseError(format!(
                "missing operator after '{}'",
                token
            )));
        }
        Ok(ast.optimize())
    }

    fn from_tokens_internal(tokens: &mut Vec<Token>, context: &str) -> Result<Self, Error> {
        if let Some(token) = tokens.pop() {
            match token {
                Token::Number(value) => Ok(Self::Value(value)),
                Token::Variable => Ok(Self::Variable),
                Token::Function(func) => {
                    let arg = Box::new(Self::from_tokens_internal(tokens, " in function call")?);
                    Ok(Self::Function(func, arg))
                }
                Token::Op(Op::Neg) => {
                    let arg = Box::new(Self::from_tokens_internal(tokens, " after '-'")?);
                    Ok(Self::Neg(arg))
                }
                Token::Op(op) => {
                    let right = Box::new(Self::from_tokens_internal(tokens, " after operator")?);
                    let left = Box::new(Self::from_tokens_internal(tokens, " before operator")?);
                    match op {
                        Op::Plus => Ok(Self::Add(left, right)),
                        Op::Minus => Ok(Self::Sub(left, right)),
                        Op::Mul => Ok(Self::Mul(left, right)),
                        Op::Div => Ok(Self::Div(left, right)),
                        Op::Exp => Ok(Self::Exp(left, right)),
                        Op::Neg => Ok(Self::Neg(right)),
                    }
                }
                other => Err(Error::ParseError(format!(
                    "unexpected '{}' after shunting yard",
                    other
                ))),
            }
        } else {
            Err(Error::ParseError(format!("empty expression{}", context)))
        }
    }

    /// If the AST node correspond to a constant, get `Some(constant)`. Else,
    /// get `None`
    pub fn value(&self) -> Option<f64> {
        if let Self::Value(value) = *self {
            Some(value)
        } else {
            None
        }
    }

    /// Check if the variable appears anywhere in this AST
    pub fn has_variable(&self) -> bool {
        match self {
            Self::Variable => true,
            Self::Value(_) => false,
            Self::Neg(arg) | Self::Function(_, arg) => arg.has_variable(),
            Self::Add(left, right)
            | Self::Sub(left, right)
            | Self::Mul(left, right)
            | Self::Div(left, right)
            | Self::Exp(left, right) => left.has_variable() || right.has_variable(),
        }
    }

    /// Evaluate the AST with the variable bound to `x`
    pub fn eval(&self, x: f64) -> Result<f64, Error> {
        match *self {
            Self::Variable => Ok(x),
            Self::Value(value) => Ok(value),
            Self::Neg(ref arg) => Ok(-arg.eval(x)?),
            Self::Add(ref left, ref right) => Ok(left.eval(x)? + right.eval(x)?),
            Self::Sub(ref left, ref right) => Ok(left.eval(x)? - right.eval(x)?),
            Self::Mul(ref left, ref right) => Ok(left.eval(x)? * right.eval(x)?),
            Self::Div(ref left, ref right) => {
                let left = left.eval(x)?;
                let right = right.eval(x)?;
                if right == 0.0 {
                    return Err(Error::EvalError("division by zero".into()));
                }
                Ok(left / right)
            }
            Self::Exp(ref left, ref right) => Ok(libm::pow(left.eval(x)?, right.eval(x)?)),
            Self::Function(func, ref arg) => func.apply(arg.eval(x)?),
        }
    }

    /// Optimize the AST by doing constants propagation. Subtrees are only
    /// folded when they evaluate to a finite value, so that failures are
    /// reported when evaluating.
    pub fn optimize(self) -> Self {
        match self {
            Self::Variable | Self::Value(_) => self,
            Self::Neg(arg) => Self::Neg(Box::new(arg.optimize())).fold(),
            Self::Function(func, arg) => Self::Function(func, Box::new(arg.optimize())).fold(),
            Self::Add(left, right) => Self::optimize_binary(Self::Add, *left, *right),
            Self::Sub(left, right) => Self::optimize_binary(Self::Sub, *left, *right),
            Self::Mul(left, right) => Self::optimize_binary(Self::Mul, *left, *right),
            Self::Div(left, right) => Self::optimize_binary(Self::Div, *left, *right),
            Self::Exp(left, right) => Self::optimize_binary(Self::Exp, *left, *right),
        }
    }

    fn optimize_binary(node: fn(Box<Ast>, Box<Ast>) -> Ast, left: Ast, right: Ast) -> Self {
        node(Box::new(left.optimize()), Box::new(right.optimize())).fold()
    }

    /// Replace a node whose operands are all constants by its value
    fn fold(self) -> Self {
        let constant_operands = match &self {
            Self::Variable | Self::Value(_) => false,
            Self::Neg(arg) | Self::Function(_, arg) => arg.value().is_some(),
            Self::Add(left, right)
            | Self::Sub(left, right)
            | Self::Mul(left, right)
            | Self::Div(left, right)
            | Self::Exp(left, right) => left.value().is_some() && right.value().is_some(),
        };
        if constant_operands {
            if let Ok(value) = self.eval(0.0) {
                if value.is_finite() {
                    return Self::Value(value);
                }
            }
        }
        self
    }
}

impl Display for Ast {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::Variable => write!(fmt, "{}", VARIABLE),
            Self::Value(value) => write!(fmt, "{}", value),
            Self::Neg(arg) => write!(fmt, "-({})", arg),
            Self::Add(left, right) => write!(fmt, "({} + {})", left, right),
            Self::Sub(left, right) => write!(fmt, "({} - {})", left, right),
            Self::Mul(left, right) => write!(fmt, "({} * {})", left, right),
            Self::Div(left, right) => write!(fmt, "({} / {})", left, right),
            Self::Exp(left, right) => write!(fmt, "({} ^ {})", left, right),
            Self::Function(func, arg) => write!(fmt, "{}({})", func.name(), arg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ast;
    use crate::function::Function;
    use crate::lexer::Lexer;
    use crate::Error;

    fn ast(input: &str) -> Ast {
        let mut lexer = Lexer::new(input);
        Ast::from_tokens(&mut lexer.parse().unwrap()).unwrap()
    }

    #[test]
    // Verifies that we have reduced the input to a single value token when possible
    fn optimize() {
        assert_eq!(ast("3 + 5").value(), Some(8.0));
        assert_eq!(ast("(3 + 5^2)*45").value(), Some(1260.0));
        assert_eq!(ast("sqrt(9)").value(), Some(3.0));
        assert_eq!(ast("-2^2").value(), Some(-4.0));
        assert_eq!(ast("2^3^2").value(), Some(512.0));
    }

    #[test]
    fn failing_constants_are_kept() {
        let sqrt = ast("sqrt(0 - 1)");
        assert_eq!(
            sqrt,
            Ast::Function(Function::Sqrt, Box::new(Ast::Value(-1.0)))
        );
        assert!(sqrt.eval(0.0).is_err());

        assert_eq!(ast("1/0").eval(3.0), Err(Error::EvalError("division by zero".into())));
    }

    #[test]
    fn variables() {
        assert!(ast("2*x").has_variable());
        assert!(ast("exp(sin(x))").has_variable());
        assert!(!ast("exp(1)").has_variable());
        assert!(!ast("5").has_variable());
    }

    #[test]
    fn eval() {
        let tree = ast("5*x^3 + 2*x");
        assert_eq!(tree.eval(2.0), Ok(44.0));
        assert_eq!(tree.eval(-1.0), Ok(-7.0));
        assert_eq!(ast("-x^2").eval(3.0), Ok(-9.0));
        assert_eq!(ast("2^-x").eval(1.0), Ok(0.5));
        assert_eq!(ast("x - 2 - 3").eval(10.0), Ok(5.0));
        assert_eq!(ast("x / 2 / 5").eval(10.0), Ok(1.0));
    }

    #[test]
    fn display() {
        assert_eq!(ast("1 + 2*x").to_string(), "(1 + (2 * x))");
        assert_eq!(ast("-sin(x)^2").to_string(), "-((sin(x) ^ 2))");
    }
}
