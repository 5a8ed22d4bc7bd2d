use crate::error::Error;
use crate::token::{Op, Token};
use crate::util::{ALLOWED_WORDS, FUNCTIONS, VARIABLE};
use std::iter::Peekable;
use std::str::Chars;

/// Deepest expression tree accepted by the parser
pub const MAX_DEPTH: usize = 256;

/// Iterate over the words of `input`, i.e. the maximal runs of ASCII letters
/// and `_`, from left to right.
///
/// # Examples
///
/// ```
/// # use fnplot::words;
/// let found: Vec<&str> = words("2*sin(x_1) + y").collect();
/// assert_eq!(found, ["sin", "x_", "y"]);
/// ```
pub fn words(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| !is_word_part(c))
        .filter(|word| !word.is_empty())
}

/// Check that every word of `input` is allowed in an expression.
///
/// # Errors
///
/// Returns `Error::Forbidden` with the leftmost word that is not allowed.
///
/// # Examples
///
/// ```
/// # use fnplot::{check_words, Error};
/// assert_eq!(check_words("5*x^3 + sqrt(x)"), Ok(()));
/// assert_eq!(check_words("tan(x) + y"), Err(Error::Forbidden("tan".into())));
/// ```
pub fn check_words(input: &str) -> Result<(), Error> {
    match words(input).find(|word| !ALLOWED_WORDS.contains(*word)) {
        Some(word) => Err(Error::Forbidden(word.into())),
        None => Ok(()),
    }
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &'a str) -> Self {
        Lexer {
            input: string.chars().peekable(),
        }
    }

    /// Lex the whole input and reorder the tokens in reverse polish notation
    pub fn parse(&mut self) -> Result<Vec<Token>, Error> {
        let mut output = Vec::new();
        let mut operators = Vec::new();
        // true when the next token must start an operand
        let mut expect_operand = true;
        // set right after a function name, which must be followed by `(`
        let mut pending_call: Option<Token> = None;

        'tokens: while let Some(token) = self.next_token()? {
            if let Some(function) = pending_call.take() {
                if token != Token::LParen {
                    return Err(Error::ParseError(format!(
                        "expected '(' after {}, found '{}'",
                        function, token
                    )));
                }
            }

            match token {
                Token::Number(_) | Token::Variable => {
                    if !expect_operand {
                        return Err(missing_operator(&token));
                    }
                    output.push(token);
                    expect_operand = false;
                }
                Token::Function(_) => {
                    if !expect_operand {
                        return Err(missing_operator(&token));
                    }
                    pending_call = Some(token.clone());
                    operators.push(token);
                }
                Token::Op(op) if expect_operand => match op {
                    Op::Minus => operators.push(Token::Op(Op::Neg)),
                    Op::Plus => {}
                    _ => {
                        return Err(Error::ParseError(format!(
                            "missing operand before '{}'",
                            op.symbol()
                        )));
                    }
                },
                Token::Op(o1) => {
                    'operators: while let Some(token) = operators.last().cloned() {
                        match token {
                            Token::Op(o2) => {
                                let pop_me =
                                    o1.is_left_associative() && o1.precedence() <= o2.precedence();
                                let pop_me = pop_me
                                    || o1.is_right_associative()
                                        && o1.precedence() < o2.precedence();
                                if pop_me {
                                    operators.pop();
                                    output.push(Token::Op(o2));
                                } else {
                                    break 'operators;
                                }
                            }
                            _ => break 'operators,
                        }
                    }
                    operators.push(token);
                    expect_operand = true;
                }
                Token::LParen => {
                    if !expect_operand {
                        return Err(missing_operator(&token));
                    }
                    operators.push(token);
                }
                Token::RParen => {
                    if expect_operand {
                        let message = if operators.last() == Some(&Token::LParen) {
                            "empty parenthesis".to_string()
                        } else {
                            "missing operand before ')'".to_string()
                        };
                        return Err(Error::ParseError(message));
                    }
                    while let Some(token) = operators.pop() {
                        match token {
                            Token::LParen => {
                                if let Some(&Token::Function(_)) = operators.last() {
                                    if let Some(function) = operators.pop() {
                                        output.push(function);
                                    }
                                }
                                continue 'tokens;
                            }
                            Token::Op(_) => output.push(token),
                            other => {
                                return Err(Error::ParseError(format!(
                                    "unexpected '{}' in expression",
                                    other
                                )))
                            }
                        }
                    }
                    return Err(Error::ParseError("mismatched parenthesis".into()));
                }
            }
        }

        if let Some(function) = pending_call {
            return Err(Error::ParseError(format!(
                "expected '(' after {}",
                function
            )));
        }
        if expect_operand {
            let message = if output.is_empty() && operators.is_empty() {
                "empty expression"
            } else {
                "unexpected end of expression"
            };
            return Err(Error::ParseError(message.into()));
        }

        while let Some(token) = operators.pop() {
            match token {
                Token::LParen => return Err(Error::ParseError("mismatched parenthesis".into())),
                Token::Op(_) => output.push(token),
                other => {
                    return Err(Error::ParseError(format!(
                        "unexpected '{}' in expression",
                        other
                    )))
                }
            }
        }
        check_depth(&output)?;
        Ok(output)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while let Some(&c) = self.input.peek() {
            if c.is_whitespace() {
                self.input.next();
            } else {
                break;
            }
        }

        if let Some(c) = self.input.next() {
            let token = match c {
                c if is_number_part(c) => {
                    let mut number = String::new();
                    number.push(c);
                    while let Some(&c) = self.input.peek() {
                        if !is_number_part(c) {
                            break;
                        }
                        self.input.next();
                        number.push(c);
                    }
                    let value = number
                        .parse()
                        .map_err(|_| Error::ParseError(format!("invalid number {}", number)))?;
                    Token::Number(value)
                }
                c if is_word_part(c) => {
                    let mut word = String::new();
                    word.push(c);
                    while let Some(&c) = self.input.peek() {
                        if !is_word_part(c) {
                            break;
                        }
                        self.input.next();
                        word.push(c);
                    }
                    if word == VARIABLE {
                        Token::Variable
                    } else if let Some(&func) = FUNCTIONS.get(word.as_str()) {
                        Token::Function(func)
                    } else {
                        return Err(Error::Forbidden(word));
                    }
                }
                '+' => Token::Op(Op::Plus),
                '-' => Token::Op(Op::Minus),
                '*' => Token::Op(Op::Mul),
                '/' => Token::Op(Op::Div),
                '^' => Token::Op(Op::Exp),
                '(' => Token::LParen,
                ')' => Token::RParen,
                other => {
                    return Err(Error::ParseError(format!(
                        "unexpected character in input: {}",
                        other
                    )));
                }
            };
            Ok(Some(token))
        } else {
            Ok(None)
        }
    }
}

/// Check that the tree built from `tokens`, in reverse polish notation, is
/// at most `MAX_DEPTH` levels deep. The tree is walked recursively later on.
fn check_depth(tokens: &[Token]) -> Result<(), Error> {
    let mut depths: Vec<usize> = Vec::new();
    for token in tokens {
        let depth = match token {
            Token::Op(op) if !op.is_unary() => {
                let right = depths.pop().unwrap_or(0);
                let left = depths.pop().unwrap_or(0);
                left.max(right) + 1
            }
            Token::Op(_) | Token::Function(_) => depths.pop().unwrap_or(0) + 1,
            _ => 1,
        };
        if depth > MAX_DEPTH {
            return Err(Error::ParseError("expression is nested too deeply".into()));
        }
        depths.push(depth);
    }
    Ok(())
}

fn missing_operator(token: &Token) -> Error {
    Error::ParseError(format!("missing operator before '{}'", token))
}

/// Check if `c` can appear inside a word
fn is_word_part(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Check if `c` can appear inside a number
fn is_number_part(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}
