//! Arithmetic expression evaluator
//!
//! Expressions are tokenized, parsed into an [`Expr`] tree by a
//! recursive-descent parser and then folded to a single `f64`. Only numeric
//! literals, the arithmetic operators, parentheses and a fixed set of
//! functions exist in the language, so no input can reach anything else.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '//' | '%') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('**' unary)?
//! primary := NUMBER | NAME '(' args? ')' | '(' expr ')'
//! args    := expr (',' expr)* ','?
//! ```

use std::fmt;
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

use thiserror::Error;

use crate::core::arithmetic;

/// Default limit on parser recursion (parentheses, calls, unary signs)
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Errors produced while parsing or evaluating an expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Expression is empty")]
    Empty,

    #[error("Invalid syntax at position {position}: {reason}")]
    Syntax { position: usize, reason: String },

    #[error("Name '{0}' is not defined")]
    UnknownName(String),

    #[error("'{0}' is a function and must be called with arguments")]
    NotCallable(String),

    #[error("{name}() takes {expected} but {given} were given")]
    Arity {
        name: &'static str,
        expected: &'static str,
        given: usize,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Math domain error: {0}")]
    Domain(&'static str),

    #[error("Numerical result out of range")]
    Overflow,

    #[error("Expression nests deeper than {0} levels")]
    TooDeep(usize),
}

impl ExpressionError {
    fn syntax(position: usize, reason: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            reason: reason.into(),
        }
    }
}

/// Replace the calculator glyphs `×` and `÷` with `*` and `/`
pub fn normalize(expression: &str) -> String {
    expression.replace('×', "*").replace('÷', "/")
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Name(String),
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    Percent,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {}", value),
            Token::Name(name) => write!(f, "name '{}'", name),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::DoubleStar => f.write_str("'**'"),
            Token::Slash => f.write_str("'/'"),
            Token::DoubleSlash => f.write_str("'//'"),
            Token::Percent => f.write_str("'%'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
            Token::Comma => f.write_str("','"),
        }
    }
}

#[derive(Debug, Clone)]
struct Spanned {
    token: Token,
    position: usize,
}

type CharStream<'a> = Peekable<Enumerate<Chars<'a>>>;

fn tokenize(input: &str) -> Result<Vec<Spanned>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().enumerate().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        let token = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => lex_number(&mut chars, position)?,
            c if c.is_ascii_alphabetic() || c == '_' => lex_name(&mut chars),
            '*' => {
                chars.next();
                if chars.next_if(|&(_, c)| c == '*').is_some() {
                    Token::DoubleStar
                } else {
                    Token::Star
                }
            }
            '/' => {
                chars.next();
                if chars.next_if(|&(_, c)| c == '/').is_some() {
                    Token::DoubleSlash
                } else {
                    Token::Slash
                }
            }
            '+' | '-' | '%' | '(' | ')' | ',' => {
                chars.next();
                match ch {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '%' => Token::Percent,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    _ => Token::Comma,
                }
            }
            other => {
                return Err(ExpressionError::syntax(
                    position,
                    format!("unexpected character '{}'", other),
                ))
            }
        };
        tokens.push(Spanned { token, position });
    }

    Ok(tokens)
}

fn lex_number(chars: &mut CharStream<'_>, position: usize) -> Result<Token, ExpressionError> {
    let mut literal = String::new();

    while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit() || c == '.') {
        literal.push(c);
    }

    if let Some((_, e)) = chars.next_if(|&(_, c)| c == 'e' || c == 'E') {
        literal.push(e);
        if let Some((_, sign)) = chars.next_if(|&(_, c)| c == '+' || c == '-') {
            literal.push(sign);
        }
        while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
            literal.push(c);
        }
    }

    literal
        .parse::<f64>()
        .map(Token::Number)
        .map_err(|_| ExpressionError::syntax(position, format!("invalid number '{}'", literal)))
}

fn lex_name(chars: &mut CharStream<'_>) -> Token {
    let mut name = String::new();
    while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_alphanumeric() || c == '_') {
        name.push(c);
    }
    Token::Name(name)
}

/// Functions callable from an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sqrt,
    Pow,
    Abs,
    Round,
}

impl Function {
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Self::Sqrt),
            "pow" => Some(Self::Pow),
            "abs" => Some(Self::Abs),
            "round" => Some(Self::Round),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Pow => "pow",
            Self::Abs => "abs",
            Self::Round => "round",
        }
    }

    fn call(self, args: &[f64]) -> Result<f64, ExpressionError> {
        match (self, args) {
            (Self::Sqrt, &[x]) => arithmetic::square_root(x)
                .map_err(|_| ExpressionError::Domain("square root of a negative number")),
            (Self::Pow, &[base, exponent]) => power(base, exponent),
            (Self::Abs, &[x]) => Ok(x.abs()),
            (Self::Round, &[x]) if x.is_nan() => {
                Err(ExpressionError::Domain("cannot round NaN to an integer"))
            }
            (Self::Round, &[x]) if x.is_infinite() => Err(ExpressionError::Overflow),
            (Self::Round, &[x]) => Ok(x.round_ties_even()),
            (Self::Round, &[x, digits]) => round_to(x, digits),
            _ => Err(self.arity_error(args.len())),
        }
    }

    fn arity_error(self, given: usize) -> ExpressionError {
        let expected = match self {
            Self::Sqrt | Self::Abs => "exactly 1 argument",
            Self::Pow => "exactly 2 arguments",
            Self::Round => "1 or 2 arguments",
        };
        ExpressionError::Arity {
            name: self.name(),
            expected,
            given,
        }
    }
}

fn power(base: f64, exponent: f64) -> Result<f64, ExpressionError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(ExpressionError::DivisionByZero);
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(ExpressionError::Domain(
            "negative number raised to a fractional power",
        ));
    }

    let result = base.powf(exponent);
    if result.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(ExpressionError::Overflow);
    }
    Ok(result)
}

/// Round half to even at `digits` decimal places (negative rounds to tens, hundreds...)
fn round_to(x: f64, digits: f64) -> Result<f64, ExpressionError> {
    if !digits.is_finite() || digits.fract() != 0.0 {
        return Err(ExpressionError::InvalidArgument(
            "round() digits must be an integer",
        ));
    }
    if !x.is_finite() {
        return Ok(x);
    }

    let factor = 10f64.powi(digits.abs().min(308.0) as i32);
    if digits < 0.0 {
        return Ok((x / factor).round_ties_even() * factor);
    }

    let scaled = x * factor;
    if !scaled.is_finite() {
        // More digits requested than an f64 can hold
        return Ok(x);
    }
    Ok(scaled.round_ties_even() / factor)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Modulo,
    Power,
}

/// Parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Name(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        name: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Fold the tree to a number, left operand first
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        match self {
            Expr::Number(value) => Ok(*value),
            Expr::Name(name) => match Function::lookup(name) {
                Some(_) => Err(ExpressionError::NotCallable(name.clone())),
                None => Err(ExpressionError::UnknownName(name.clone())),
            },
            Expr::Unary { op, operand } => {
                let value = operand.evaluate()?;
                Ok(match op {
                    UnaryOp::Plus => value,
                    UnaryOp::Minus => -value,
                })
            }
            Expr::Binary { op, left, right } => {
                let lhs = left.evaluate()?;
                let rhs = right.evaluate()?;
                apply_binary(*op, lhs, rhs)
            }
            Expr::Call { name, args } => {
                let function = Function::lookup(name)
                    .ok_or_else(|| ExpressionError::UnknownName(name.clone()))?;
                let values = args
                    .iter()
                    .map(Expr::evaluate)
                    .collect::<Result<Vec<_>, _>>()?;
                function.call(&values)
            }
        }
    }
}

fn apply_binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, ExpressionError> {
    match op {
        BinaryOp::Add => Ok(arithmetic::add(lhs, rhs)),
        BinaryOp::Subtract => Ok(arithmetic::subtract(lhs, rhs)),
        BinaryOp::Multiply => Ok(arithmetic::multiply(lhs, rhs)),
        BinaryOp::Divide => {
            arithmetic::divide(lhs, rhs).map_err(|_| ExpressionError::DivisionByZero)
        }
        BinaryOp::FloorDivide => {
            if rhs == 0.0 {
                return Err(ExpressionError::DivisionByZero);
            }
            Ok(arithmetic::floored_quotient(lhs, rhs))
        }
        BinaryOp::Modulo => {
            arithmetic::modulo(lhs, rhs).map_err(|_| ExpressionError::DivisionByZero)
        }
        BinaryOp::Power => power(lhs, rhs),
    }
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    depth: usize,
    max_depth: usize,
    end: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|spanned| &spanned.token)
    }

    fn next(&mut self) -> Option<&'a Spanned> {
        let tokens = self.tokens;
        let spanned = tokens.get(self.pos)?;
        self.pos += 1;
        Some(spanned)
    }

    fn position(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.end, |spanned| spanned.position)
    }

    fn enter(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ExpressionError::TooDeep(self.max_depth));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn unexpected(&self) -> ExpressionError {
        match self.tokens.get(self.pos) {
            Some(spanned) => ExpressionError::syntax(
                spanned.position,
                format!("unexpected {}", spanned.token),
            ),
            None => ExpressionError::syntax(self.end, "unexpected end of expression"),
        }
    }

    fn parse_expression(&mut self) -> Result<Expr, ExpressionError> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Subtract,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_term()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ExpressionError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Multiply,
                Some(Token::Slash) => BinaryOp::Divide,
                Some(Token::DoubleSlash) => BinaryOp::FloorDivide,
                Some(Token::Percent) => BinaryOp::Modulo,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExpressionError> {
        let op = match self.peek() {
            Some(Token::Plus) => UnaryOp::Plus,
            Some(Token::Minus) => UnaryOp::Minus,
            _ => return self.parse_power(),
        };
        self.pos += 1;

        self.enter()?;
        let operand = self.parse_unary()?;
        self.leave();

        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_power(&mut self) -> Result<Expr, ExpressionError> {
        let base = self.parse_primary()?;
        if self.peek() != Some(&Token::DoubleStar) {
            return Ok(base);
        }
        self.pos += 1;

        // Right-associative: the exponent may itself be a signed power
        self.enter()?;
        let exponent = self.parse_unary()?;
        self.leave();

        Ok(Expr::binary(BinaryOp::Power, base, exponent))
    }

    fn parse_primary(&mut self) -> Result<Expr, ExpressionError> {
        let Some(spanned) = self.next() else {
            return Err(ExpressionError::syntax(self.end, "unexpected end of expression"));
        };

        match &spanned.token {
            Token::Number(value) => Ok(Expr::Number(*value)),
            Token::Name(name) => {
                if self.peek() != Some(&Token::LParen) {
                    return Ok(Expr::Name(name.clone()));
                }
                self.pos += 1;

                self.enter()?;
                let args = self.parse_arguments()?;
                self.leave();

                Ok(Expr::Call {
                    name: name.clone(),
                    args,
                })
            }
            Token::LParen => {
                self.enter()?;
                let inner = self.parse_expression()?;
                self.leave();

                match self.next() {
                    Some(Spanned {
                        token: Token::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(ExpressionError::syntax(
                        other.position,
                        format!("expected ')' but found {}", other.token),
                    )),
                    None => Err(ExpressionError::syntax(self.end, "'(' was never closed")),
                }
            }
            other => Err(ExpressionError::syntax(
                spanned.position,
                format!("unexpected {}", other),
            )),
        }
    }

    /// Arguments after an opening parenthesis, consuming the closing one
    fn parse_arguments(&mut self) -> Result<Vec<Expr>, ExpressionError> {
        let mut args = Vec::new();
        if self.peek() == Some(&Token::RParen) {
            self.pos += 1;
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);
            match self.peek() {
                Some(Token::Comma) => {
                    self.pos += 1;
                    // Trailing comma before ')' is allowed
                    if self.peek() == Some(&Token::RParen) {
                        self.pos += 1;
                        return Ok(args);
                    }
                }
                Some(Token::RParen) => {
                    self.pos += 1;
                    return Ok(args);
                }
                Some(_) => {
                    return Err(ExpressionError::syntax(
                        self.position(),
                        "expected ',' or ')' in argument list",
                    ))
                }
                None => {
                    return Err(ExpressionError::syntax(self.end, "'(' was never closed"))
                }
            }
        }
    }
}

/// Parses and evaluates arithmetic expressions
#[derive(Debug, Clone)]
pub struct Evaluator {
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Evaluator {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn parse(&self, input: &str) -> Result<Expr, ExpressionError> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(ExpressionError::Empty);
        }

        let mut parser = Parser {
            tokens: &tokens,
            pos: 0,
            depth: 0,
            max_depth: self.max_depth,
            end: input.chars().count(),
        };

        let expr = parser.parse_expression()?;
        if parser.pos < tokens.len() {
            return Err(parser.unexpected());
        }
        Ok(expr)
    }

    /// Parse the whole input, then evaluate it
    ///
    /// Syntax errors are always reported before any evaluation error.
    pub fn evaluate(&self, input: &str) -> Result<f64, ExpressionError> {
        self.parse(input)?.evaluate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(input: &str) -> Result<f64, ExpressionError> {
        Evaluator::default().evaluate(input)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+2").unwrap(), 4.0);
        assert_eq!(eval("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(eval("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(eval("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(eval("2 * 3 % 4").unwrap(), 2.0);
    }

    #[test]
    fn test_power_binds_tighter_than_unary_minus() {
        assert_eq!(eval("-2**2").unwrap(), -4.0);
        assert_eq!(eval("(-2)**2").unwrap(), 4.0);
        assert_eq!(eval("2**-1").unwrap(), 0.5);
        assert_eq!(eval("2**3**2").unwrap(), 512.0);
    }

    #[test]
    fn test_number_literals() {
        assert_eq!(eval(".5 + 5.").unwrap(), 5.5);
        assert_eq!(eval("1e3").unwrap(), 1000.0);
        assert_eq!(eval("2.5E-1").unwrap(), 0.25);
        assert!(matches!(eval("1.2.3"), Err(ExpressionError::Syntax { .. })));
        assert!(matches!(eval("1e"), Err(ExpressionError::Syntax { .. })));
    }

    #[test]
    fn test_floor_division_and_modulo() {
        assert_eq!(eval("7 // 2").unwrap(), 3.0);
        assert_eq!(eval("-7 // 2").unwrap(), -4.0);
        assert_eq!(eval("-7 % 3").unwrap(), 2.0);
        assert_eq!(eval("1 // 0.1").unwrap(), 9.0);
        assert_eq!(eval("-1 // 0.1").unwrap(), -10.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("1/0"), Err(ExpressionError::DivisionByZero));
        assert_eq!(eval("1//0"), Err(ExpressionError::DivisionByZero));
        assert_eq!(eval("1 % 0"), Err(ExpressionError::DivisionByZero));
        assert_eq!(eval("0 ** -1"), Err(ExpressionError::DivisionByZero));
        assert_eq!(eval("pow(0, -2)"), Err(ExpressionError::DivisionByZero));
    }

    #[test]
    fn test_functions() {
        assert_eq!(eval("sqrt(16)").unwrap(), 4.0);
        assert_eq!(eval("pow(2, 10)").unwrap(), 1024.0);
        assert_eq!(eval("abs(-3.5)").unwrap(), 3.5);
        assert_eq!(eval("round(2.5)").unwrap(), 2.0);
        assert_eq!(eval("round(3.5)").unwrap(), 4.0);
        assert_eq!(eval("round(3.14159, 2)").unwrap(), 3.14);
        assert_eq!(eval("round(1234, -2)").unwrap(), 1200.0);
        assert_eq!(eval("sqrt(pow(3, 2) + pow(4, 2),)").unwrap(), 5.0);
    }

    #[test]
    fn test_function_errors() {
        assert!(matches!(eval("sqrt(-1)"), Err(ExpressionError::Domain(_))));
        assert!(matches!(eval("(-8) ** 0.5"), Err(ExpressionError::Domain(_))));
        assert!(matches!(eval("round(1.5, 0.5)"), Err(ExpressionError::InvalidArgument(_))));
        assert_eq!(
            eval("pow(2)"),
            Err(ExpressionError::Arity {
                name: "pow",
                expected: "exactly 2 arguments",
                given: 1,
            })
        );
        assert!(matches!(eval("abs()"), Err(ExpressionError::Arity { given: 0, .. })));
        assert_eq!(eval("sqrt"), Err(ExpressionError::NotCallable("sqrt".to_string())));
        assert_eq!(eval("10.0 ** 400"), Err(ExpressionError::Overflow));
        assert_eq!(eval("round(1e308 * 10)"), Err(ExpressionError::Overflow));
        assert!(matches!(eval("round(1e308 * 10 - 1e308 * 10)"), Err(ExpressionError::Domain(_))));
        // With digits, non-finite values pass through unchanged
        assert_eq!(eval("round(1e308 * 10, 2)").unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_rejects_non_arithmetic_input() {
        assert_eq!(eval("__import__('os')"), Err(ExpressionError::Syntax {
            position: 11,
            reason: "unexpected character '''".to_string(),
        }));
        assert_eq!(eval("__import__(1)"), Err(ExpressionError::UnknownName("__import__".to_string())));
        assert_eq!(eval("x + 1"), Err(ExpressionError::UnknownName("x".to_string())));
        assert!(matches!(eval("2 ^ 3"), Err(ExpressionError::Syntax { .. })));
        assert!(matches!(eval("1; 2"), Err(ExpressionError::Syntax { .. })));
    }

    #[test]
    fn test_malformed_expressions() {
        assert_eq!(eval(""), Err(ExpressionError::Empty));
        assert_eq!(eval("   "), Err(ExpressionError::Empty));
        assert!(matches!(eval("(1 + 2"), Err(ExpressionError::Syntax { .. })));
        assert!(matches!(eval("1 + 2)"), Err(ExpressionError::Syntax { .. })));
        assert!(matches!(eval("1 +"), Err(ExpressionError::Syntax { .. })));
        assert!(matches!(eval("2 (3)"), Err(ExpressionError::Syntax { .. })));
    }

    #[test]
    fn test_syntax_checked_before_evaluation() {
        assert!(matches!(eval("1/0 + ("), Err(ExpressionError::Syntax { .. })));
        assert_eq!(eval("1/0 + x"), Err(ExpressionError::DivisionByZero));
        assert_eq!(eval("x + 1/0"), Err(ExpressionError::UnknownName("x".to_string())));
    }

    #[test]
    fn test_nesting_limit() {
        let nested = format!("{}1{}", "(".repeat(10), ")".repeat(10));
        assert_eq!(Evaluator::new(10).evaluate(&nested).unwrap(), 1.0);
        assert_eq!(Evaluator::new(9).evaluate(&nested), Err(ExpressionError::TooDeep(9)));
        assert_eq!(eval(&"-".repeat(200)), Err(ExpressionError::TooDeep(DEFAULT_MAX_DEPTH)));
    }

    #[test]
    fn test_normalize_glyphs() {
        assert_eq!(normalize("6 × 7 ÷ 2"), "6 * 7 / 2");
        assert_eq!(eval(&normalize("6×7÷2")).unwrap(), 21.0);
    }
}
