use crate::core::arithmetic::{self, MathError};

/// Two-operand operations accepted by `/api/calculate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperation {
    /// Resolve an operation symbol, accepting `×` and `÷` as aliases
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" | "×" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            "%" => Some(Self::Modulo),
            _ => None,
        }
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64, MathError> {
        match self {
            Self::Add => Ok(arithmetic::add(a, b)),
            Self::Subtract => Ok(arithmetic::subtract(a, b)),
            Self::Multiply => Ok(arithmetic::multiply(a, b)),
            Self::Divide => arithmetic::divide(a, b),
            Self::Modulo => arithmetic::modulo(a, b),
        }
    }
}

/// Single-operand operations accepted by `/api/special`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialOperation {
    SquareRoot,
    Square,
    Reciprocal,
}

impl SpecialOperation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Self::SquareRoot),
            "square" => Some(Self::Square),
            "reciprocal" => Some(Self::Reciprocal),
            _ => None,
        }
    }

    pub fn apply(self, a: f64) -> Result<f64, MathError> {
        match self {
            Self::SquareRoot => arithmetic::square_root(a),
            Self::Square => Ok(arithmetic::square(a)),
            Self::Reciprocal => arithmetic::reciprocal(a),
        }
    }
}
