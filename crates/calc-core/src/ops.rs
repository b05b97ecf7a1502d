//! The four arithmetic operations and their menu binding.

use calc_common::CalcError;

use crate::number::Number;

pub fn add(a: Number, b: Number) -> Number {
    a.combine(b, i64::checked_add, |x, y| x + y)
}

pub fn subtract(a: Number, b: Number) -> Number {
    a.combine(b, i64::checked_sub, |x, y| x - y)
}

pub fn multiply(a: Number, b: Number) -> Number {
    a.combine(b, i64::checked_mul, |x, y| x * y)
}

/// True division. Fails when `b` is exactly zero.
pub fn divide(a: Number, b: Number) -> Result<Number, CalcError> {
    if b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    Ok(Number::Real(a.as_f64() / b.as_f64()))
}

/// An arithmetic operation selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Operator symbol used in expressions and history entries.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Operation name for log fields.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }

    /// Run the operation. The result is not normalized.
    pub fn apply(self, a: Number, b: Number) -> Result<Number, CalcError> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Subtract => Ok(subtract(a, b)),
            Operation::Multiply => Ok(multiply(a, b)),
            Operation::Divide => divide(a, b),
        }
    }
}
