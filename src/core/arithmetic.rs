use thiserror::Error;

/// Domain violations raised by the arithmetic primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Cannot take modulo by zero")]
    ModuloByZero,

    #[error("Cannot take the square root of a negative number")]
    NegativeSquareRoot,

    #[error("Cannot take the reciprocal of zero")]
    ReciprocalOfZero,
}

#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`
///
/// Fails only when `b` is exactly zero (either sign). Infinities and NaN
/// propagate as usual.
#[inline]
pub fn divide(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

/// Floored modulo: the result carries the sign of the divisor
///
/// `modulo(-7.0, 3.0) == 2.0` and `modulo(7.0, -3.0) == -2.0`.
#[inline]
pub fn modulo(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::ModuloByZero);
    }
    Ok(floored_rem(a, b))
}

/// Floored remainder for a divisor already known to be non-zero
#[inline]
pub(crate) fn floored_rem(a: f64, b: f64) -> f64 {
    let rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        rem + b
    } else {
        rem
    }
}

/// Floored quotient for a divisor already known to be non-zero
///
/// Derived from the remainder rather than `floor(a / b)`, so that
/// `1 // 0.1` is 9 (the remainder is just under 0.1) and not 10.
pub(crate) fn floored_quotient(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut quotient = (a - rem) / b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return 0.0f64.copysign(a / b);
    }

    let floor = quotient.floor();
    if quotient - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[inline]
pub fn square_root(a: f64) -> Result<f64, MathError> {
    if a < 0.0 {
        return Err(MathError::NegativeSquareRoot);
    }
    Ok(a.sqrt())
}

#[inline]
pub fn square(a: f64) -> f64 {
    a * a
}

#[inline]
pub fn reciprocal(a: f64) -> Result<f64, MathError> {
    if a == 0.0 {
        return Err(MathError::ReciprocalOfZero);
    }
    Ok(1.0 / a)
}
