//! Built-in scalar operators.
//!
//! Each operator has the leaf signature expected by
//! [`map2`](crate::broadcast::map2), so `map2(&a, &b, ops::add)` broadcasts
//! addition over nested values.

use std::cmp::Ordering;

use crate::error::{EngineError, Result};
use crate::value::{Scalar, Value};

fn unsupported(op: &'static str, lhs: &Scalar, rhs: &Scalar) -> EngineError {
    EngineError::UnsupportedOperands {
        op,
        lhs: lhs.clone(),
        rhs: rhs.clone(),
    }
}

fn arith(
    op: &'static str,
    lhs: &Scalar,
    rhs: &Scalar,
    int: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Result<Value> {
    let result = match (lhs, rhs) {
        (Scalar::Int(a), Scalar::Int(b)) => {
            Scalar::Int(int(*a, *b).ok_or(EngineError::Overflow { op })?)
        }
        (Scalar::Int(a), Scalar::Float(b)) => Scalar::Float(float(*a as f64, *b)),
        (Scalar::Float(a), Scalar::Int(b)) => Scalar::Float(float(*a, *b as f64)),
        (Scalar::Float(a), Scalar::Float(b)) => Scalar::Float(float(*a, *b)),
        _ => return Err(unsupported(op, lhs, rhs)),
    };
    Ok(Value::Scalar(result))
}

/// Addition; strings concatenate.
pub fn add(lhs: &Scalar, rhs: &Scalar) -> Result<Value> {
    if let (Scalar::Str(a), Scalar::Str(b)) = (lhs, rhs) {
        return Ok(Value::from(format!("{a}{b}")));
    }
    arith("add", lhs, rhs, i64::checked_add, |a, b| a + b)
}

pub fn sub(lhs: &Scalar, rhs: &Scalar) -> Result<Value> {
    arith("sub", lhs, rhs, i64::checked_sub, |a, b| a - b)
}

pub fn mul(lhs: &Scalar, rhs: &Scalar) -> Result<Value> {
    arith("mul", lhs, rhs, i64::checked_mul, |a, b| a * b)
}

/// Total order over comparable scalar pairs. Numbers compare across
/// int/float, text compares lexicographically.
pub fn compare(op: &'static str, lhs: &Scalar, rhs: &Scalar) -> Result<Ordering> {
    let ordering = match (lhs, rhs) {
        (Scalar::Int(a), Scalar::Int(b)) => Some(a.cmp(b)),
        (Scalar::Int(a), Scalar::Float(b)) => (*a as f64).partial_cmp(b),
        (Scalar::Float(a), Scalar::Int(b)) => a.partial_cmp(&(*b as f64)),
        (Scalar::Float(a), Scalar::Float(b)) => a.partial_cmp(b),
        (Scalar::Str(a) | Scalar::Symbol(a), Scalar::Str(b) | Scalar::Symbol(b)) => {
            Some(a.cmp(b))
        }
        (Scalar::Bool(a), Scalar::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    };
    ordering.ok_or_else(|| unsupported(op, lhs, rhs))
}

pub fn lt(lhs: &Scalar, rhs: &Scalar) -> Result<Value> {
    Ok(Value::from(compare("lt", lhs, rhs)? == Ordering::Less))
}

pub fn gt(lhs: &Scalar, rhs: &Scalar) -> Result<Value> {
    Ok(Value::from(compare("gt", lhs, rhs)? == Ordering::Greater))
}

pub fn min(lhs: &Scalar, rhs: &Scalar) -> Result<Value> {
    let smaller = match compare("min", lhs, rhs)? {
        Ordering::Greater => rhs,
        _ => lhs,
    };
    Ok(Value::Scalar(smaller.clone()))
}

pub fn max(lhs: &Scalar, rhs: &Scalar) -> Result<Value> {
    let larger = match compare("max", lhs, rhs)? {
        Ordering::Less => rhs,
        _ => lhs,
    };
    Ok(Value::Scalar(larger.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_float_promotion() {
        assert_eq!(add(&Scalar::Int(1), &Scalar::Int(2)).unwrap(), Value::from(3));
        assert_eq!(add(&Scalar::Int(1), &Scalar::Float(0.5)).unwrap(), Value::from(1.5));
        assert_eq!(mul(&Scalar::Float(2.0), &Scalar::Int(3)).unwrap(), Value::from(6.0));
    }

    #[test]
    fn string_concat() {
        let v = add(&Scalar::Str("sin".into()), &Scalar::Str("osc".into())).unwrap();
        assert_eq!(v, Value::from("sinosc"));
    }

    #[test]
    fn overflow_is_reported() {
        let err = add(&Scalar::Int(i64::MAX), &Scalar::Int(1)).unwrap_err();
        assert!(matches!(err, EngineError::Overflow { op: "add" }));
    }

    #[test]
    fn mixed_types_are_rejected() {
        let err = sub(&Scalar::Str("a".into()), &Scalar::Int(1)).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedOperands { op: "sub", .. }));
        assert_eq!(err.to_string(), "unsupported operands for sub: \"a\" and 1");
    }

    #[test]
    fn comparisons() {
        assert_eq!(lt(&Scalar::Int(1), &Scalar::Float(1.5)).unwrap(), Value::from(true));
        assert_eq!(gt(&Scalar::Int(1), &Scalar::Float(1.5)).unwrap(), Value::from(false));
        assert_eq!(min(&Scalar::Int(4), &Scalar::Int(2)).unwrap(), Value::from(2));
        assert_eq!(max(&Scalar::Int(4), &Scalar::Int(2)).unwrap(), Value::from(4));
        assert!(compare("lt", &Scalar::Float(f64::NAN), &Scalar::Int(1)).is_err());
    }
}
