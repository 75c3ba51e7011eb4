use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// ## Operator semantics
///
/// Additive operators reject mixed operand types with `TYPE MISMATCH`.
/// The multiplicative operators reject any string operand with their own error
/// so a user can tell the two mistakes apart.

pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Result<Val> {
        match val {
            Val::Number(n) => Ok(Val::Number(-n)),
            Val::String(_) => Err(error!(NumericOperator)),
        }
    }

    pub fn identity(val: Val) -> Result<Val> {
        match val {
            Val::Number(_) => Ok(val),
            Val::String(_) => Err(error!(NumericOperator)),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(l + r)),
            (String(l), String(r)) => Ok(String((l.to_string() + &r).into())),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(l - r)),
            (String(_), String(_)) => Err(error!(StringOperator)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn numbers(lhs: Val, rhs: Val) -> Result<(f64, f64)> {
        match (lhs, rhs) {
            (Val::Number(l), Val::Number(r)) => Ok((l, r)),
            _ => Err(error!(NumericOperator)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::Number(l * r))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Number(l / r))
    }

    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Number(l % r))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::Number(l.powf(r)))
    }

    fn compare(lhs: &Val, rhs: &Val) -> Result<Option<Ordering>> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(l.partial_cmp(r)),
            (String(l), String(r)) => Ok(Some(l.cmp(r))),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::compare(&lhs, &rhs)?;
        Ok(Val::from(ord == Some(Ordering::Equal)))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::compare(&lhs, &rhs)?;
        Ok(Val::from(ord != Some(Ordering::Equal)))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::compare(&lhs, &rhs)?;
        Ok(Val::from(ord == Some(Ordering::Less)))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::compare(&lhs, &rhs)?;
        Ok(Val::from(matches!(
            ord,
            Some(Ordering::Less) | Some(Ordering::Equal)
        )))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::less(rhs, lhs)
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::less_equal(rhs, lhs)
    }

    pub fn and(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from(lhs.is_truthy() && rhs.is_truthy()))
    }

    pub fn or(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from(lhs.is_truthy() || rhs.is_truthy()))
    }
}
