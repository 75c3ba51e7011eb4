use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

/// ## Runtime values
///
/// Every expression evaluates to exactly one of these.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(Rc<str>),
}

impl Val {
    /// Used by `IF` when the condition is a bare value.
    pub fn is_truthy(&self) -> bool {
        match self {
            Val::Number(n) => *n != 0.0,
            Val::String(s) => !s.is_empty(),
        }
    }

    /// The form `PRINT` writes: numbers get a sign column and a trailing space.
    pub fn to_print_string(&self) -> String {
        match self {
            Val::Number(n) if n.is_sign_negative() && *n != 0.0 => format!("{} ", n),
            Val::Number(n) => format!(" {} ", n.abs()),
            Val::String(s) => s.to_string(),
        }
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Val {
        Val::Number(n)
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        Val::Number(if b { -1.0 } else { 0.0 })
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.into())
    }
}

impl TryFrom<Val> for f64 {
    type Error = Error;
    fn try_from(val: Val) -> Result<Self, Self::Error> {
        match val {
            Val::Number(n) => Ok(n),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Val::Number(-0.5).is_truthy());
        assert!(!Val::Number(0.0).is_truthy());
        assert!(Val::from("x").is_truthy());
        assert!(!Val::from("").is_truthy());
    }

    #[test]
    fn test_print_string() {
        assert_eq!(Val::Number(7.0).to_print_string(), " 7 ");
        assert_eq!(Val::Number(-2.5).to_print_string(), "-2.5 ");
        assert_eq!(Val::Number(-0.0).to_print_string(), " 0 ");
        assert_eq!(Val::from("HI").to_print_string(), "HI");
    }

    #[test]
    fn test_number_from_string_is_mismatch() {
        let e = f64::try_from(Val::from("3")).unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::TypeMismatch);
    }
}
