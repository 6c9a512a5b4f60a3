use derive_more::Display;
use thiserror::Error;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Display)]
pub enum BinaryOperatorKind {
    #[display(fmt = "+")]
    Plus,
    #[display(fmt = "-")]
    Minus,
    #[display(fmt = "*")]
    Multiply,
    /// Rounds toward negative infinity. Printed as `/`.
    #[display(fmt = "/")]
    FloorDivide,
}

#[derive(Error, Debug, Eq, PartialEq)]
#[allow(clippy::module_name_repetitions)]
pub enum ArithmeticError {
    #[error("attempt to divide {lhs} by zero")]
    DivisionByZero {
        lhs: i64,
    },
    #[error("{lhs} {operator} {rhs} does not fit in 64-bit integer")]
    Overflow {
        lhs: i64,
        operator: BinaryOperatorKind,
        rhs: i64,
    },
}

impl BinaryOperatorKind {
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
        let overflow = || ArithmeticError::Overflow { lhs, operator: self, rhs };

        match self {
            Self::Plus => lhs.checked_add(rhs).ok_or_else(overflow),
            Self::Minus => lhs.checked_sub(rhs).ok_or_else(overflow),
            Self::Multiply => lhs.checked_mul(rhs).ok_or_else(overflow),
            Self::FloorDivide => floor_div(lhs, rhs),
        }
    }
}

pub fn floor_div(lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
    if rhs == 0 {
        return Err(ArithmeticError::DivisionByZero { lhs })
    }

    // only i64::MIN / -1 fails here
    let quotient = lhs.checked_div(rhs).ok_or(ArithmeticError::Overflow {
        lhs,
        operator: BinaryOperatorKind::FloorDivide,
        rhs,
    })?;

    if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}
