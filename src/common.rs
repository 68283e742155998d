use crate::narrative::Pool;
use std::fmt::{self, Write};

pub type Int = i64;

pub type Float = f64;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Upper bound for dice counts, die sizes and the length of a single roll.
pub const MAX_DICE: Int = 300;

/// Upper bound for the number of oracle dice rolled by one `gm`.
pub const MAX_ORACLE_DICE: Int = 10;

pub(crate) fn clamp_count(x: Int, max: Int) -> usize {
    x.clamp(1, max) as usize
}

/// Whether an operator takes an operand on one of its sides.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operand {
    Required,
    Optional,
    Absent,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Every operator of the notation, with aliases already folded into their canonical form.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Dice,
    Fudge,
    Explode,
    KeepHighest,
    KeepLowest,
    GreaterThan,
    Equal,
    Narrative(Pool),
    Oracle,
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Binding strength; higher binds tighter. Every operator is left-associative.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Dice | Self::Fudge => 4,
            Self::Explode
            | Self::KeepHighest
            | Self::KeepLowest
            | Self::GreaterThan
            | Self::Equal
            | Self::Narrative(_)
            | Self::Oracle => 3,
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// The (left, right) operand shape of the operator.
    pub const fn operands(self) -> (Operand, Operand) {
        use Operand::*;
        match self {
            Self::Dice => (Optional, Optional),
            Self::Fudge | Self::Oracle => (Optional, Absent),
            Self::Explode | Self::Narrative(_) => (Required, Absent),
            Self::KeepHighest | Self::KeepLowest => (Required, Optional),
            Self::GreaterThan | Self::Equal => (Required, Required),
            Self::Add | Self::Sub | Self::Mul | Self::Div => (Required, Required),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Dice => "d",
            Self::Fudge => "df",
            Self::Explode => "!",
            Self::KeepHighest => "kh",
            Self::KeepLowest => "kl",
            Self::GreaterThan => ">",
            Self::Equal => "e",
            Self::Narrative(pool) => pool.as_str(),
            Self::Oracle => "gm",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_char('\'')?;
        f.write_str(s)?;
        f.write_char('\'')
    }
}
