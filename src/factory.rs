//! Tag-dispatched construction of operator nodes.
//!
//! [`make`] builds the concrete node for an [`OpTag`] without the caller
//! naming the node type. The mapping from tag to constructor is one exhaustive
//! `match`, so a new tag does not compile until it has a constructor.
//!
//! # Arity contract
//! - Unary tags take exactly one operand; a second one is rejected.
//! - Binary tags take exactly two operands; a missing one is rejected.
//! - N-ary tags take one or two initial operands and can grow later via
//!   [`Expr::append`].
//! - `Null` builds nothing and returns `Ok(None)`.
//!
//! ```
//! use autoderiv::{Expr, OpTag, make};
//!
//! let x = Expr::variable::<i32>("x");
//! let sine = make(OpTag::Sin, Expr::constant(2), None)?.unwrap();
//! let power = make(OpTag::Power, sine, Some(x))?.unwrap();
//! let sum = make(OpTag::Add, Expr::constant(1), Some(power))?.unwrap();
//! assert_eq!(sum.to_string(), "1 + sin(2)^x");
//!
//! assert!(make(OpTag::Null, Expr::constant(0), None)?.is_none());
//! # Ok::<(), autoderiv::ExprError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::core::{BinaryOp, Expr, ExprError, NAryOp, UnaryOp};

/// Number of operands an operator tag takes at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Builds no node (`Null`)
    Nullary,
    Unary,
    Binary,
    /// One or two operands now, more through `append`
    Variadic,
}

/// Symbolic operator tag understood by [`make`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpTag {
    Negate,
    Sin,
    Cos,
    Tan,
    /// Fixed two-operand addition
    Add2,
    /// Fixed two-operand subtraction
    Minus2,
    /// Fixed two-operand multiplication
    Mult2,
    /// Appendable addition
    Add,
    /// Appendable subtraction
    Minus,
    /// Appendable multiplication
    Mult,
    Div,
    Power,
    /// Logarithm, first operand is the base
    Log,
    /// Sentinel that builds no node
    Null,
}

impl OpTag {
    /// Every tag, in declaration order
    pub const ALL: [OpTag; 14] = [
        OpTag::Negate,
        OpTag::Sin,
        OpTag::Cos,
        OpTag::Tan,
        OpTag::Add2,
        OpTag::Minus2,
        OpTag::Mult2,
        OpTag::Add,
        OpTag::Minus,
        OpTag::Mult,
        OpTag::Div,
        OpTag::Power,
        OpTag::Log,
        OpTag::Null,
    ];

    pub const fn arity(&self) -> Arity {
        match self {
            OpTag::Negate | OpTag::Sin | OpTag::Cos | OpTag::Tan => Arity::Unary,
            OpTag::Add2
            | OpTag::Minus2
            | OpTag::Mult2
            | OpTag::Div
            | OpTag::Power
            | OpTag::Log => Arity::Binary,
            OpTag::Add | OpTag::Minus | OpTag::Mult => Arity::Variadic,
            OpTag::Null => Arity::Nullary,
        }
    }

    /// Canonical lowercase name, accepted back by `FromStr`
    pub const fn name(&self) -> &'static str {
        match self {
            OpTag::Negate => "negative",
            OpTag::Sin => "sin",
            OpTag::Cos => "cos",
            OpTag::Tan => "tan",
            OpTag::Add2 => "add2",
            OpTag::Minus2 => "minus2",
            OpTag::Mult2 => "mult2",
            OpTag::Add => "add",
            OpTag::Minus => "minus",
            OpTag::Mult => "mult",
            OpTag::Div => "div",
            OpTag::Power => "power",
            OpTag::Log => "log",
            OpTag::Null => "null",
        }
    }
}

impl fmt::Display for OpTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OpTag {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s {
            "negative" | "negate" | "neg" => OpTag::Negate,
            "sin" => OpTag::Sin,
            "cos" => OpTag::Cos,
            "tan" => OpTag::Tan,
            "add2" => OpTag::Add2,
            "minus2" => OpTag::Minus2,
            "mult2" => OpTag::Mult2,
            "add" => OpTag::Add,
            "minus" | "sub" | "subtract" => OpTag::Minus,
            "mult" | "mul" | "multiply" => OpTag::Mult,
            "div" | "divide" => OpTag::Div,
            "power" | "pow" => OpTag::Power,
            "log" => OpTag::Log,
            "null" | "none" => OpTag::Null,
            _ => return Err(ExprError::unknown_tag(s)),
        };
        Ok(tag)
    }
}

/// Build the node selected by `tag` over `a` and the optional second operand `b`.
///
/// Returns `Ok(None)` for [`OpTag::Null`]; callers must check for absence
/// before using the result.
pub fn make(tag: OpTag, a: Expr, b: Option<Expr>) -> Result<Option<Expr>, ExprError> {
    let expr = match tag {
        OpTag::Null => return Ok(None),

        OpTag::Negate => unary(tag, UnaryOp::Negative, a, b)?,
        OpTag::Sin => unary(tag, UnaryOp::Sine, a, b)?,
        OpTag::Cos => unary(tag, UnaryOp::Cosine, a, b)?,
        OpTag::Tan => unary(tag, UnaryOp::Tangent, a, b)?,

        OpTag::Add2 => binary(tag, BinaryOp::Add2, a, b)?,
        OpTag::Minus2 => binary(tag, BinaryOp::Minus2, a, b)?,
        OpTag::Mult2 => binary(tag, BinaryOp::Multiply2, a, b)?,
        OpTag::Div => binary(tag, BinaryOp::Divide, a, b)?,
        OpTag::Power => binary(tag, BinaryOp::Power, a, b)?,
        OpTag::Log => binary(tag, BinaryOp::Logarithmic, a, b)?,

        OpTag::Add => Expr::nary_with(NAryOp::Add, a, b),
        OpTag::Minus => Expr::nary_with(NAryOp::Minus, a, b),
        OpTag::Mult => Expr::nary_with(NAryOp::Multiply, a, b),
    };
    Ok(Some(expr))
}

/// Shorthand for `make(tag, a, None)`
pub fn make_unary(tag: OpTag, a: Expr) -> Result<Option<Expr>, ExprError> {
    make(tag, a, None)
}

/// Shorthand for `make(tag, a, Some(b))`
pub fn make_binary(tag: OpTag, a: Expr, b: Expr) -> Result<Option<Expr>, ExprError> {
    make(tag, a, Some(b))
}

fn unary(tag: OpTag, op: UnaryOp, a: Expr, b: Option<Expr>) -> Result<Expr, ExprError> {
    if b.is_some() {
        debug!(%tag, "rejected second operand for unary operator");
        return Err(ExprError::UnexpectedOperand { tag });
    }
    Ok(Expr::unary(op, a))
}

fn binary(tag: OpTag, op: BinaryOp, a: Expr, b: Option<Expr>) -> Result<Expr, ExprError> {
    match b {
        Some(b) => Ok(Expr::binary(op, a, b)),
        None => {
            debug!(%tag, "missing second operand for binary operator");
            Err(ExprError::MissingOperand { tag })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_round_trip() {
        for tag in OpTag::ALL {
            assert_eq!(tag.name().parse::<OpTag>(), Ok(tag));
            assert_eq!(tag.to_string(), tag.name());
        }
    }

    #[test]
    fn test_tag_aliases() {
        assert_eq!("neg".parse::<OpTag>(), Ok(OpTag::Negate));
        assert_eq!("subtract".parse::<OpTag>(), Ok(OpTag::Minus));
        assert_eq!("pow".parse::<OpTag>(), Ok(OpTag::Power));
        assert_eq!("none".parse::<OpTag>(), Ok(OpTag::Null));
        assert_eq!(
            "sqrt".parse::<OpTag>(),
            Err(ExprError::UnknownTag("sqrt".to_string()))
        );
    }

    #[test]
    fn test_arity_classes() {
        assert_eq!(OpTag::Tan.arity(), Arity::Unary);
        assert_eq!(OpTag::Log.arity(), Arity::Binary);
        assert_eq!(OpTag::Mult2.arity(), Arity::Binary);
        assert_eq!(OpTag::Mult.arity(), Arity::Variadic);
        assert_eq!(OpTag::Null.arity(), Arity::Nullary);
    }
}
