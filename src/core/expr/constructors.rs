//! Expression constructors.
//!
//! Provides all constructor methods for building expressions. Every fixed-arity
//! constructor takes its operands by value, so a node can never be built with a
//! missing child.

use super::{BinaryOp, Expr, ExprKind, NAry, NAryOp, UnaryOp, Variable, next_id};
use crate::core::number::Scalar;

impl Expr {
    /// Create a new expression with fresh ID
    pub fn new(kind: ExprKind) -> Self {
        Self {
            id: next_id(),
            kind,
        }
    }

    // -------------------------------------------------------------------------
    // Leaves
    // -------------------------------------------------------------------------

    /// Create a constant leaf from any supported numeric type
    ///
    /// ```
    /// use autoderiv::Expr;
    /// assert_eq!(Expr::constant(42u8).to_string(), "42");
    /// assert_eq!(Expr::constant(0.5).to_string(), "0.5");
    /// ```
    pub fn constant<T: Scalar>(value: T) -> Self {
        Self::new(ExprKind::Constant(value.to_number()))
    }

    /// Create a variable leaf declared with element type `T`
    pub fn variable<T: Scalar>(name: impl Into<String>) -> Self {
        Self::new(ExprKind::Variable(Variable::new(name.into(), T::TYPE)))
    }

    // -------------------------------------------------------------------------
    // Fixed arity
    // -------------------------------------------------------------------------

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::new(ExprKind::Unary(op, Box::new(operand)))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::new(ExprKind::Binary(op, Box::new(left), Box::new(right)))
    }

    /// `-operand`
    pub fn negative(operand: Expr) -> Self {
        Self::unary(UnaryOp::Negative, operand)
    }

    pub fn sin(self) -> Self {
        Self::unary(UnaryOp::Sine, self)
    }

    pub fn cos(self) -> Self {
        Self::unary(UnaryOp::Cosine, self)
    }

    pub fn tan(self) -> Self {
        Self::unary(UnaryOp::Tangent, self)
    }

    /// Two-operand addition that can never grow
    pub fn add2(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Add2, left, right)
    }

    pub fn minus2(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Minus2, left, right)
    }

    pub fn multiply2(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Multiply2, left, right)
    }

    pub fn divide(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Divide, left, right)
    }

    /// Raise to a power (since Rust ^ is XOR, not power)
    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Power, self, exponent.into())
    }

    /// Logarithm of `arg` in base `base`, rendered as `log base(arg)`
    pub fn log(base: Expr, arg: Expr) -> Self {
        Self::binary(BinaryOp::Logarithmic, base, arg)
    }

    // -------------------------------------------------------------------------
    // Variable arity
    // -------------------------------------------------------------------------

    /// Create an n-ary node holding a single child
    pub fn nary(op: NAryOp, first: Expr) -> Self {
        Self::new(ExprKind::NAry(NAry::new(op, first)))
    }

    /// Create an n-ary node from a first child followed by any number of others
    pub fn nary_with(op: NAryOp, first: Expr, rest: impl IntoIterator<Item = Expr>) -> Self {
        let mut nary = NAry::new(op, first);
        for child in rest {
            nary.push(child);
        }
        Self::new(ExprKind::NAry(nary))
    }

    /// Create an n-ary node from a list of children, or `None` if the list is empty
    pub fn nary_from(op: NAryOp, children: Vec<Expr>) -> Option<Self> {
        let mut iter = children.into_iter();
        let first = iter.next()?;
        Some(Self::nary_with(op, first, iter))
    }

    /// Appendable addition of two terms
    pub fn add(left: Expr, right: Expr) -> Self {
        Self::nary_with(NAryOp::Add, left, [right])
    }

    /// Appendable subtraction of two terms
    pub fn minus(left: Expr, right: Expr) -> Self {
        Self::nary_with(NAryOp::Minus, left, [right])
    }

    /// Appendable product of two factors
    pub fn multiply(left: Expr, right: Expr) -> Self {
        Self::nary_with(NAryOp::Multiply, left, [right])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::number::{Number, ScalarType};

    #[test]
    fn test_leaf_constructors() {
        assert_eq!(Expr::constant(3i64).as_constant(), Some(Number::Int(3)));
        assert_eq!(Expr::constant(3u32).as_constant(), Some(Number::UInt(3)));
        let v = Expr::variable::<f32>("theta");
        assert_eq!(v.as_variable().map(|v| v.scalar_type()), Some(ScalarType::Float));
    }

    #[test]
    fn test_nary_from_empty_is_none() {
        assert!(Expr::nary_from(NAryOp::Add, Vec::new()).is_none());

        let prod = Expr::nary_from(
            NAryOp::Multiply,
            vec![Expr::constant(1), Expr::constant(2), Expr::constant(3)],
        )
        .unwrap();
        assert_eq!(prod.as_nary().map(|n| n.arity()), Some(3));
    }

    #[test]
    fn test_single_child_nary() {
        let single = Expr::nary(NAryOp::Add, Expr::variable::<i32>("x"));
        assert_eq!(single.as_nary().map(|n| n.arity()), Some(1));
        assert_eq!(single.to_string(), "x");
    }
}
