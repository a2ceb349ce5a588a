//! Operator overloading and conversions for ergonomic expression building.
//!
//! `+` and `*` build appendable n-ary nodes and extend a left operand that is
//! already an n-ary sum (or product), so `a + b + c` is one node with three
//! children. `-` and `/` build fixed two-operand nodes, and unary `-` builds
//! a `Negative`.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::core::expr::{Expr, ExprKind, NAryOp};

// ===== Conversions =====

macro_rules! impl_from_scalar {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Expr {
                fn from(n: $t) -> Self {
                    Expr::constant(n)
                }
            }
        )+
    };
}

impl_from_scalar!(i32, i64, u32, u64, f64);

/// Append `rhs` to `lhs` when `lhs` is an n-ary `op` node, otherwise pair them
fn extend_or_pair(op: NAryOp, mut lhs: Expr, rhs: Expr) -> Expr {
    if let ExprKind::NAry(nary) = &mut lhs.kind
        && nary.op() == op
    {
        nary.push(rhs);
        return lhs;
    }
    Expr::nary_with(op, lhs, [rhs])
}

// ===== Macro for generating operator implementations =====

macro_rules! impl_binary_ops {
    ($lhs:ty, $rhs:ty, $to_lhs:expr, $to_rhs:expr) => {
        impl Add<$rhs> for $lhs {
            type Output = Expr;
            fn add(self, rhs: $rhs) -> Expr {
                extend_or_pair(NAryOp::Add, $to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Sub<$rhs> for $lhs {
            type Output = Expr;
            fn sub(self, rhs: $rhs) -> Expr {
                Expr::minus2($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Mul<$rhs> for $lhs {
            type Output = Expr;
            fn mul(self, rhs: $rhs) -> Expr {
                extend_or_pair(NAryOp::Multiply, $to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Div<$rhs> for $lhs {
            type Output = Expr;
            fn div(self, rhs: $rhs) -> Expr {
                Expr::divide($to_lhs(self), $to_rhs(rhs))
            }
        }
    };
}

impl_binary_ops!(Expr, Expr, |s: Expr| s, |r: Expr| r);
impl_binary_ops!(Expr, &Expr, |s: Expr| s, |r: &Expr| r.clone());
impl_binary_ops!(&Expr, Expr, |s: &Expr| s.clone(), |r: Expr| r);
impl_binary_ops!(&Expr, &Expr, |s: &Expr| s.clone(), |r: &Expr| r.clone());
impl_binary_ops!(Expr, f64, |s: Expr| s, Expr::from);
impl_binary_ops!(Expr, i32, |s: Expr| s, Expr::from);
impl_binary_ops!(f64, Expr, Expr::from, |r: Expr| r);
impl_binary_ops!(i32, Expr, Expr::from, |r: Expr| r);

// Negation
impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::negative(self)
    }
}

impl Neg for &Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::negative(self.clone())
    }
}
