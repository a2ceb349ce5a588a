//! Display implementations for expressions.
//!
//! ## Standard Display (`to_string()` / `{}`)
//! The canonical textual form:
//! - `1 + sin(2)^x`
//! - `log 2(x) / -y`
//!
//! Spacing is part of the format: one space around binary and n-ary infix
//! tokens, none around `^`, none after a unary `-`, none between a function
//! name and its `(`. No parentheses are inserted for precedence.
//!
//! ## Grouped Display
//! [`Styled`] with `group_nary` set wraps every n-ary node in parentheses,
//! e.g. `(1 + x + (x * x))`. Used through [`Render`](crate::Render).

use crate::core::expr::{BinaryOp, Expr, ExprKind, NAry, UnaryOp};
use std::fmt;

/// Formatting switches shared by every node of one render call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Style {
    pub group_nary: bool,
}

/// An expression paired with a [`Style`], displayable with `{}`
pub(crate) struct Styled<'a> {
    expr: &'a Expr,
    style: Style,
}

impl<'a> Styled<'a> {
    pub(crate) fn new(expr: &'a Expr, style: Style) -> Self {
        Styled { expr, style }
    }

    fn child(&self, expr: &'a Expr) -> Self {
        Styled {
            expr,
            style: self.style,
        }
    }

    fn fmt_nary(&self, nary: &'a NAry, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = nary.op().separator();
        for (i, child) in nary.children().iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{}", self.child(child))?;
        }
        Ok(())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Styled::new(self, Style::default()), f)
    }
}

impl<'a> fmt::Display for Styled<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expr.kind {
            ExprKind::Constant(n) => write!(f, "{}", n),

            ExprKind::Variable(v) => write!(f, "{}", v),

            ExprKind::Unary(op, inner) => {
                let inner = self.child(inner);
                match op {
                    UnaryOp::Negative => write!(f, "-{}", inner),
                    UnaryOp::Sine | UnaryOp::Cosine | UnaryOp::Tangent => {
                        write!(f, "{}({})", op.name(), inner)
                    }
                }
            }

            ExprKind::Binary(op, l, r) => {
                let (l, r) = (self.child(l), self.child(r));
                match op {
                    BinaryOp::Add2 => write!(f, "{} + {}", l, r),
                    BinaryOp::Minus2 => write!(f, "{} - {}", l, r),
                    BinaryOp::Multiply2 => write!(f, "{} * {}", l, r),
                    BinaryOp::Divide => write!(f, "{} / {}", l, r),
                    BinaryOp::Power => write!(f, "{}^{}", l, r),
                    BinaryOp::Logarithmic => write!(f, "log {}({})", l, r),
                }
            }

            ExprKind::NAry(nary) => {
                if self.style.group_nary {
                    write!(f, "(")?;
                    self.fmt_nary(nary, f)?;
                    write!(f, ")")
                } else {
                    self.fmt_nary(nary, f)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expr::NAryOp;

    fn x() -> Expr {
        Expr::variable::<i32>("x")
    }

    fn grouped(expr: &Expr) -> String {
        Styled::new(expr, Style { group_nary: true }).to_string()
    }

    #[test]
    fn test_display_leaves() {
        assert_eq!(format!("{}", Expr::constant(3)), "3");
        assert_eq!(format!("{}", Expr::constant(-3.25)), "-3.25");
        assert_eq!(format!("{}", x()), "x");
    }

    #[test]
    fn test_display_unary() {
        assert_eq!(Expr::negative(x()).to_string(), "-x");
        assert_eq!(Expr::negative(Expr::negative(x())).to_string(), "--x");
        assert_eq!(x().sin().to_string(), "sin(x)");
        assert_eq!(x().cos().to_string(), "cos(x)");
        assert_eq!(x().tan().to_string(), "tan(x)");
        assert_eq!(Expr::negative(x().sin()).to_string(), "-sin(x)");
    }

    #[test]
    fn test_display_binary() {
        let one = || Expr::constant(1);
        assert_eq!(Expr::add2(one(), x()).to_string(), "1 + x");
        assert_eq!(Expr::minus2(one(), x()).to_string(), "1 - x");
        assert_eq!(Expr::multiply2(one(), x()).to_string(), "1 * x");
        assert_eq!(Expr::divide(one(), x()).to_string(), "1 / x");
        assert_eq!(one().pow(x()).to_string(), "1^x");
        assert_eq!(Expr::log(Expr::constant(2), x()).to_string(), "log 2(x)");
    }

    #[test]
    fn test_display_no_precedence_parens() {
        // (1 + x) / x renders flat
        let expr = Expr::divide(Expr::add2(Expr::constant(1), x()), x());
        assert_eq!(expr.to_string(), "1 + x / x");

        let expr = Expr::add2(x(), Expr::constant(1)).pow(Expr::constant(2));
        assert_eq!(expr.to_string(), "x + 1^2");
    }

    #[test]
    fn test_display_nary() {
        let sum = Expr::nary_with(NAryOp::Add, Expr::constant(1), [x(), Expr::constant(2)]);
        assert_eq!(sum.to_string(), "1 + x + 2");

        let prod = Expr::nary_with(NAryOp::Multiply, x(), [x(), x()]);
        assert_eq!(prod.to_string(), "x * x * x");

        // n-ary Minus shares the "+" separator
        let diff = Expr::minus(Expr::constant(5), x());
        assert_eq!(diff.to_string(), "5 + x");
    }

    #[test]
    fn test_display_grouped_nary() {
        let mut sum = Expr::add(Expr::constant(1), x());
        sum.append(Expr::multiply(x(), x())).unwrap();
        assert_eq!(sum.to_string(), "1 + x + x * x");
        assert_eq!(grouped(&sum), "(1 + x + (x * x))");

        // fixed-arity nodes are unaffected by grouping
        let div = Expr::divide(Expr::constant(1), x());
        assert_eq!(grouped(&div), "1 / x");
    }
}
