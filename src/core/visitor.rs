//! Expression visitor pattern for tree traversal
//!
//! Provides a clean interface for walking the expression tree without
//! manually handling the recursive structure.

use rustc_hash::FxHashSet;

use crate::core::expr::{BinaryOp, Expr, ExprKind, NAryOp, UnaryOp, Variable};
use crate::core::number::Number;

/// Trait for visiting expression nodes
///
/// Implement this trait to define custom behavior when traversing expressions.
/// Each method returns a boolean indicating whether to continue visiting children.
///
/// # Example
/// ```
/// use autoderiv::{BinaryOp, Expr, ExprVisitor, NAryOp, Number, UnaryOp, Variable, walk_expr};
///
/// struct TrigCounter { count: usize }
///
/// impl ExprVisitor for TrigCounter {
///     fn visit_constant(&mut self, _n: Number) -> bool { true }
///     fn visit_variable(&mut self, _v: &Variable) -> bool { true }
///     fn visit_unary(&mut self, op: UnaryOp, _operand: &Expr) -> bool {
///         if op != UnaryOp::Negative { self.count += 1; }
///         true
///     }
///     fn visit_binary(&mut self, _op: BinaryOp, _l: &Expr, _r: &Expr) -> bool { true }
///     fn visit_nary(&mut self, _op: NAryOp, _children: &[Expr]) -> bool { true }
/// }
///
/// let x = Expr::variable::<f64>("x");
/// let expr = x.clone().sin() + x.cos();
/// let mut counter = TrigCounter { count: 0 };
/// walk_expr(&expr, &mut counter);
/// assert_eq!(counter.count, 2);
/// ```
pub trait ExprVisitor {
    /// Visit a constant, returns true to continue visiting
    fn visit_constant(&mut self, n: Number) -> bool;

    /// Visit a variable, returns true to continue visiting
    fn visit_variable(&mut self, var: &Variable) -> bool;

    /// Visit a unary operator (-, sin, cos, tan), returns true to visit the operand
    fn visit_unary(&mut self, op: UnaryOp, operand: &Expr) -> bool;

    /// Visit a fixed binary operator, returns true to visit operands
    fn visit_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> bool;

    /// Visit an n-ary operator, returns true to visit its children in order
    fn visit_nary(&mut self, op: NAryOp, children: &[Expr]) -> bool;
}

/// Walk an expression tree with a visitor
///
/// Visits nodes in pre-order (parent before children).
/// The visitor methods return true to continue walking children, false to skip.
pub fn walk_expr<V: ExprVisitor>(expr: &Expr, visitor: &mut V) {
    match &expr.kind {
        ExprKind::Constant(n) => {
            visitor.visit_constant(*n);
        }
        ExprKind::Variable(v) => {
            visitor.visit_variable(v);
        }
        ExprKind::Unary(op, inner) => {
            if visitor.visit_unary(*op, inner) {
                walk_expr(inner, visitor);
            }
        }
        ExprKind::Binary(op, l, r) => {
            if visitor.visit_binary(*op, l, r) {
                walk_expr(l, visitor);
                walk_expr(r, visitor);
            }
        }
        ExprKind::NAry(nary) => {
            if visitor.visit_nary(nary.op(), nary.children()) {
                for child in nary.children() {
                    walk_expr(child, visitor);
                }
            }
        }
    }
}

/// A simple visitor that counts nodes
#[derive(Default)]
pub struct NodeCounter {
    pub count: usize,
}

impl ExprVisitor for NodeCounter {
    fn visit_constant(&mut self, _n: Number) -> bool {
        self.count += 1;
        true
    }

    fn visit_variable(&mut self, _var: &Variable) -> bool {
        self.count += 1;
        true
    }

    fn visit_unary(&mut self, _op: UnaryOp, _operand: &Expr) -> bool {
        self.count += 1;
        true
    }

    fn visit_binary(&mut self, _op: BinaryOp, _left: &Expr, _right: &Expr) -> bool {
        self.count += 1;
        true
    }

    fn visit_nary(&mut self, _op: NAryOp, _children: &[Expr]) -> bool {
        self.count += 1;
        true
    }
}

/// A visitor that collects all unique variable names
#[derive(Default)]
pub struct VariableCollector {
    pub variables: FxHashSet<String>,
}

impl ExprVisitor for VariableCollector {
    fn visit_constant(&mut self, _n: Number) -> bool {
        true
    }

    fn visit_variable(&mut self, var: &Variable) -> bool {
        self.variables.insert(var.name().to_string());
        true
    }

    fn visit_unary(&mut self, _op: UnaryOp, _operand: &Expr) -> bool {
        true
    }

    fn visit_binary(&mut self, _op: BinaryOp, _left: &Expr, _right: &Expr) -> bool {
        true
    }

    fn visit_nary(&mut self, _op: NAryOp, _children: &[Expr]) -> bool {
        true
    }
}
