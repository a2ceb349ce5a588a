//! Expression tree for arithmetic and trigonometric formulas.
//!
//! This module defines:
//! - `Expr` - The tree node type
//! - `ExprKind` - The closed set of node variants
//! - `UnaryOp`, `BinaryOp`, `NAryOp` - Operator identities per arity
//! - `NAry` - The appendable child list of variable-arity operators
//!
//! # Architecture
//!
//! ## Arity groups
//! Fixed-arity operators own their operands directly (`Box<Expr>`), so a unary
//! or binary node can never change shape after construction. Variable-arity
//! operators own an ordered `Vec<Expr>` wrapped in [`NAry`], which can only be
//! created non-empty and only grows at the end.
//!
//! ## Ownership
//! Every node exclusively owns its children. There are no parent links and no
//! sharing; holding on to a subtree after attaching it means cloning it.
//!
//! # Usage
//!
//! ```
//! use autoderiv::Expr;
//!
//! let x = Expr::variable::<i32>("x");
//! let mut sum = Expr::add(Expr::constant(1), x.clone());
//! sum.append(Expr::multiply2(x.clone(), x)).unwrap();
//! assert_eq!(sum.to_string(), "1 + x + x * x");
//! ```

// Submodules
mod analysis;
mod constructors;

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::core::error::ExprError;
use crate::core::number::{Number, ScalarType};

// =============================================================================
// EXPRESSION ID COUNTER
// =============================================================================

static EXPR_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

pub(crate) fn next_id() -> u64 {
    EXPR_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

// =============================================================================
// EXPR - The main expression type
// =============================================================================

/// A node in an expression tree, together with everything below it.
#[derive(Debug, Clone)]
pub struct Expr {
    /// Unique ID for debugging (not used in equality comparisons)
    pub(crate) id: u64,
    /// The kind of expression (structure)
    pub(crate) kind: ExprKind,
}

impl Deref for Expr {
    type Target = ExprKind;
    fn deref(&self) -> &Self::Target {
        &self.kind
    }
}

// Structural equality based on KIND only
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

// Tear down through an explicit stack so very deep trees do not overflow on drop
impl Drop for Expr {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        detach_children(&mut self.kind, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr.kind, &mut pending);
        }
    }
}

fn detach_children(kind: &mut ExprKind, out: &mut Vec<Expr>) {
    let placeholder = ExprKind::Constant(Number::Int(0));
    match std::mem::replace(kind, placeholder) {
        ExprKind::Unary(_, inner) => out.push(*inner),
        ExprKind::Binary(_, l, r) => {
            out.push(*l);
            out.push(*r);
        }
        ExprKind::NAry(nary) => out.extend(nary.children),
        ExprKind::Constant(_) | ExprKind::Variable(_) => {}
    }
}

/// The closed set of node variants
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Numeric constant (e.g., 1, 2.5)
    Constant(Number),

    /// Named variable (e.g., "x")
    Variable(Variable),

    /// Prefix or function-call operator over one operand
    Unary(UnaryOp, Box<Expr>),

    /// Operator over an ordered pair of operands
    Binary(BinaryOp, Box<Expr>, Box<Expr>),

    /// Operator over an ordered, appendable list of operands
    NAry(NAry),
}

// =============================================================================
// LEAVES
// =============================================================================

/// A named variable together with the scalar type it was declared with.
///
/// The declared type is informational only; no value is ever bound to the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
    ty: ScalarType,
}

impl Variable {
    pub(crate) fn new(name: String, ty: ScalarType) -> Self {
        Variable { name, ty }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.ty
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

/// One-operand operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negative,
    Sine,
    Cosine,
    Tangent,
}

impl UnaryOp {
    pub const fn name(&self) -> &'static str {
        match self {
            UnaryOp::Negative => "negative",
            UnaryOp::Sine => "sin",
            UnaryOp::Cosine => "cos",
            UnaryOp::Tangent => "tan",
        }
    }
}

/// Two-operand operators whose arity is fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add2,
    Minus2,
    Multiply2,
    Divide,
    Power,
    /// `left` is the base, `right` the argument
    Logarithmic,
}

impl BinaryOp {
    pub const fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add2 => "add2",
            BinaryOp::Minus2 => "minus2",
            BinaryOp::Multiply2 => "multiply2",
            BinaryOp::Divide => "divide",
            BinaryOp::Power => "power",
            BinaryOp::Logarithmic => "log",
        }
    }
}

/// Variable-arity operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NAryOp {
    Add,
    Minus,
    Multiply,
}

impl NAryOp {
    pub const fn name(&self) -> &'static str {
        match self {
            NAryOp::Add => "add",
            NAryOp::Minus => "minus",
            NAryOp::Multiply => "multiply",
        }
    }

    /// Token placed between consecutive children when rendering
    pub const fn separator(&self) -> &'static str {
        match self {
            // Minus joins with "+" in the established output; tests lock this in.
            NAryOp::Add | NAryOp::Minus => " + ",
            NAryOp::Multiply => " * ",
        }
    }
}

macro_rules! display_by_name {
    ($($t:ty),+) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )+
    };
}

display_by_name!(UnaryOp, BinaryOp, NAryOp);

/// Children of a variable-arity operator.
///
/// Always holds at least one child: it can only be built from a first child
/// and only grows through [`NAry::push`].
#[derive(Debug, Clone, PartialEq)]
pub struct NAry {
    op: NAryOp,
    children: Vec<Expr>,
}

impl NAry {
    pub(crate) fn new(op: NAryOp, first: Expr) -> Self {
        NAry {
            op,
            children: vec![first],
        }
    }

    pub fn op(&self) -> NAryOp {
        self.op
    }

    /// Children in render order
    pub fn children(&self) -> &[Expr] {
        &self.children
    }

    /// Number of children (never zero)
    pub fn arity(&self) -> usize {
        self.children.len()
    }

    /// Append a child at the rightmost position
    pub fn push(&mut self, child: Expr) {
        self.children.push(child);
        trace!(op = self.op.name(), arity = self.children.len(), "appended n-ary child");
    }
}

// =============================================================================
// ACCESSORS AND NARROWING
// =============================================================================

impl Expr {
    /// Get the unique ID of the expression
    #[inline]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Borrow the node's kind
    #[inline]
    pub const fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// Short lowercase name of the node variant (e.g. "constant", "sin", "add2")
    pub const fn kind_name(&self) -> &'static str {
        match &self.kind {
            ExprKind::Constant(_) => "constant",
            ExprKind::Variable(_) => "variable",
            ExprKind::Unary(op, _) => op.name(),
            ExprKind::Binary(op, _, _) => op.name(),
            ExprKind::NAry(nary) => nary.op.name(),
        }
    }

    /// True for constants and variables
    pub const fn is_leaf(&self) -> bool {
        matches!(self.kind, ExprKind::Constant(_) | ExprKind::Variable(_))
    }

    /// Check if expression is a constant and return its value
    pub const fn as_constant(&self) -> Option<Number> {
        match &self.kind {
            ExprKind::Constant(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match &self.kind {
            ExprKind::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Operand of a unary operator
    pub fn operand(&self) -> Option<&Expr> {
        match &self.kind {
            ExprKind::Unary(_, inner) => Some(&**inner),
            _ => None,
        }
    }

    /// Left operand of a binary operator
    pub fn left(&self) -> Option<&Expr> {
        match &self.kind {
            ExprKind::Binary(_, l, _) => Some(&**l),
            _ => None,
        }
    }

    /// Right operand of a binary operator
    pub fn right(&self) -> Option<&Expr> {
        match &self.kind {
            ExprKind::Binary(_, _, r) => Some(&**r),
            _ => None,
        }
    }

    /// All direct children in render order (empty for leaves)
    pub fn children(&self) -> Vec<&Expr> {
        match &self.kind {
            ExprKind::Constant(_) | ExprKind::Variable(_) => Vec::new(),
            ExprKind::Unary(_, inner) => vec![&**inner],
            ExprKind::Binary(_, l, r) => vec![&**l, &**r],
            ExprKind::NAry(nary) => nary.children.iter().collect(),
        }
    }

    /// Narrow to the n-ary capability
    pub fn as_nary(&self) -> Option<&NAry> {
        match &self.kind {
            ExprKind::NAry(nary) => Some(nary),
            _ => None,
        }
    }

    /// Narrow to the n-ary capability for mutation
    pub fn as_nary_mut(&mut self) -> Option<&mut NAry> {
        match &mut self.kind {
            ExprKind::NAry(nary) => Some(nary),
            _ => None,
        }
    }

    /// Append `child` as the last operand of an n-ary operator.
    ///
    /// Any other node is left untouched and `ExprError::NotAppendable` is returned.
    pub fn append(&mut self, child: Expr) -> Result<(), ExprError> {
        if let ExprKind::NAry(nary) = &mut self.kind {
            nary.push(child);
            return Ok(());
        }
        Err(ExprError::NotAppendable {
            kind: self.kind_name(),
        })
    }
}
