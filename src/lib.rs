//! Expression Trees for Automatic Derivation
//!
//! Typed trees for arithmetic and trigonometric expressions, with a single
//! canonical text rendering.
//!
//! # Features
//! - Constants over any primitive numeric type, named variables
//! - Fixed-arity operators: `-x`, `sin`, `cos`, `tan`, `+ - * /`, `^`, `log`
//! - Appendable n-ary `add`, `minus`, `multiply`
//! - Tag-dispatched factory ([`make`]) with checked arity
//! - **Builder pattern API** for rendering options and safety limits
//! - Visitor-based traversal
//!
//! # Usage Examples
//!
//! ## Factory API
//! ```
//! use autoderiv::{OpTag, make, make_constant, make_variable, render};
//!
//! let x = make_variable::<i32>("x");
//! let mut sum = make(OpTag::Add, make_constant(1), Some(x.clone()))?.unwrap();
//! let square = make(OpTag::Mult, x.clone(), Some(x))?.unwrap();
//! sum.append(square)?;
//! assert_eq!(render(&sum), "1 + x + x * x");
//! # Ok::<(), autoderiv::ExprError>(())
//! ```
//!
//! ## Operator API
//! ```
//! use autoderiv::Expr;
//! let x = Expr::variable::<i32>("x");
//! let expr = Expr::from(1) + Expr::from(2).sin().pow(x);
//! assert_eq!(expr.to_string(), "1 + sin(2)^x");
//! ```

mod builder;
mod core;
mod factory;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use builder::Render;
pub use crate::core::visitor;
pub use crate::core::{
    BinaryOp, Expr, ExprError, ExprKind, ExprVisitor, NAry, NAryOp, NodeCounter, Number, Scalar,
    ScalarType, UnaryOp, Variable, VariableCollector, walk_expr,
};
pub use factory::{Arity, OpTag, make, make_binary, make_unary};

/// Default maximum tree depth used by [`Render::bounded`]
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// Default maximum tree node count used by [`Render::bounded`]
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// Create a constant leaf
///
/// # Example
/// ```
/// use autoderiv::{make_constant, render};
/// assert_eq!(render(&make_constant(12u64)), "12");
/// ```
pub fn make_constant<T: Scalar>(value: T) -> Expr {
    Expr::constant(value)
}

/// Create a variable leaf declared with element type `T`
pub fn make_variable<T: Scalar>(name: impl Into<String>) -> Expr {
    Expr::variable::<T>(name)
}

/// Render an expression in the canonical textual form
///
/// Same as `expr.to_string()`. Use [`Render`] for grouping or size limits.
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}
