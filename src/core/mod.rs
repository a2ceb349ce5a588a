//! Core types for expression trees
//!
//! This module contains the fundamental types:
//! - `Expr` / `ExprKind` - Expression tree
//! - `Number` / `Scalar` - Constant values and the numeric types that produce them
//! - `ExprError` - Error types
//! - Display formatting (to_string)
//! - Operator overloading for building trees
//! - Visitor pattern for tree traversal

pub(crate) mod display; // Display implementations for Expr
pub(crate) mod error;
pub(crate) mod expr;
pub(crate) mod number;
mod operators; // std::ops impls for Expr
pub mod visitor; // Public visitor pattern

// Public re-exports (for external API)
pub use error::ExprError;
pub use expr::{BinaryOp, Expr, ExprKind, NAry, NAryOp, UnaryOp, Variable};
pub use number::{Number, Scalar, ScalarType};
pub use visitor::{ExprVisitor, NodeCounter, VariableCollector, walk_expr};
