//! Parallel batch rendering using Rayon
//!
//! Rendering only reads the tree, so distinct trees (or one fully built tree
//! shared by reference) can be rendered from many threads at once. Appending
//! needs `&mut Expr`, which the borrow checker keeps out of these calls.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! autoderiv = { version = "0.1", features = ["parallel"] }
//! ```

use crate::{Expr, ExprError, Render};
use rayon::prelude::*;

/// Render every expression with the canonical format, preserving input order.
///
/// # Example
/// ```
/// use autoderiv::{Expr, parallel::render_all};
///
/// let exprs: Vec<Expr> = (0..4).map(|i| Expr::constant(i).sin()).collect();
/// assert_eq!(render_all(&exprs)[3], "sin(3)");
/// ```
pub fn render_all(exprs: &[Expr]) -> Vec<String> {
    exprs.par_iter().map(Expr::to_string).collect()
}

/// Render every expression with `render`, preserving input order.
///
/// Each entry fails independently when its tree exceeds the builder's limits.
pub fn render_all_with(render: &Render, exprs: &[Expr]) -> Vec<Result<String, ExprError>> {
    exprs.par_iter().map(|e| render.render(e)).collect()
}
