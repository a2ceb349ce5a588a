//! Builder pattern API for rendering
//!
//! Provides a fluent interface for configuring how expressions are turned into text.
//!
//! # Example
//! ```
//! use autoderiv::{Expr, Render};
//!
//! let x = Expr::variable::<i32>("x");
//! let mut sum = Expr::add(Expr::constant(1), x.clone());
//! sum.append(Expr::multiply(x.clone(), x))?;
//!
//! let text = Render::new().group_nary(true).max_depth(10).render(&sum)?;
//! assert_eq!(text, "(1 + x + (x * x))");
//! # Ok::<(), autoderiv::ExprError>(())
//! ```

use crate::core::display::{Style, Styled};
use crate::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, Expr, ExprError};

/// Builder for render operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Render {
    group_nary: bool,
    max_depth: Option<usize>,
    max_nodes: Option<usize>,
}

impl Render {
    /// Create a new render builder with default settings (canonical output, no limits)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder limited to `DEFAULT_MAX_DEPTH` and `DEFAULT_MAX_NODES`
    ///
    /// Limits are checked without recursion before any text is produced, so a
    /// tree too deep to render on the current stack is rejected with an error.
    pub fn bounded() -> Self {
        Self::new()
            .max_depth(DEFAULT_MAX_DEPTH)
            .max_nodes(DEFAULT_MAX_NODES)
    }

    /// Wrap every n-ary node in parentheses
    pub fn group_nary(mut self, group: bool) -> Self {
        self.group_nary = group;
        self
    }

    /// Set maximum tree depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set maximum tree node count
    pub fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    /// Render an expression to text
    pub fn render(&self, expr: &Expr) -> Result<String, ExprError> {
        self.check_limits(expr)?;
        let style = Style {
            group_nary: self.group_nary,
        };
        Ok(Styled::new(expr, style).to_string())
    }

    /// Render the result of [`make`](crate::make), passing absence through
    pub fn render_opt(&self, expr: Option<&Expr>) -> Result<Option<String>, ExprError> {
        expr.map(|e| self.render(e)).transpose()
    }

    fn check_limits(&self, expr: &Expr) -> Result<(), ExprError> {
        if let Some(limit) = self.max_depth {
            let depth = expr.max_depth();
            if depth > limit {
                return Err(ExprError::MaxDepthExceeded { limit, depth });
            }
        }
        if let Some(limit) = self.max_nodes {
            let count = expr.node_count();
            if count > limit {
                return Err(ExprError::MaxNodesExceeded { limit, count });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_sines(levels: usize) -> Expr {
        let mut expr = Expr::variable::<f64>("x");
        for _ in 0..levels {
            expr = expr.sin();
        }
        expr
    }

    #[test]
    fn test_default_matches_display() {
        let expr = Expr::minus2(Expr::constant(3), Expr::variable::<i32>("y").tan());
        assert_eq!(Render::new().render(&expr).unwrap(), expr.to_string());
    }

    #[test]
    fn test_depth_limit() {
        let expr = nested_sines(20); // depth 21
        assert!(Render::new().max_depth(21).render(&expr).is_ok());
        assert_eq!(
            Render::new().max_depth(20).render(&expr),
            Err(ExprError::MaxDepthExceeded {
                limit: 20,
                depth: 21
            })
        );
    }

    #[test]
    fn test_bounded_rejects_very_deep_tree() {
        let expr = nested_sines(200_000);
        assert_eq!(
            Render::bounded().render(&expr),
            Err(ExprError::MaxDepthExceeded {
                limit: DEFAULT_MAX_DEPTH,
                depth: 200_001
            })
        );
    }

    #[test]
    fn test_node_limit() {
        let expr = Expr::nary_with(
            crate::NAryOp::Add,
            Expr::constant(0),
            (1..10).map(Expr::constant),
        );
        assert_eq!(expr.node_count(), 11);
        assert_eq!(
            Render::new().max_nodes(10).render(&expr),
            Err(ExprError::MaxNodesExceeded {
                limit: 10,
                count: 11
            })
        );
        assert!(Render::bounded().render(&expr).is_ok());
    }

    #[test]
    fn test_render_opt_passes_absence_through() {
        assert_eq!(Render::new().render_opt(None), Ok(None));
        let one = Expr::constant(1);
        assert_eq!(
            Render::new().render_opt(Some(&one)),
            Ok(Some("1".to_string()))
        );
    }
}
