//! Structural queries over a tree: size, depth and the variables it mentions.

use rustc_hash::FxHashSet;

use super::{Expr, ExprKind};

impl Expr {
    /// Total number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            count += 1;
            stack.extend(expr.children());
        }
        count
    }

    /// Length of the longest root-to-leaf path (a leaf has depth 1)
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(expr.children().into_iter().map(|c| (c, depth + 1)));
        }
        deepest
    }

    /// Distinct variable names in this subtree, sorted
    pub fn variable_names(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        collect_names(self, &mut seen);
        let mut names: Vec<String> = seen.into_iter().map(str::to_string).collect();
        names.sort_unstable();
        names
    }
}

fn collect_names<'a>(root: &'a Expr, seen: &mut FxHashSet<&'a str>) {
    let mut stack = vec![root];
    while let Some(expr) = stack.pop() {
        if let ExprKind::Variable(v) = &expr.kind {
            seen.insert(v.name());
        }
        stack.extend(expr.children());
    }
}
