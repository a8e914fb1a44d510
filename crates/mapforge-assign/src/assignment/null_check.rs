use super::{Assignment, Decorator};
use crate::expr::{Expr, Stmt};

/// Guards the wrapped assignment with a source presence check.
///
/// Lowers to `if (<presence>) { <inner> }`; nothing is written when the
/// check fails, so a pre-existing target value is left alone.
#[derive(Debug, Clone)]
pub struct NullCheckWrapper {
    decorated: Box<Assignment>,
    presence: Expr,
}

impl NullCheckWrapper {
    /// Guard with an arbitrary presence condition (e.g., `source.hasTags()`).
    pub fn new(decorated: Assignment, presence: Expr) -> Self {
        Self {
            decorated: Box::new(decorated),
            presence,
        }
    }

    /// Guard with `<checked> != null`.
    pub fn not_null(decorated: Assignment, checked: Expr) -> Self {
        Self::new(decorated, Expr::not_null(checked))
    }

    pub fn presence(&self) -> &Expr {
        &self.presence
    }

    pub fn lower(&self, target: &Expr) -> Vec<Stmt> {
        vec![Stmt::If {
            cond: self.presence.clone(),
            then_branch: self.decorated.lower(target),
            else_branch: Vec::new(),
        }]
    }
}

impl Decorator for NullCheckWrapper {
    fn decorated(&self) -> &Assignment {
        &self.decorated
    }
}
