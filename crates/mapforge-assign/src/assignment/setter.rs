use super::{Assignment, Decorator};
use crate::expr::{Expr, Stmt};

/// Writes the wrapped value through the target's mutator method.
#[derive(Debug, Clone)]
pub struct SetterWrapper {
    decorated: Box<Assignment>,
    setter_name: String,
}

impl SetterWrapper {
    pub fn new(decorated: Assignment, setter_name: impl Into<String>) -> Self {
        Self {
            decorated: Box::new(decorated),
            setter_name: setter_name.into(),
        }
    }

    pub fn setter_name(&self) -> &str {
        &self.setter_name
    }

    pub fn lower(&self, target: &Expr) -> Vec<Stmt> {
        vec![Stmt::Expr(Expr::call(
            target.clone(),
            self.setter_name.clone(),
            vec![self.decorated.value_expr()],
        ))]
    }
}

impl Decorator for SetterWrapper {
    fn decorated(&self) -> &Assignment {
        &self.decorated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::Fragment;

    #[test]
    fn lowers_to_setter_call() {
        let setter = SetterWrapper::new(Fragment::direct(Expr::var("name")).into(), "setName");
        assert_eq!(setter.setter_name(), "setName");

        let stmts = setter.lower(&Expr::var("target"));
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].to_string(), "target.setName(name);");
    }
}
