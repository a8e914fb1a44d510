use mapforge_core::TypeRef;

use super::{Assignment, Decorator};
use crate::VariableScope;
use crate::expr::{Expr, Stmt};

/// Merges into the container returned by the accessor when the target
/// property has no mutator.
///
/// ```text
/// List<Item> list = target.getItems();
/// if (list != null) {
///     list.clear();            // update methods only
///     list.addAll(<value>);
/// }
/// ```
///
/// There is no replace path: without a mutator a missing container cannot
/// be supplied, so nothing is written.
#[derive(Debug, Clone)]
pub struct GetterMergeWrapper {
    decorated: Box<Assignment>,
    target_getter_name: String,
    target_type: TypeRef,
    local_var_name: String,
    clear_existing: bool,
}

impl GetterMergeWrapper {
    pub fn new(
        decorated: Assignment,
        target_getter_name: impl Into<String>,
        target_type: TypeRef,
        clear_existing: bool,
        existing_variable_names: &mut VariableScope,
    ) -> Self {
        debug_assert!(
            target_type.is_container(),
            "getter merge requires a collection or map target, got {target_type}"
        );
        let local_var_name = existing_variable_names.allocate_for_type(&target_type);
        Self {
            decorated: Box::new(decorated),
            target_getter_name: target_getter_name.into(),
            target_type,
            local_var_name,
            clear_existing,
        }
    }

    pub fn target_getter_name(&self) -> &str {
        &self.target_getter_name
    }

    pub fn target_type(&self) -> &TypeRef {
        &self.target_type
    }

    pub fn local_var_name(&self) -> &str {
        &self.local_var_name
    }

    pub fn clears_existing(&self) -> bool {
        self.clear_existing
    }

    pub fn lower(&self, target: &Expr) -> Vec<Stmt> {
        let local = Expr::var(self.local_var_name.clone());
        let bulk = self
            .target_type
            .container_kind()
            .bulk_insert_method()
            .unwrap_or("addAll");

        let mut merge = Vec::with_capacity(2);
        if self.clear_existing {
            merge.push(Stmt::Expr(Expr::getter(local.clone(), "clear")));
        }
        merge.push(Stmt::Expr(Expr::call(
            local.clone(),
            bulk,
            vec![self.decorated.value_expr()],
        )));

        vec![
            Stmt::Local {
                ty: self.target_type.clone(),
                name: self.local_var_name.clone(),
                init: Expr::getter(target.clone(), self.target_getter_name.clone()),
            },
            Stmt::If {
                cond: Expr::not_null(local),
                then_branch: merge,
                else_branch: Vec::new(),
            },
        ]
    }
}

impl Decorator for GetterMergeWrapper {
    fn decorated(&self) -> &Assignment {
        &self.decorated
    }
}
