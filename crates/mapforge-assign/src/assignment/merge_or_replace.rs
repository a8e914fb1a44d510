//! Merge-or-replace assignment for collection and map properties.
//!
//! Used when the target property has both a mutator and an accessor and the
//! target object may already hold a container. The choice between the two
//! paths is made by the generated code at its run time:
//!
//! ```text
//! Set<String> set = target.getTags();
//! if (set != null) {
//!     set.clear();
//!     set.addAll(<value>);
//! } else {
//!     target.setTags(<replacement or value>);
//! }
//! ```
//!
//! - The accessor is read once into a local so it is never evaluated twice.
//! - The existing container is cleared before the bulk insert, which makes
//!   repeated runs over the same target idempotent.
//! - A missing container is not an error; the replace path covers it.

use mapforge_core::{ImportSet, TypeRef};

use super::{Assignment, Decorator};
use crate::VariableScope;
use crate::expr::{Expr, Stmt};

/// Merges into a pre-existing container, or replaces it when absent.
#[derive(Debug, Clone)]
pub struct MergeOrReplaceWrapper {
    decorated: Box<Assignment>,
    target_setter_name: String,
    target_getter_name: String,
    new_collection_or_map_assignment: Option<Box<Assignment>>,
    target_type: TypeRef,
    local_var_name: String,
}

impl MergeOrReplaceWrapper {
    /// Wrap `decorated` and reserve a local variable name in `existing_variable_names`.
    ///
    /// The caller guarantees that `target_type` is a container and that the
    /// target exposes `target_getter_name`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn new(
        decorated: Assignment,
        target_setter_name: impl Into<String>,
        target_getter_name: impl Into<String>,
        new_collection_or_map_assignment: Option<Assignment>,
        target_type: TypeRef,
        existing_variable_names: &mut VariableScope,
    ) -> Self {
        let target_getter_name = target_getter_name.into();
        debug_assert!(
            target_type.is_container(),
            "merge-or-replace requires a collection or map target, got {target_type}"
        );
        debug_assert!(
            !target_getter_name.is_empty(),
            "merge-or-replace requires a target accessor"
        );

        let local_var_name = existing_variable_names.allocate_for_type(&target_type);

        Self {
            decorated: Box::new(decorated),
            target_setter_name: target_setter_name.into(),
            target_getter_name,
            new_collection_or_map_assignment: new_collection_or_map_assignment.map(Box::new),
            target_type,
            local_var_name,
        }
    }

    pub fn target_getter_name(&self) -> &str {
        &self.target_getter_name
    }

    pub fn target_setter_name(&self) -> &str {
        &self.target_setter_name
    }

    /// Copy construction used on the replace path, if any.
    pub fn new_collection_or_map_assignment(&self) -> Option<&Assignment> {
        self.new_collection_or_map_assignment.as_deref()
    }

    pub fn target_type(&self) -> &TypeRef {
        &self.target_type
    }

    /// Temporary holding the pre-existing container on the merge path.
    pub fn local_var_name(&self) -> &str {
        &self.local_var_name
    }

    /// Bulk-insert method for the target container kind.
    pub fn bulk_insert_method(&self) -> &'static str {
        self.target_type
            .container_kind()
            .bulk_insert_method()
            .unwrap_or("addAll")
    }

    /// Lower to the local read followed by the merge/replace conditional.
    pub fn lower(&self, target: &Expr) -> Vec<Stmt> {
        let local = Expr::var(self.local_var_name.clone());
        let value = self.decorated.value_expr();
        let replacement = self
            .new_collection_or_map_assignment
            .as_ref()
            .map_or_else(|| value.clone(), |a| a.value_expr());

        vec![
            Stmt::Local {
                ty: self.target_type.clone(),
                name: self.local_var_name.clone(),
                init: Expr::getter(target.clone(), self.target_getter_name.clone()),
            },
            Stmt::If {
                cond: Expr::not_null(local.clone()),
                then_branch: vec![
                    Stmt::Expr(Expr::getter(local.clone(), "clear")),
                    Stmt::Expr(Expr::call(local, self.bulk_insert_method(), vec![value])),
                ],
                else_branch: vec![Stmt::Expr(Expr::call(
                    target.clone(),
                    self.target_setter_name.clone(),
                    vec![replacement],
                ))],
            },
        ]
    }
}

impl Decorator for MergeOrReplaceWrapper {
    fn decorated(&self) -> &Assignment {
        &self.decorated
    }

    fn own_imports(&self) -> ImportSet {
        self.new_collection_or_map_assignment
            .as_ref()
            .map(|a| a.import_types())
            .unwrap_or_default()
    }
}
