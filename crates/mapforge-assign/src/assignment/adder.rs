use mapforge_core::{ImportSet, TypeRef};

use super::{Assignment, Decorator};
use crate::VariableScope;
use crate::expr::{Expr, Stmt};

/// Adds the elements of the wrapped value one by one through an adder.
///
/// ```text
/// for (Item item : <value>) {
///     target.addItem(item);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdderWrapper {
    decorated: Box<Assignment>,
    adder_name: String,
    element_type: TypeRef,
    loop_var_name: String,
}

impl AdderWrapper {
    /// Wrap `decorated` and reserve the loop variable in `existing_variable_names`.
    pub fn new(
        decorated: Assignment,
        adder_name: impl Into<String>,
        element_type: TypeRef,
        existing_variable_names: &mut VariableScope,
    ) -> Self {
        let loop_var_name = existing_variable_names.allocate_for_type(&element_type);
        Self {
            decorated: Box::new(decorated),
            adder_name: adder_name.into(),
            element_type,
            loop_var_name,
        }
    }

    pub fn adder_name(&self) -> &str {
        &self.adder_name
    }

    pub fn element_type(&self) -> &TypeRef {
        &self.element_type
    }

    pub fn loop_var_name(&self) -> &str {
        &self.loop_var_name
    }

    pub fn lower(&self, target: &Expr) -> Vec<Stmt> {
        vec![Stmt::ForEach {
            elem_ty: self.element_type.clone(),
            var: self.loop_var_name.clone(),
            iterable: self.decorated.value_expr(),
            body: vec![Stmt::Expr(Expr::call(
                target.clone(),
                self.adder_name.clone(),
                vec![Expr::var(self.loop_var_name.clone())],
            ))],
        }]
    }
}

impl Decorator for AdderWrapper {
    fn decorated(&self) -> &Assignment {
        &self.decorated
    }

    /// The loop declares a variable of the element type.
    fn own_imports(&self) -> ImportSet {
        self.element_type.required_imports()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::Fragment;
    use crate::expr::render;
    use mapforge_core::TypeDescriptor;

    #[test]
    fn lowers_to_loop_over_value() {
        let item = TypeDescriptor::declared("com.acme.Item");
        let mut scope = VariableScope::from_names(["item"]);
        let w = AdderWrapper::new(
            Fragment::direct(Expr::getter(Expr::var("source"), "getItems")).into(),
            "addItem",
            item,
            &mut scope,
        );

        assert_eq!(w.loop_var_name(), "item1");
        assert_eq!(w.adder_name(), "addItem");
        assert_eq!(
            render(&w.lower(&Expr::var("target"))),
            "for (Item item1 : source.getItems()) {\n    target.addItem(item1);\n}\n"
        );
        assert!(w.import_types().contains_name("com.acme.Item"));
        assert_eq!(w.element_type().simple_name(), "Item");
    }
}
