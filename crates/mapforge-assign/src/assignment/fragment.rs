use mapforge_core::{ImportSet, ImportSymbol, TypeRef};

use super::{Assignment, AssignmentKind};
use crate::expr::Expr;

/// Leaf assignment: a value expression and the imports it requires.
#[derive(Debug, Clone)]
pub struct Fragment {
    expr: Expr,
    kind: AssignmentKind,
    imports: ImportSet,
}

impl Fragment {
    pub fn new(expr: Expr, kind: AssignmentKind) -> Self {
        Self {
            expr,
            kind,
            imports: ImportSet::new(),
        }
    }

    /// The unchanged source value.
    pub fn direct(expr: Expr) -> Self {
        Self::new(expr, AssignmentKind::Direct)
    }

    pub fn with_import(mut self, symbol: ImportSymbol) -> Self {
        self.imports.insert(symbol);
        self
    }

    pub fn with_imports(mut self, imports: &ImportSet) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Copy construction of `container_ty`'s implementation type from the
    /// value of `source`: `new HashSet<String>(<source>)`.
    ///
    /// Carries the implementation type's imports and everything `source`
    /// requires.
    pub fn copy_of(container_ty: &TypeRef, source: &Assignment) -> Self {
        let implementation = container_ty.implementation_type();
        let mut imports = implementation.required_imports();
        imports.extend(&source.import_types());
        Self {
            expr: Expr::new_instance(implementation, vec![source.value_expr()]),
            kind: AssignmentKind::TypeConverted,
            imports,
        }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn kind(&self) -> AssignmentKind {
        self.kind
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapforge_core::TypeDescriptor;

    #[test]
    fn copy_of_uses_implementation_type() {
        let order = TypeDescriptor::declared("com.acme.Order");
        let list = TypeDescriptor::generic("java.util.List", vec![order]);
        let source: Assignment = Fragment::direct(Expr::getter(Expr::var("source"), "getOrders"))
            .with_import(ImportSymbol::from("com.acme.source.Marker"))
            .into();

        let copy = Fragment::copy_of(&list, &source);
        assert_eq!(
            copy.expr().to_string(),
            "new ArrayList<Order>(source.getOrders())"
        );
        assert_eq!(copy.kind(), AssignmentKind::TypeConverted);

        let imports = copy.imports();
        assert!(imports.contains_name("java.util.ArrayList"));
        assert!(imports.contains_name("com.acme.Order"));
        assert!(imports.contains_name("com.acme.source.Marker"));
        assert!(!imports.contains_name("java.util.List"));
    }

    #[test]
    fn with_imports_deduplicates() {
        let fragment = Fragment::direct(Expr::var("x"))
            .with_import(ImportSymbol::from("java.util.Set"))
            .with_imports(&TypeDescriptor::declared("java.util.Set").required_imports());
        assert_eq!(fragment.imports().len(), 1);
    }
}
