use mapforge_core::{ImportSet, TypeRef};

use super::{Assignment, Decorator};
use crate::expr::Expr;

/// Casts the wrapped value to a target type.
#[derive(Debug, Clone)]
pub struct CastWrapper {
    decorated: Box<Assignment>,
    ty: TypeRef,
}

impl CastWrapper {
    pub fn new(decorated: Assignment, ty: TypeRef) -> Self {
        Self {
            decorated: Box::new(decorated),
            ty,
        }
    }

    pub fn cast_type(&self) -> &TypeRef {
        &self.ty
    }

    pub fn value_expr(&self) -> Expr {
        Expr::cast(self.ty.clone(), self.decorated.value_expr())
    }
}

impl Decorator for CastWrapper {
    fn decorated(&self) -> &Assignment {
        &self.decorated
    }

    fn own_imports(&self) -> ImportSet {
        self.ty.required_imports()
    }
}
