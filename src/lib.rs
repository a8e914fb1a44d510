//! mapforge: assignment construction for generated object-mapping code.
//!
//! The workspace is split in two layers:
//!
//! - [`mapforge_core`]: type descriptors, qualified names, import
//!   sets and target property accessors.
//! - [`mapforge_assign`]: variable naming, the assignment node and
//!   its wrappers, lowering, and strategy selection.
//!
//! Most users only need the [`prelude`].

pub use mapforge_assign;
pub use mapforge_core;

pub mod prelude {
    pub use mapforge_assign::{
        AdderWrapper, Assignment, AssignmentBuilder, AssignmentKind, CastWrapper,
        CollectionMappingStrategy, Decorator, Expr, Fragment, GetterMergeWrapper, MappingOptions,
        MergeOrReplaceWrapper, NullCheckWrapper, NullValueCheckStrategy, SetterWrapper,
        SourceRhs, Stmt, VariableScope, WriteStrategy, render,
    };
    pub use mapforge_core::{
        AccessorFlags, AssignmentError, ContainerKind, ImportSet, ImportSymbol, QualifiedName,
        TargetProperty, TypeDescriptor, TypeHash, TypeRef,
    };
}
