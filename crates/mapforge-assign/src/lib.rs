//! Assignment construction for generated mapping code.
//!
//! This crate builds the code that writes a source value into a target
//! property. Upstream builders supply a value [`Fragment`]; the
//! [`AssignmentBuilder`] picks how it is committed to the target and stacks
//! the matching wrappers around it. The finished [`Assignment`] reports the
//! imports it needs and lowers to an explicit statement tree.
//!
//! # Example
//!
//! ```rust
//! use mapforge_assign::{
//!     AssignmentBuilder, Expr, Fragment, MappingOptions, SourceRhs, VariableScope, render,
//! };
//! use mapforge_core::{TargetProperty, TypeDescriptor};
//!
//! let tags = TypeDescriptor::generic(
//!     "java.util.Set",
//!     vec![TypeDescriptor::declared("java.lang.String")],
//! );
//! let property = TargetProperty::bean("tags", tags);
//!
//! let mut scope = VariableScope::from_names(["source", "target"]);
//! let options = MappingOptions::update();
//! let mut builder = AssignmentBuilder::new(&mut scope, &options);
//!
//! let value = Fragment::direct(Expr::getter(Expr::var("source"), "getTags"));
//! let assignment = builder.build(&property, SourceRhs::new(value)).unwrap();
//!
//! let code = render(&assignment.lower(&Expr::var("target")));
//! assert!(code.starts_with("Set<String> set = target.getTags();"));
//! assert!(assignment.import_types().contains_name("java.util.HashSet"));
//! ```

pub mod assignment;
pub mod builder;
pub mod expr;
pub mod names;
pub mod options;
pub mod scope;

pub use assignment::{
    AdderWrapper, Assignment, AssignmentKind, CastWrapper, Decorator, Fragment,
    GetterMergeWrapper, MergeOrReplaceWrapper, NullCheckWrapper, SetterWrapper,
};
pub use builder::{AssignmentBuilder, SourceRhs, WriteStrategy, select_strategy};
pub use expr::{Expr, Stmt, render};
pub use options::{CollectionMappingStrategy, MappingOptions, NullValueCheckStrategy};
pub use scope::VariableScope;
