//! Core types for the mapforge assignment layer.
//!
//! This crate is the boundary to the type-introspection layer:
//!
//! - [`TypeHash`]: deterministic identity of types and import symbols
//! - [`QualifiedName`]: dotted type names
//! - [`TypeDescriptor`]: immutable type descriptions, shared as [`TypeRef`]
//! - [`ImportSet`]: identity-deduplicated sets of [`ImportSymbol`]
//! - [`TargetProperty`] / [`AccessorFlags`]: what a target property exposes
//! - [`AssignmentError`]: selection failures

mod accessor;
pub mod error;
mod import;
mod qualified_name;
mod type_descriptor;
pub mod type_hash;

pub use accessor::{AccessorFlags, TargetProperty};
pub use error::AssignmentError;
pub use import::{ImportSet, ImportSymbol};
pub use qualified_name::QualifiedName;
pub use type_descriptor::{ContainerKind, TypeDescriptor, TypeRef};
pub use type_hash::TypeHash;
