//! Error types for assignment construction.
//!
//! Wrapper constructors are infallible: their preconditions are the
//! caller's responsibility. The errors here are raised by the property-level
//! selector, which is that caller and checks the preconditions before any
//! wrapper is built.

use thiserror::Error;

/// Errors raised while choosing how to write a value into a target property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The property exposes no way to write a value.
    #[error("target property '{property}' has no setter, adder or accessor to write through")]
    NoWriteAccessor { property: String },

    /// Only an accessor is available, which is only usable for containers.
    #[error("target property '{property}' of type '{ty}' has only an accessor, which requires a collection or map type")]
    ContainerAccessorRequired { property: String, ty: String },

    /// An adder was selected but the element type cannot be determined.
    #[error("cannot use adder for target property '{property}': '{ty}' has no element type")]
    MissingElementType { property: String, ty: String },
}

impl AssignmentError {
    /// Name of the property the error refers to.
    pub fn property(&self) -> &str {
        match self {
            AssignmentError::NoWriteAccessor { property } => property,
            AssignmentError::ContainerAccessorRequired { property, .. } => property,
            AssignmentError::MissingElementType { property, .. } => property,
        }
    }
}
