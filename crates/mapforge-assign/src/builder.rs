//! Property-level strategy selection.
//!
//! Given a target property and the value computed for it upstream,
//! [`AssignmentBuilder`] decides how the value is committed to the target
//! and builds the corresponding wrapper chain. All preconditions of the
//! wrappers are checked here, before any of them is constructed: a failed
//! selection never reserves a variable name.

use mapforge_core::{AccessorFlags, AssignmentError, TargetProperty, TypeRef};

use crate::VariableScope;
use crate::assignment::{
    AdderWrapper, Assignment, AssignmentKind, Fragment, GetterMergeWrapper, MergeOrReplaceWrapper,
    NullCheckWrapper, SetterWrapper,
};
use crate::expr::Expr;
use crate::options::{CollectionMappingStrategy, MappingOptions, NullValueCheckStrategy};

/// The value computed for a target property.
#[derive(Debug, Clone)]
pub struct SourceRhs {
    value: Assignment,
    presence_check: Option<Expr>,
}

impl SourceRhs {
    pub fn new(value: impl Into<Assignment>) -> Self {
        Self {
            value: value.into(),
            presence_check: None,
        }
    }

    /// Condition under which the source value is present (e.g., `source.getTags() != null`).
    pub fn with_presence_check(mut self, check: Expr) -> Self {
        self.presence_check = Some(check);
        self
    }

    pub fn value(&self) -> &Assignment {
        &self.value
    }

    pub fn presence_check(&self) -> Option<&Expr> {
        self.presence_check.as_ref()
    }
}

/// How a value will be written, decided before anything is built.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteStrategy {
    /// Iterate the source and call the element adder.
    Adder { adder: String, element: TypeRef },
    /// Merge into the existing container, or replace it when absent.
    MergeOrReplace { setter: String, getter: String },
    /// Call the setter; `copy` wraps the value in a container copy.
    Setter { setter: String, copy: bool },
    /// Merge into the container returned by the accessor.
    GetterMerge { getter: String },
}

/// Choose a write strategy for `property`.
///
/// Pure: inspects the property and options only.
pub fn select_strategy(
    property: &TargetProperty,
    options: &MappingOptions,
    kind: AssignmentKind,
) -> Result<WriteStrategy, AssignmentError> {
    let flags = property.accessors();
    let ty = &property.ty;
    let strategy = options.collection_mapping;
    let setter = || property.setter.clone().unwrap_or_default();
    let getter = || property.getter.clone().unwrap_or_default();
    let adder = || property.adder.clone().unwrap_or_default();

    if !ty.is_container() {
        if flags.contains(AccessorFlags::SETTER) {
            return Ok(WriteStrategy::Setter {
                setter: setter(),
                copy: false,
            });
        }
        if flags.contains(AccessorFlags::GETTER) {
            return Err(AssignmentError::ContainerAccessorRequired {
                property: property.name.clone(),
                ty: ty.to_string(),
            });
        }
        return Err(AssignmentError::NoWriteAccessor {
            property: property.name.clone(),
        });
    }

    let adder_strategy = || match ty.element_type() {
        Some(element) => Ok(WriteStrategy::Adder {
            adder: adder(),
            element: element.clone(),
        }),
        None => Err(AssignmentError::MissingElementType {
            property: property.name.clone(),
            ty: ty.to_string(),
        }),
    };

    let has_adder = flags.contains(AccessorFlags::ADDER);

    // An adder needs an element type; without one the setter rules still apply.
    if strategy == CollectionMappingStrategy::AdderPreferred
        && has_adder
        && ty.element_type().is_some()
    {
        return adder_strategy();
    }

    if flags.contains(AccessorFlags::SETTER) {
        if options.update_existing
            && flags.can_merge()
            && strategy != CollectionMappingStrategy::TargetImmutable
        {
            return Ok(WriteStrategy::MergeOrReplace {
                setter: setter(),
                getter: getter(),
            });
        }
        return Ok(WriteStrategy::Setter {
            setter: setter(),
            copy: kind.is_direct(),
        });
    }

    if flags.contains(AccessorFlags::GETTER) && strategy != CollectionMappingStrategy::TargetImmutable
    {
        return Ok(WriteStrategy::GetterMerge { getter: getter() });
    }

    if has_adder
        && matches!(
            strategy,
            CollectionMappingStrategy::SetterPreferred | CollectionMappingStrategy::AdderPreferred
        )
    {
        return adder_strategy();
    }

    Err(AssignmentError::NoWriteAccessor {
        property: property.name.clone(),
    })
}

/// Builds assignment chains for the properties of one generation unit.
pub struct AssignmentBuilder<'a> {
    scope: &'a mut VariableScope,
    options: &'a MappingOptions,
}

impl<'a> AssignmentBuilder<'a> {
    pub fn new(scope: &'a mut VariableScope, options: &'a MappingOptions) -> Self {
        Self { scope, options }
    }

    pub fn scope(&self) -> &VariableScope {
        &*self.scope
    }

    pub fn options(&self) -> &MappingOptions {
        self.options
    }

    /// Build the assignment writing `source` into `property`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn build(
        &mut self,
        property: &TargetProperty,
        source: SourceRhs,
    ) -> Result<Assignment, AssignmentError> {
        let SourceRhs {
            value,
            presence_check,
        } = source;
        let kind = value.kind();
        let strategy = select_strategy(property, self.options, kind)?;
        log::debug!(
            "[assign] property '{}' ({}) -> {:?}",
            property.name,
            property.ty,
            strategy
        );

        let ty = &property.ty;
        let assignment: Assignment = match strategy {
            WriteStrategy::Adder { adder, element } => {
                AdderWrapper::new(value, adder, element, self.scope).into()
            }
            WriteStrategy::MergeOrReplace { setter, getter } => {
                let replacement: Option<Assignment> = kind
                    .is_direct()
                    .then(|| Fragment::copy_of(ty, &value).into());
                MergeOrReplaceWrapper::new(value, setter, getter, replacement, ty.clone(), self.scope)
                    .into()
            }
            WriteStrategy::Setter { setter, copy } => {
                let written: Assignment = if copy {
                    Fragment::copy_of(ty, &value).into()
                } else {
                    value
                };
                SetterWrapper::new(written, setter).into()
            }
            WriteStrategy::GetterMerge { getter } => GetterMergeWrapper::new(
                value,
                getter,
                ty.clone(),
                self.options.update_existing,
                self.scope,
            )
            .into(),
        };

        Ok(match presence_check {
            Some(check) if self.needs_null_check(kind, ty) => {
                log::debug!("[assign] property '{}' guarded by '{}'", property.name, check);
                NullCheckWrapper::new(assignment, check).into()
            }
            _ => assignment,
        })
    }

    fn needs_null_check(&self, kind: AssignmentKind, ty: &TypeRef) -> bool {
        self.options.null_value_check == NullValueCheckStrategy::Always
            || !kind.is_direct()
            || ty.is_container()
    }
}
