//! Mapping options consulted when choosing an assignment strategy.

/// How container-typed target properties are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionMappingStrategy {
    /// Use the setter; without one, merge into the container returned by
    /// the accessor. Adders are never used.
    #[default]
    AccessorOnly,
    /// Like `AccessorOnly`, but fall back to an adder when there is neither
    /// setter nor accessor.
    SetterPreferred,
    /// Use the element adder whenever the property has one and the element
    /// type is known.
    AdderPreferred,
    /// The target's containers must not be mutated in place: always set a
    /// fresh container, never merge.
    TargetImmutable,
}

/// When a source presence check guards the assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NullValueCheckStrategy {
    /// Only guard converted or mapped values and containers.
    #[default]
    OnImplicitConversion,
    /// Guard every assignment whose source has a presence check.
    Always,
}

/// Options of one mapping method.
#[derive(Debug, Clone, Default)]
pub struct MappingOptions {
    pub collection_mapping: CollectionMappingStrategy,
    pub null_value_check: NullValueCheckStrategy,
    /// The target object already exists (update method), so its containers
    /// may hold stale content.
    pub update_existing: bool,
}

impl MappingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection_mapping(mut self, strategy: CollectionMappingStrategy) -> Self {
        self.collection_mapping = strategy;
        self
    }

    pub fn with_null_value_check(mut self, strategy: NullValueCheckStrategy) -> Self {
        self.null_value_check = strategy;
        self
    }

    pub fn with_update_existing(mut self, update_existing: bool) -> Self {
        self.update_existing = update_existing;
        self
    }

    /// Options for an update method, which writes into an existing target.
    pub fn update() -> Self {
        Self::default().with_update_existing(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = MappingOptions::new();
        assert_eq!(
            options.collection_mapping,
            CollectionMappingStrategy::AccessorOnly
        );
        assert_eq!(
            options.null_value_check,
            NullValueCheckStrategy::OnImplicitConversion
        );
        assert!(!options.update_existing);
    }

    #[test]
    fn builder_methods() {
        let options = MappingOptions::update()
            .with_collection_mapping(CollectionMappingStrategy::AdderPreferred)
            .with_null_value_check(NullValueCheckStrategy::Always);
        assert!(options.update_existing);
        assert_eq!(
            options.collection_mapping,
            CollectionMappingStrategy::AdderPreferred
        );
        assert_eq!(options.null_value_check, NullValueCheckStrategy::Always);
    }
}
