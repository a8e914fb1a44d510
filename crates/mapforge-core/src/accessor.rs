//! Target property accessors.

use bitflags::bitflags;

use crate::TypeRef;

bitflags! {
    /// Which accessor methods a target property exposes.
    ///
    /// ```rust
    /// use mapforge_core::AccessorFlags;
    ///
    /// let bean = AccessorFlags::SETTER | AccessorFlags::GETTER;
    /// assert!(bean.can_merge());
    /// assert!(!AccessorFlags::SETTER.can_merge());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AccessorFlags: u8 {
        /// Mutator method (`setX`)
        const SETTER = 0b0000_0001;
        /// Accessor method (`getX`)
        const GETTER = 0b0000_0010;
        /// Element adder (`addX`)
        const ADDER  = 0b0000_0100;
    }
}

impl AccessorFlags {
    /// Both a mutator and an accessor are present: a pre-existing container
    /// can be read back and merged into.
    pub fn can_merge(self) -> bool {
        self.contains(AccessorFlags::SETTER | AccessorFlags::GETTER)
    }
}

/// A property on the target object as reported by the introspection layer.
#[derive(Debug, Clone)]
pub struct TargetProperty {
    /// Property name (e.g., "tags")
    pub name: String,
    /// Declared property type
    pub ty: TypeRef,
    /// Mutator method name
    pub setter: Option<String>,
    /// Accessor method name
    pub getter: Option<String>,
    /// Element adder method name
    pub adder: Option<String>,
}

impl TargetProperty {
    /// Property with no accessors; add them with the `with_*` methods.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            setter: None,
            getter: None,
            adder: None,
        }
    }

    /// Conventional bean property: `setName` and `getName`.
    pub fn bean(name: impl Into<String>, ty: TypeRef) -> Self {
        let name = name.into();
        let capitalized = capitalize(&name);
        Self {
            setter: Some(format!("set{capitalized}")),
            getter: Some(format!("get{capitalized}")),
            adder: None,
            name,
            ty,
        }
    }

    pub fn with_setter(mut self, setter: impl Into<String>) -> Self {
        self.setter = Some(setter.into());
        self
    }

    pub fn with_getter(mut self, getter: impl Into<String>) -> Self {
        self.getter = Some(getter.into());
        self
    }

    pub fn with_adder(mut self, adder: impl Into<String>) -> Self {
        self.adder = Some(adder.into());
        self
    }

    pub fn without_setter(mut self) -> Self {
        self.setter = None;
        self
    }

    pub fn without_getter(mut self) -> Self {
        self.getter = None;
        self
    }

    /// Accessors present on this property. Empty method names count as absent.
    pub fn accessors(&self) -> AccessorFlags {
        let present = |m: &Option<String>| m.as_deref().is_some_and(|s| !s.is_empty());
        let mut flags = AccessorFlags::empty();
        if present(&self.setter) {
            flags |= AccessorFlags::SETTER;
        }
        if present(&self.getter) {
            flags |= AccessorFlags::GETTER;
        }
        if present(&self.adder) {
            flags |= AccessorFlags::ADDER;
        }
        flags
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
