//! Import symbols and identity-deduplicated import sets.
//!
//! Every fragment of generated code reports the type imports it needs.
//! Wrappers union the sets of their inner fragments, so the set type
//! must deduplicate by type identity ([`TypeHash`] of the qualified name),
//! never by display name: `com.a.Item` and `com.b.Item` are two imports.

use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;

use crate::{QualifiedName, TypeHash};

/// A single importable symbol.
///
/// Equality and hashing use only the identity hash.
#[derive(Debug, Clone)]
pub struct ImportSymbol {
    name: QualifiedName,
    hash: TypeHash,
}

impl ImportSymbol {
    pub fn new(name: QualifiedName) -> Self {
        let hash = name.to_type_hash();
        Self { name, hash }
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn type_hash(&self) -> TypeHash {
        self.hash
    }
}

impl PartialEq for ImportSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for ImportSymbol {}

impl Hash for ImportSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Display for ImportSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for ImportSymbol {
    fn from(s: &str) -> Self {
        Self::new(QualifiedName::from_qualified_string(s))
    }
}

/// An unordered set of imports, deduplicated by type identity.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    symbols: FxHashMap<TypeHash, ImportSymbol>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symbol. Returns false if an identical symbol was present.
    pub fn insert(&mut self, symbol: ImportSymbol) -> bool {
        match self.symbols.entry(symbol.type_hash()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(symbol);
                true
            }
        }
    }

    /// Add every symbol of `other` to this set.
    pub fn extend(&mut self, other: &ImportSet) {
        for symbol in other.iter() {
            self.insert(symbol.clone());
        }
    }

    pub fn contains(&self, symbol: &ImportSymbol) -> bool {
        self.symbols.contains_key(&symbol.type_hash())
    }

    /// Check membership by dotted name.
    pub fn contains_name(&self, qualified: &str) -> bool {
        self.symbols.contains_key(&TypeHash::from_name(qualified))
    }

    /// True when every symbol of `other` is also in this set.
    pub fn is_superset(&self, other: &ImportSet) -> bool {
        other.iter().all(|s| self.contains(s))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImportSymbol> {
        self.symbols.values()
    }

    /// Symbols ordered by qualified name, for deterministic output.
    pub fn sorted(&self) -> Vec<&ImportSymbol> {
        let mut out: Vec<_> = self.symbols.values().collect();
        out.sort_by(|a, b| a.name().cmp(b.name()));
        out
    }
}

impl FromIterator<ImportSymbol> for ImportSet {
    fn from_iter<I: IntoIterator<Item = ImportSymbol>>(iter: I) -> Self {
        let mut set = ImportSet::new();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

impl PartialEq for ImportSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_superset(other)
    }
}

impl Eq for ImportSet {}
