//! Variable name management for one generation unit.
//!
//! A `VariableScope` holds every local name already used in a generated
//! method body. Every wrapper that needs a temporary allocates it here, so
//! names stay unique across the whole unit. The scope is borrowed mutably
//! by whoever builds the unit's fragment tree and is never cloned; units
//! generated independently each get their own scope.

use mapforge_core::TypeDescriptor;
use rustc_hash::FxHashSet;

use crate::names::{self, FALLBACK_NAME};

// ============================================================================
// VariableScope
// ============================================================================

/// Used-name set of one generated method body.
#[derive(Debug, Default)]
pub struct VariableScope {
    used: FxHashSet<String>,
}

impl VariableScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self {
            used: FxHashSet::default(),
        }
    }

    /// Create a scope with names already taken (e.g., method parameters).
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            used: names.into_iter().map(Into::into).collect(),
        }
    }

    // ==========================================================================
    // Allocation
    // ==========================================================================

    /// Allocate a unique name derived from `base` and reserve it.
    ///
    /// Returns `base` unchanged if it is free. Otherwise appends the smallest
    /// numeric suffix (starting at 1) that yields a free name. Reserved words
    /// of the generated language count as taken.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn allocate(&mut self, base: &str) -> String {
        let base = if base.is_empty() { FALLBACK_NAME } else { base };

        if !self.is_taken(base) {
            self.used.insert(base.to_string());
            log::debug!("[scope] allocated '{base}'");
            return base.to_string();
        }

        let mut counter: u64 = 1;
        loop {
            let candidate = format!("{base}{counter}");
            if !self.is_taken(&candidate) {
                log::debug!("[scope] allocated '{candidate}' (base '{base}' taken)");
                self.used.insert(candidate.clone());
                return candidate;
            }
            counter += 1;
        }
    }

    /// Allocate a name for a temporary holding a value of type `ty`.
    pub fn allocate_for_type(&mut self, ty: &TypeDescriptor) -> String {
        self.allocate(&names::base_name_for(ty.simple_name()))
    }

    /// Reserve an exact name. Returns false if it was already reserved.
    pub fn reserve(&mut self, name: impl Into<String>) -> bool {
        self.used.insert(name.into())
    }

    // ==========================================================================
    // Queries
    // ==========================================================================

    /// Whether `name` has been reserved in this scope.
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Whether `name` is unusable: reserved here or a reserved word.
    pub fn is_taken(&self, name: &str) -> bool {
        self.used.contains(name) || names::is_reserved_word(name)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Iterate over reserved names (unordered).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }
}

// ============================================================================
// Tests
// ============================================================================
