//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash computed from a fully qualified type name
//! (and, for parameterised types, from the hashes of the type arguments).
//! It is the identity key used everywhere two types or two import symbols
//! must be compared: two descriptors that print the same simple name but
//! live in different packages hash differently.
//!
//! ```
//! use mapforge_core::TypeHash;
//!
//! let set = TypeHash::from_name("java.util.Set");
//! assert_eq!(set, TypeHash::from_name("java.util.Set"));
//! assert_ne!(set, TypeHash::from_name("com.acme.Set"));
//!
//! let string = TypeHash::from_name("java.lang.String");
//! let set_of_string = TypeHash::from_template_instance(set, &[string]);
//! assert_ne!(set, set_of_string);
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Seeds and mixing constants.
pub mod hash_constants {
    /// Seed for hashing qualified names.
    pub const NAME_SEED: u64 = 0x6d61_7066_6f72_6765;

    /// Seed for deriving the per-position argument marker.
    pub const ARG_SEED: u64 = 0x7479_7065_5f61_7267;

    /// Multiplier folding each argument into the running hash.
    pub const FOLD: u64 = 0x9e37_79b9_7f4a_7c15;
}

/// A deterministic 64-bit hash identifying a type.
///
/// The same qualified name always produces the same hash, so descriptors
/// created independently by different parts of the introspection layer
/// still compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    #[inline]
    pub fn from_name(qualified: &str) -> Self {
        TypeHash(xxh64(qualified.as_bytes(), hash_constants::NAME_SEED))
    }

    /// Hash of a parameterised type from its raw type and its arguments.
    ///
    /// Argument order matters: `Map<String, Long>` and `Map<Long, String>`
    /// hash differently.
    #[inline]
    pub fn from_template_instance(raw: TypeHash, args: &[TypeHash]) -> Self {
        let folded = args.iter().enumerate().fold(raw.0, |acc, (position, arg)| {
            let marker = xxh64(&(position as u64).to_le_bytes(), hash_constants::ARG_SEED);
            acc.rotate_left(5).wrapping_mul(hash_constants::FOLD) ^ marker ^ arg.0
        });
        TypeHash(folded)
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:016x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
