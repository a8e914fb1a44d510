//! Type descriptors supplied by the introspection layer.
//!
//! A [`TypeDescriptor`] is immutable once built and is shared between
//! assignment nodes through [`TypeRef`]. It knows its qualified name, its
//! type arguments, whether it is a container (and which kind), and which
//! imports are needed to reference it in generated code.
//!
//! # Example
//!
//! ```
//! use mapforge_core::{ContainerKind, TypeDescriptor};
//!
//! let string = TypeDescriptor::declared("java.lang.String");
//! let set = TypeDescriptor::generic("java.util.Set", vec![string]);
//!
//! assert_eq!(set.container_kind(), ContainerKind::Sequence);
//! assert_eq!(set.to_string(), "Set<String>");
//! assert!(set.required_imports().contains_name("java.util.Set"));
//! assert!(!set.required_imports().contains_name("java.lang.String"));
//! ```

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::{ImportSet, ImportSymbol, QualifiedName, TypeHash};

/// Shared handle to an immutable type descriptor.
pub type TypeRef = Arc<TypeDescriptor>;

/// Container classification of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainerKind {
    /// Not a container.
    #[default]
    None,
    /// Ordered or unordered collection of elements (list, set, queue).
    Sequence,
    /// Key-value associative mapping.
    Map,
}

impl ContainerKind {
    pub fn is_container(self) -> bool {
        !matches!(self, ContainerKind::None)
    }

    /// Name of the bulk-insert method on a container of this kind.
    pub fn bulk_insert_method(self) -> Option<&'static str> {
        match self {
            ContainerKind::Sequence => Some("addAll"),
            ContainerKind::Map => Some("putAll"),
            ContainerKind::None => None,
        }
    }
}

/// Static classification of a well-known container type.
struct KnownContainer {
    kind: ContainerKind,
    /// Concrete type used for copy construction.
    implementation: &'static str,
}

lazy_static! {
    static ref KNOWN_CONTAINERS: FxHashMap<&'static str, KnownContainer> = {
        use ContainerKind::{Map, Sequence};
        let entries: [(&str, ContainerKind, &str); 19] = [
            ("java.util.Collection", Sequence, "java.util.ArrayList"),
            ("java.util.List", Sequence, "java.util.ArrayList"),
            ("java.util.ArrayList", Sequence, "java.util.ArrayList"),
            ("java.util.LinkedList", Sequence, "java.util.LinkedList"),
            ("java.util.Set", Sequence, "java.util.HashSet"),
            ("java.util.HashSet", Sequence, "java.util.HashSet"),
            ("java.util.LinkedHashSet", Sequence, "java.util.LinkedHashSet"),
            ("java.util.SortedSet", Sequence, "java.util.TreeSet"),
            ("java.util.NavigableSet", Sequence, "java.util.TreeSet"),
            ("java.util.TreeSet", Sequence, "java.util.TreeSet"),
            ("java.util.Queue", Sequence, "java.util.ArrayDeque"),
            ("java.util.Deque", Sequence, "java.util.ArrayDeque"),
            ("java.util.Map", Map, "java.util.HashMap"),
            ("java.util.HashMap", Map, "java.util.HashMap"),
            ("java.util.LinkedHashMap", Map, "java.util.LinkedHashMap"),
            ("java.util.SortedMap", Map, "java.util.TreeMap"),
            ("java.util.NavigableMap", Map, "java.util.TreeMap"),
            ("java.util.TreeMap", Map, "java.util.TreeMap"),
            (
                "java.util.concurrent.ConcurrentMap",
                Map,
                "java.util.concurrent.ConcurrentHashMap",
            ),
        ];
        entries
            .into_iter()
            .map(|(name, kind, implementation)| (name, KnownContainer { kind, implementation }))
            .collect()
    };
}

const PRIMITIVES: [&str; 8] = [
    "boolean", "byte", "short", "int", "long", "char", "float", "double",
];

/// Description of a type in the generated language.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: QualifiedName,
    type_args: Vec<TypeRef>,
    container: ContainerKind,
    primitive: bool,
    hash: TypeHash,
}

impl TypeDescriptor {
    /// Build a descriptor with explicit container classification.
    pub fn new(
        name: QualifiedName,
        type_args: Vec<TypeRef>,
        container: ContainerKind,
    ) -> Self {
        let primitive = name.is_unqualified() && PRIMITIVES.contains(&name.simple_name());
        let raw = name.to_type_hash();
        let hash = if type_args.is_empty() {
            raw
        } else {
            let args: Vec<TypeHash> = type_args.iter().map(|t| t.hash).collect();
            TypeHash::from_template_instance(raw, &args)
        };
        Self {
            name,
            type_args,
            container,
            primitive,
            hash,
        }
    }

    /// Descriptor for a non-generic type. Well-known containers are classified
    /// automatically.
    pub fn declared(qualified: &str) -> TypeRef {
        Self::generic(qualified, Vec::new())
    }

    /// Descriptor for a parameterised type. Well-known containers are
    /// classified automatically.
    pub fn generic(qualified: &str, type_args: Vec<TypeRef>) -> TypeRef {
        let container = KNOWN_CONTAINERS
            .get(qualified)
            .map(|k| k.kind)
            .unwrap_or_default();
        Arc::new(Self::new(
            QualifiedName::from_qualified_string(qualified),
            type_args,
            container,
        ))
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    pub fn type_args(&self) -> &[TypeRef] {
        &self.type_args
    }

    pub fn container_kind(&self) -> ContainerKind {
        self.container
    }

    pub fn is_container(&self) -> bool {
        self.container.is_container()
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive
    }

    /// Identity hash including type arguments.
    pub fn type_hash(&self) -> TypeHash {
        self.hash
    }

    /// Element type of a sequence, if it is parameterised.
    pub fn element_type(&self) -> Option<&TypeRef> {
        match self.container {
            ContainerKind::Sequence => self.type_args.first(),
            _ => None,
        }
    }

    /// Imports needed to reference this type, including its type arguments.
    pub fn required_imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        self.collect_imports(&mut imports);
        imports
    }

    fn collect_imports(&self, imports: &mut ImportSet) {
        if !self.primitive && !self.name.is_implicitly_imported() {
            imports.insert(ImportSymbol::new(self.name.clone()));
        }
        for arg in &self.type_args {
            arg.collect_imports(imports);
        }
    }

    /// Concrete type used to copy-construct a container of this type.
    ///
    /// Interfaces map to their default implementation with the same type
    /// arguments. Unknown types (including concrete user containers) map to
    /// themselves.
    pub fn implementation_type(self: &Arc<Self>) -> TypeRef {
        let qualified = self.name.to_string();
        match KNOWN_CONTAINERS.get(qualified.as_str()) {
            Some(known) if known.implementation != qualified => Arc::new(Self::new(
                QualifiedName::from_qualified_string(known.implementation),
                self.type_args.clone(),
                known.kind,
            )),
            _ => Arc::clone(self),
        }
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.simple_name())?;
        if !self.type_args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.type_args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}
