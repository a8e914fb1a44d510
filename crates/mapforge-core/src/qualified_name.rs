use std::fmt;

/// Fully qualified name of a type in the generated language.
///
/// Used as the source of type identity: [`TypeHash`](crate::TypeHash) is
/// computed from the dotted form.
///
/// # Examples
///
/// ```
/// use mapforge_core::QualifiedName;
///
/// let set = QualifiedName::from_qualified_string("java.util.Set");
/// assert_eq!(set.simple_name(), "Set");
/// assert_eq!(set.package_string(), "java.util");
/// assert_eq!(set.to_string(), "java.util.Set");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    /// Package path (e.g., ["java", "util"])
    /// Empty for the default package
    pub package: Vec<String>,
    /// Simple name (e.g., "Set")
    pub name: String,
}

impl QualifiedName {
    /// Create a new qualified name inside a package.
    pub fn new(name: impl Into<String>, package: Vec<String>) -> Self {
        Self {
            package,
            name: name.into(),
        }
    }

    /// Create a name in the default (unnamed) package.
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            package: Vec::new(),
            name: name.into(),
        }
    }

    /// Parse a dotted name (e.g., "java.util.Set").
    ///
    /// The last segment is the simple name, the rest is the package.
    /// Empty segments are ignored, so "java..util.Set" == "java.util.Set".
    pub fn from_qualified_string(s: &str) -> Self {
        let mut parts: Vec<String> = s
            .split('.')
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        match parts.pop() {
            Some(name) => Self {
                package: parts,
                name,
            },
            None => Self::unqualified(""),
        }
    }

    /// Get the simple (unqualified) name.
    pub fn simple_name(&self) -> &str {
        &self.name
    }

    /// Get the package path.
    pub fn package(&self) -> &[String] {
        &self.package
    }

    /// Get the package as a dotted string.
    pub fn package_string(&self) -> String {
        self.package.join(".")
    }

    /// Check if this name lives in the default package.
    pub fn is_unqualified(&self) -> bool {
        self.package.is_empty()
    }

    /// Names that never need an import statement: the default package and
    /// `java.lang` itself (but not its subpackages).
    pub fn is_implicitly_imported(&self) -> bool {
        match self.package.as_slice() {
            [] => true,
            [java, lang] => java == "java" && lang == "lang",
            _ => false,
        }
    }

    /// Compute the identity hash from this qualified name.
    pub fn to_type_hash(&self) -> crate::TypeHash {
        crate::TypeHash::from_name(&self.to_string())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package_string(), self.name)
        }
    }
}

impl From<&str> for QualifiedName {
    fn from(s: &str) -> Self {
        Self::from_qualified_string(s)
    }
}

impl From<String> for QualifiedName {
    fn from(s: String) -> Self {
        Self::from_qualified_string(&s)
    }
}
