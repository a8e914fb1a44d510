//! Base-name normalisation for generated local variables.
//!
//! Turns a type's simple name into an identifier-shaped base name, which
//! [`VariableScope::allocate`](crate::VariableScope::allocate) then makes
//! unique.

use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

/// Used when a type name contains no identifier characters at all.
pub const FALLBACK_NAME: &str = "value";

lazy_static! {
    static ref RESERVED_WORDS: FxHashSet<&'static str> = [
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
        "class", "const", "continue", "default", "do", "double", "else", "enum",
        "extends", "final", "finally", "float", "for", "goto", "if", "implements",
        "import", "instanceof", "int", "interface", "long", "native", "new",
        "package", "private", "protected", "public", "return", "short", "static",
        "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
        "transient", "try", "void", "volatile", "while", "true", "false", "null",
        "var", "record", "yield",
    ]
    .into_iter()
    .collect();
}

/// Whether `name` is a reserved word of the generated language.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(name)
}

/// Derive a variable base name from a type name.
///
/// - type arguments are dropped (`Set<String>` → `Set`)
/// - leading non-alphabetic characters are stripped
/// - `[]` becomes `Array`
/// - remaining non-identifier characters are removed
/// - the first character is lower-cased
///
/// ```
/// use mapforge_assign::names::base_name_for;
///
/// assert_eq!(base_name_for("Set"), "set");
/// assert_eq!(base_name_for("String[]"), "stringArray");
/// assert_eq!(base_name_for("_42Order"), "order");
/// ```
pub fn base_name_for(type_name: &str) -> String {
    let raw = type_name.split('<').next().unwrap_or_default();
    let trimmed = raw.trim_start_matches(|c: char| !c.is_alphabetic());
    let cleaned: String = trimmed
        .replace("[]", "Array")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
        .collect();

    if cleaned.is_empty() {
        return FALLBACK_NAME.to_string();
    }
    decapitalize(&cleaned)
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_names_are_decapitalized() {
        assert_eq!(base_name_for("Set"), "set");
        assert_eq!(base_name_for("HashMap"), "hashMap");
        assert_eq!(base_name_for("order"), "order");
    }

    #[test]
    fn type_arguments_are_dropped() {
        assert_eq!(base_name_for("Map<String, Long>"), "map");
    }

    #[test]
    fn arrays_and_junk() {
        assert_eq!(base_name_for("int[]"), "intArray");
        assert_eq!(base_name_for("9Lives"), "lives");
        assert_eq!(base_name_for("Outer.Inner"), "outerInner");
    }

    #[test]
    fn nothing_usable_falls_back() {
        assert_eq!(base_name_for(""), FALLBACK_NAME);
        assert_eq!(base_name_for("123"), FALLBACK_NAME);
        assert_eq!(base_name_for("[]"), FALLBACK_NAME);
    }

    #[test]
    fn reserved_words() {
        assert!(is_reserved_word("package"));
        assert!(is_reserved_word("int"));
        assert!(!is_reserved_word("set"));
    }
}
