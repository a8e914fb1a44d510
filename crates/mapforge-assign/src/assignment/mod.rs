//! Assignment fragments and the wrappers that decorate them.
//!
//! An [`Assignment`] is "an expression plus the imports it requires". The
//! leaf is a [`Fragment`] supplied by upstream builders; every other variant
//! is a wrapper that owns exactly one inner node and decides how that value
//! is committed to the target (plain setter, merge-or-replace, adder loop)
//! or guarded (null check) or converted (cast).
//!
//! Wrappers stack by ownership, never by copying:
//!
//! ```text
//! NullCheck
//! └── MergeOrReplace ─── replacement: Fragment (new HashSet<>(..))
//!     └── Cast
//!         └── Fragment (source.getTags())
//! ```
//!
//! Imports are aggregated on demand through the [`Decorator`] contract: a
//! wrapper reports its inner node's imports plus its own.

mod adder;
mod cast;
mod fragment;
mod getter_merge;
mod merge_or_replace;
mod null_check;
mod setter;

pub use adder::AdderWrapper;
pub use cast::CastWrapper;
pub use fragment::Fragment;
pub use getter_merge::GetterMergeWrapper;
pub use merge_or_replace::MergeOrReplaceWrapper;
pub use null_check::NullCheckWrapper;
pub use setter::SetterWrapper;

use mapforge_core::ImportSet;

use crate::expr::{Expr, Stmt};

/// How the innermost value was produced upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AssignmentKind {
    /// The source value itself, unchanged. Containers are shared by
    /// reference and need a defensive copy before being stored.
    #[default]
    Direct,
    /// The source value passed through a built-in conversion.
    TypeConverted,
    /// The result of calling a mapping method; always a fresh value.
    Mapped,
}

impl AssignmentKind {
    pub fn is_direct(self) -> bool {
        matches!(self, AssignmentKind::Direct)
    }
}

/// Common contract of every wrapper.
pub trait Decorator {
    /// The wrapped node.
    fn decorated(&self) -> &Assignment;

    /// Imports this wrapper needs on top of the wrapped node's.
    fn own_imports(&self) -> ImportSet {
        ImportSet::new()
    }

    /// Union of the wrapped node's imports and this wrapper's own.
    fn import_types(&self) -> ImportSet {
        let mut imports = self.decorated().import_types();
        imports.extend(&self.own_imports());
        imports
    }
}

/// A composable assignment node.
#[derive(Debug, Clone)]
pub enum Assignment {
    Fragment(Fragment),
    Cast(CastWrapper),
    NullCheck(NullCheckWrapper),
    Setter(SetterWrapper),
    MergeOrReplace(MergeOrReplaceWrapper),
    GetterMerge(GetterMergeWrapper),
    Adder(AdderWrapper),
}

/// Leaf-or-wrapper view of a node.
enum Node<'a> {
    Leaf(&'a Fragment),
    Wrapper(&'a dyn Decorator),
}

impl Assignment {
    fn node(&self) -> Node<'_> {
        match self {
            Assignment::Fragment(f) => Node::Leaf(f),
            Assignment::Cast(w) => Node::Wrapper(w),
            Assignment::NullCheck(w) => Node::Wrapper(w),
            Assignment::Setter(w) => Node::Wrapper(w),
            Assignment::MergeOrReplace(w) => Node::Wrapper(w),
            Assignment::GetterMerge(w) => Node::Wrapper(w),
            Assignment::Adder(w) => Node::Wrapper(w),
        }
    }

    /// View this node through the wrapper contract. `None` for leaves.
    pub fn as_decorator(&self) -> Option<&dyn Decorator> {
        match self.node() {
            Node::Leaf(_) => None,
            Node::Wrapper(w) => Some(w),
        }
    }

    /// Every import the generated code for this subtree requires.
    ///
    /// Computed on demand: the tree is immutable once built.
    pub fn import_types(&self) -> ImportSet {
        let imports = match self.node() {
            Node::Leaf(fragment) => fragment.imports().clone(),
            Node::Wrapper(wrapper) => wrapper.import_types(),
        };
        log::trace!("[assign] {} imports {}", self.label(), imports.len());
        imports
    }

    /// The directly wrapped node, if this is a wrapper.
    pub fn inner(&self) -> Option<&Assignment> {
        self.as_decorator().map(Decorator::decorated)
    }

    /// The leaf fragment at the bottom of the wrapper chain.
    pub fn innermost(&self) -> &Fragment {
        match self.node() {
            Node::Leaf(fragment) => fragment,
            Node::Wrapper(wrapper) => wrapper.decorated().innermost(),
        }
    }

    /// How the innermost value was produced.
    pub fn kind(&self) -> AssignmentKind {
        self.innermost().kind()
    }

    /// The expression this node ultimately evaluates to.
    ///
    /// Value-shaping nodes (fragments, casts) build it; statement-shaping
    /// wrappers forward to their inner node.
    pub fn value_expr(&self) -> Expr {
        if let Assignment::Cast(cast) = self {
            return cast.value_expr();
        }
        match self.node() {
            Node::Leaf(fragment) => fragment.expr().clone(),
            Node::Wrapper(wrapper) => wrapper.decorated().value_expr(),
        }
    }

    /// Lower to statements writing into `target`.
    ///
    /// A bare value (fragment or cast) lowers to an expression statement.
    pub fn lower(&self, target: &Expr) -> Vec<Stmt> {
        match self {
            Assignment::Fragment(_) | Assignment::Cast(_) => vec![Stmt::Expr(self.value_expr())],
            Assignment::NullCheck(w) => w.lower(target),
            Assignment::Setter(w) => w.lower(target),
            Assignment::MergeOrReplace(w) => w.lower(target),
            Assignment::GetterMerge(w) => w.lower(target),
            Assignment::Adder(w) => w.lower(target),
        }
    }

    /// Number of nodes in the wrapper chain, the leaf included.
    pub fn depth(&self) -> usize {
        1 + self.inner().map_or(0, Assignment::depth)
    }

    /// Short name of the variant, for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Assignment::Fragment(_) => "fragment",
            Assignment::Cast(_) => "cast",
            Assignment::NullCheck(_) => "null-check",
            Assignment::Setter(_) => "setter",
            Assignment::MergeOrReplace(_) => "merge-or-replace",
            Assignment::GetterMerge(_) => "getter-merge",
            Assignment::Adder(_) => "adder",
        }
    }

    pub fn as_merge_or_replace(&self) -> Option<&MergeOrReplaceWrapper> {
        match self {
            Assignment::MergeOrReplace(w) => Some(w),
            _ => None,
        }
    }
}

impl From<Fragment> for Assignment {
    fn from(fragment: Fragment) -> Self {
        Assignment::Fragment(fragment)
    }
}

impl From<CastWrapper> for Assignment {
    fn from(w: CastWrapper) -> Self {
        Assignment::Cast(w)
    }
}

impl From<NullCheckWrapper> for Assignment {
    fn from(w: NullCheckWrapper) -> Self {
        Assignment::NullCheck(w)
    }
}

impl From<SetterWrapper> for Assignment {
    fn from(w: SetterWrapper) -> Self {
        Assignment::Setter(w)
    }
}

impl From<MergeOrReplaceWrapper> for Assignment {
    fn from(w: MergeOrReplaceWrapper) -> Self {
        Assignment::MergeOrReplace(w)
    }
}

impl From<GetterMergeWrapper> for Assignment {
    fn from(w: GetterMergeWrapper) -> Self {
        Assignment::GetterMerge(w)
    }
}

impl From<AdderWrapper> for Assignment {
    fn from(w: AdderWrapper) -> Self {
        Assignment::Adder(w)
    }
}
