//! Scanning typed terms for undeclared types.
//!
//! The scanner walks terms in the caller's order and, within each term, the
//! type tags in lexicographic order. It stops at the first tag missing from
//! the declared types, so the reported tag does not depend on how a term
//! happens to store its tags.

use std::collections::BTreeSet;
use std::hash::BuildHasher;

use pddl_logic::Typed;
use pddl_names::Name;

/// A set of declared type names.
pub trait DeclaredTypes {
    /// Returns true if `tag` is declared.
    fn declares(&self, tag: &Name) -> bool;

    /// Returns every declared type in lexicographic order.
    fn declared_types(&self) -> Vec<&Name>;
}

fn sorted<'a>(names: impl Iterator<Item = &'a Name>) -> Vec<&'a Name> {
    let mut names: Vec<&Name> = names.collect();
    names.sort_unstable();
    names
}

impl<S: BuildHasher> DeclaredTypes for hashbrown::HashSet<Name, S> {
    fn declares(&self, tag: &Name) -> bool {
        self.contains(tag)
    }

    fn declared_types(&self) -> Vec<&Name> {
        sorted(self.iter())
    }
}

impl<S: BuildHasher> DeclaredTypes for std::collections::HashSet<Name, S> {
    fn declares(&self, tag: &Name) -> bool {
        self.contains(tag)
    }

    fn declared_types(&self) -> Vec<&Name> {
        sorted(self.iter())
    }
}

impl DeclaredTypes for BTreeSet<Name> {
    fn declares(&self, tag: &Name) -> bool {
        self.contains(tag)
    }

    fn declared_types(&self) -> Vec<&Name> {
        self.iter().collect()
    }
}

impl<D: DeclaredTypes + ?Sized> DeclaredTypes for &D {
    fn declares(&self, tag: &Name) -> bool {
        (**self).declares(tag)
    }

    fn declared_types(&self) -> Vec<&Name> {
        (**self).declared_types()
    }
}

/// Finds the first term carrying a type tag that `all_types` does not
/// declare.
///
/// Returns `None` when `terms` is `None` or every tag is declared. Untyped
/// terms are skipped. When a term has several undeclared tags, the
/// lexicographically smallest is reported.
///
/// # Examples
///
/// ```
/// use hashbrown::HashSet;
/// use pddl_check::scan_for_type_inconsistency;
/// use pddl_logic::builders::constants;
/// use pddl_names::{to_names, Name};
///
/// let all_types: HashSet<Name> = to_names(["object", "block"]).unwrap().into_iter().collect();
/// let blocks = constants("a b", Some("block")).unwrap();
/// let tables = constants("t", Some("table")).unwrap();
///
/// assert!(scan_for_type_inconsistency(Some(&blocks), &all_types).is_none());
///
/// let (term, tag) = scan_for_type_inconsistency(Some(&tables), &all_types).unwrap();
/// assert_eq!(term.name().as_str(), "t");
/// assert_eq!(tag.as_str(), "table");
/// ```
pub fn scan_for_type_inconsistency<'a, I, T, D>(
    terms: Option<I>,
    all_types: &D,
) -> Option<(&'a T, &'a Name)>
where
    I: IntoIterator<Item = &'a T>,
    T: Typed + ?Sized + 'a,
    D: DeclaredTypes + ?Sized,
{
    terms?.into_iter().find_map(|term| {
        term.sorted_type_tags()
            .into_iter()
            .find(|tag| !all_types.declares(tag))
            .map(|tag| (term, tag))
    })
}
