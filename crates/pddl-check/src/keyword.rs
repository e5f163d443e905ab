//! Reserved-word guard for user identifiers.

use pddl_names::symbols::is_symbol;

/// Returns true if `word` is a reserved PDDL symbol and is not listed in
/// `ignore`.
///
/// `None` behaves like an empty exemption list.
///
/// ```
/// use pddl_check::is_reserved_keyword;
///
/// assert!(is_reserved_keyword("and", None));
/// assert!(!is_reserved_keyword("object", Some(&["object"])));
/// assert!(!is_reserved_keyword("block", None));
/// ```
#[must_use]
pub fn is_reserved_keyword(word: &str, ignore: Option<&[&str]>) -> bool {
    let ignored = ignore.is_some_and(|ignore| ignore.iter().any(|&w| w == word));
    !ignored && is_symbol(word)
}
