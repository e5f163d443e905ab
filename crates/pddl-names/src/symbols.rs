//! Reserved PDDL symbols.
//!
//! These words belong to the grammar and cannot be used as user
//! identifiers unless a caller explicitly exempts them.

use std::sync::LazyLock;

use hashbrown::HashSet;

/// Every reserved symbol of the PDDL grammar.
pub const ALL_SYMBOLS: &[&str] = &[
    // Delimiters and operators
    "(", ")", "-", "=", ">=", "<=", ">", "<", "+", "*", "/",
    // Connectives and quantifiers
    "and", "or", "not", "imply", "oneof", "forall", "exists", "when", "either",
    // Top-level structure
    "define", "domain", "problem", ":domain", ":requirements", ":types",
    ":constants", ":objects", ":predicates", ":functions", ":init", ":goal",
    ":metric", ":action", ":parameters", ":precondition", ":effect", ":derived",
    // Built-in types
    "object", "number",
    // Numeric effects and metrics
    "increase", "decrease", "assign", "scale-up", "scale-down", "minimize",
    "maximize", "total-cost", "total-time",
];

/// Number of reserved symbols.
pub const SYMBOL_COUNT: usize = ALL_SYMBOLS.len();

static SYMBOL_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ALL_SYMBOLS.iter().copied().collect());

/// Returns true if `word` is a reserved symbol.
///
/// ```
/// use pddl_names::symbols::is_symbol;
///
/// assert!(is_symbol("either"));
/// assert!(is_symbol(":requirements"));
/// assert!(!is_symbol("block"));
/// ```
#[must_use]
pub fn is_symbol(word: &str) -> bool {
    SYMBOL_SET.contains(word)
}
