//! Property-style tests for the scanner and checkers.
//!
//! Inputs are generated from small fixed pools instead of a fuzzing crate;
//! every property is checked over all combinations of the pools.

mod common;

use common::{name, type_set};
use pddl_check::{
    check_constant_types, check_has_terms_types, is_reserved_keyword,
    scan_for_type_inconsistency,
};
use pddl_logic::{Constant, Predicate, Term, Variable};
use pddl_names::{ALL_SYMBOLS, Name};

const TAG_POOL: &[&str] = &["alpha", "block", "object", "table", "truck", "zeta"];

/// Every subset of `TAG_POOL`, as declared-type sets.
fn all_declared_sets() -> Vec<hashbrown::HashSet<Name>> {
    (0..1u32 << TAG_POOL.len())
        .map(|mask| {
            let chosen: Vec<&str> = TAG_POOL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &t)| t)
                .collect();
            type_set(&chosen)
        })
        .collect()
}

/// Every rotation of `tags`, each used as an insertion order.
fn rotations(tags: &[&str]) -> Vec<Vec<Name>> {
    (0..tags.len())
        .map(|r| tags.iter().cycle().skip(r).take(tags.len()).map(|&t| name(t)).collect())
        .collect()
}

// ============================================================================
// Scanner properties
// ============================================================================

#[test]
fn test_declared_tags_never_fail() {
    for declared in all_declared_sets() {
        let terms: Vec<Term> = declared
            .iter()
            .map(|tag| Variable::new(name("x"), [tag.clone()]).into())
            .collect();
        assert!(scan_for_type_inconsistency(Some(&terms), &declared).is_none());
        assert!(check_constant_types(None::<&[Constant]>, &declared).is_ok());
    }
}

#[test]
fn test_untyped_terms_never_fail() {
    let terms: Vec<Term> = vec![
        Constant::new(name("c"), None).into(),
        Variable::untyped(name("x")).into(),
    ];
    let predicate = Predicate::new(name("p"), terms.clone());
    for declared in all_declared_sets() {
        assert!(scan_for_type_inconsistency(Some(&terms), &declared).is_none());
        assert!(check_has_terms_types(Some([&predicate]), &declared).is_ok());
    }
}

#[test]
fn test_reported_tag_is_smallest_undeclared() {
    for declared in all_declared_sets() {
        for order in rotations(TAG_POOL) {
            let terms = [Variable::new(name("x"), order)];
            let expected = TAG_POOL.iter().find(|&&t| !declared.contains(t));

            let found = scan_for_type_inconsistency(Some(&terms), &declared);
            assert_eq!(found.map(|(_, tag)| tag.as_str()), expected.copied());
        }
    }
}

#[test]
fn test_reported_tag_is_declared_nowhere() {
    for declared in all_declared_sets() {
        let constants: Vec<Constant> = TAG_POOL
            .iter()
            .map(|&t| Constant::new(name("c"), Some(name(t))))
            .collect();
        if let Err(err) = check_constant_types(Some(&constants), &declared) {
            let tag = err.undeclared_tag().expect("type-not-declared error");
            assert!(!declared.contains(tag));
        }
    }
}

// ============================================================================
// Checker properties
// ============================================================================

#[test]
fn test_checks_are_idempotent() {
    let predicates: Vec<Predicate> = TAG_POOL
        .iter()
        .map(|&t| Predicate::new(name("p"), [Variable::new(name("x"), [name(t)])]))
        .collect();

    for declared in all_declared_sets() {
        let first = check_has_terms_types(Some(&predicates), &declared);
        let second = check_has_terms_types(Some(&predicates), &declared);
        assert_eq!(first, second);
    }
}

#[test]
fn test_first_violation_is_first_in_outer_order() {
    let declared = type_set(&["object"]);
    for order in rotations(&["block", "table", "truck"]) {
        let predicates: Vec<Predicate> = order
            .iter()
            .map(|t| Predicate::new(name("p"), [Variable::new(name("x"), [t.clone()])]))
            .collect();

        let err = check_has_terms_types(Some(&predicates), &declared).unwrap_err();
        assert_eq!(err.undeclared_tag(), Some(&order[0]));
    }
}

#[test]
fn test_absent_input_always_accepted() {
    for declared in all_declared_sets() {
        assert!(scan_for_type_inconsistency(None::<&[Term]>, &declared).is_none());
        assert!(check_constant_types(None::<&[Constant]>, &declared).is_ok());
        assert!(check_has_terms_types(None::<&[Predicate]>, &declared).is_ok());
    }
}

// ============================================================================
// Keyword guard properties
// ============================================================================

#[test]
fn test_keyword_guard_matches_table_and_exemptions() {
    let candidates = ["and", "object", "either", "block", ":types", "truck", "Define"];
    let exemptions: [&[&str]; 3] = [&[], &["object"], &["and", "block"]];

    for word in candidates {
        for ignore in exemptions {
            let expected = ALL_SYMBOLS.contains(&word) && !ignore.contains(&word);
            assert_eq!(is_reserved_keyword(word, Some(ignore)), expected, "{word} {ignore:?}");
        }
        assert_eq!(is_reserved_keyword(word, None), ALL_SYMBOLS.contains(&word));
    }
}
