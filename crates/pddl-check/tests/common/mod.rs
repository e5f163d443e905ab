// Shared fixtures for the validation integration tests.

#![allow(dead_code)]

use hashbrown::HashSet;
use pddl_check::TypeHierarchy;
use pddl_logic::{Constant, Predicate, Variable};
use pddl_names::{Name, to_names};

/// Parses a name, panicking on invalid test input
pub fn name(s: &str) -> Name {
    Name::new(s).expect("test names are valid")
}

/// Builds a declared-type set from plain strings
pub fn type_set(names: &[&str]) -> HashSet<Name> {
    to_names(names)
        .expect("test type names are valid")
        .into_iter()
        .collect()
}

/// A typed variable with a single type
pub fn var(n: &str, ty: &str) -> Variable {
    Variable::new(name(n), [name(ty)])
}

/// A typed constant
pub fn constant(n: &str, ty: &str) -> Constant {
    Constant::new(name(n), Some(name(ty)))
}

/// Blocksworld type hierarchy: `block` and `table` under `object`
pub fn blocksworld_types() -> TypeHierarchy {
    TypeHierarchy::new([(name("block"), None), (name("table"), None)])
        .expect("blocksworld hierarchy is valid")
}

/// Blocksworld predicates
pub fn blocksworld_predicates() -> Vec<Predicate> {
    vec![
        Predicate::new(name("on"), [var("x", "block"), var("y", "block")]),
        Predicate::new(name("ontable"), [var("x", "block")]),
        Predicate::new(name("clear"), [var("x", "block")]),
        Predicate::new(name("handempty"), Vec::<Variable>::new()),
        Predicate::new(name("holding"), [var("x", "block")]),
    ]
}
