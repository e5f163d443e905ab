//! Typed terms: constants and variables.
//!
//! Every term carries a set of type tags. A term without tags is untyped and
//! is never checked against declared types. Tags are stored in a hash set,
//! so iteration order is unspecified; use [`Typed::sorted_type_tags`] when a
//! stable order matters.
//!
//! # Examples
//!
//! ```
//! use pddl_logic::{Constant, Term, Typed, Variable};
//! use pddl_names::Name;
//!
//! let block = Name::new("block").unwrap();
//! let a = Constant::new(Name::new("a").unwrap(), Some(block.clone()));
//! let x = Variable::new(Name::new("x").unwrap(), [block]);
//!
//! assert_eq!(a.to_string(), "a");
//! assert_eq!(x.to_string(), "?x");
//! assert_eq!(format!("{a:?}"), "Constant(a, type_tag='block')");
//!
//! let term: Term = x.into();
//! assert!(term.type_tags().contains("block"));
//! ```

use std::fmt;

use hashbrown::HashSet;
use pddl_names::Name;

/// The set of type tags attached to a term.
pub type TypeTags = HashSet<Name>;

/// Something that carries type tags.
pub trait Typed {
    /// Returns the type tags, in unspecified order.
    fn type_tags(&self) -> &TypeTags;

    /// Returns the type tags in lexicographic order.
    fn sorted_type_tags(&self) -> Vec<&Name> {
        let mut tags: Vec<&Name> = self.type_tags().iter().collect();
        tags.sort_unstable();
        tags
    }

    /// Returns true if the term has no type tags.
    fn is_untyped(&self) -> bool {
        self.type_tags().is_empty()
    }
}

/// A named object of the domain or problem, with at most one type.
#[derive(Clone, PartialEq, Eq)]
pub struct Constant {
    name: Name,
    type_tags: TypeTags,
}

impl Constant {
    /// Creates a constant; `None` leaves it untyped.
    #[must_use]
    pub fn new(name: Name, type_tag: Option<Name>) -> Self {
        Self {
            name,
            type_tags: type_tag.into_iter().collect(),
        }
    }

    /// Returns the constant's name.
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the constant's type, if any.
    #[must_use]
    pub fn type_tag(&self) -> Option<&Name> {
        self.type_tags.iter().next()
    }
}

impl Typed for Constant {
    fn type_tags(&self) -> &TypeTags {
        &self.type_tags
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_tag() {
            Some(tag) => write!(f, "Constant({}, type_tag={tag:?})", self.name),
            None => write!(f, "Constant({})", self.name),
        }
    }
}

/// A parameter placeholder, written `?name`, that may have several types
/// (an `either` type).
#[derive(Clone, PartialEq, Eq)]
pub struct Variable {
    name: Name,
    type_tags: TypeTags,
}

impl Variable {
    /// Creates a variable with the given type tags; duplicates collapse.
    #[must_use]
    pub fn new(name: Name, type_tags: impl IntoIterator<Item = Name>) -> Self {
        Self {
            name,
            type_tags: type_tags.into_iter().collect(),
        }
    }

    /// Creates a variable without type tags.
    #[must_use]
    pub fn untyped(name: Name) -> Self {
        Self {
            name,
            type_tags: TypeTags::new(),
        }
    }

    /// Returns the variable's name, without the leading `?`.
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }
}

impl Typed for Variable {
    fn type_tags(&self) -> &TypeTags {
        &self.type_tags
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.type_tags.is_empty() {
            write!(f, "Variable({})", self.name)
        } else {
            write!(
                f,
                "Variable({}, type_tags={:?})",
                self.name,
                self.sorted_type_tags()
            )
        }
    }
}

/// A term usable as an argument of a predicate or function.
#[derive(Clone, PartialEq, Eq)]
pub enum Term {
    /// A constant object
    Constant(Constant),
    /// A variable
    Variable(Variable),
}

impl Term {
    /// Returns the term's name.
    #[must_use]
    pub fn name(&self) -> &Name {
        match self {
            Term::Constant(c) => c.name(),
            Term::Variable(v) => v.name(),
        }
    }

    /// Returns true for variables.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }
}

impl Typed for Term {
    fn type_tags(&self) -> &TypeTags {
        match self {
            Term::Constant(c) => c.type_tags(),
            Term::Variable(v) => v.type_tags(),
        }
    }
}

impl From<Constant> for Term {
    fn from(constant: Constant) -> Self {
        Term::Constant(constant)
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Term::Variable(variable)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(c) => fmt::Display::fmt(c, f),
            Term::Variable(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(c) => fmt::Debug::fmt(c, f),
            Term::Variable(v) => fmt::Debug::fmt(v, f),
        }
    }
}
