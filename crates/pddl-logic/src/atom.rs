//! Atomic expressions: predicates and functions applied to terms.

use std::fmt;

use pddl_names::Name;

use crate::term::Term;

/// An expression that exposes an ordered list of terms.
///
/// The `Debug` representation is what diagnostics print for the whole
/// expression, e.g. `Predicate(on, ?a, ?b)`.
pub trait HasTerms: fmt::Debug {
    /// Returns the terms in declaration order.
    fn terms(&self) -> &[Term];
}

fn write_application(f: &mut fmt::Formatter<'_>, name: &Name, terms: &[Term]) -> fmt::Result {
    write!(f, "({name}")?;
    for term in terms {
        write!(f, " {term}")?;
    }
    f.write_str(")")
}

fn write_repr(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    name: &Name,
    terms: &[Term],
) -> fmt::Result {
    write!(f, "{kind}({name}")?;
    for term in terms {
        write!(f, ", {term}")?;
    }
    f.write_str(")")
}

/// A predicate applied to terms, such as `(on ?a ?b)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Predicate {
    name: Name,
    terms: Vec<Term>,
}

impl Predicate {
    /// Creates a predicate over `terms`.
    pub fn new<T: Into<Term>>(name: Name, terms: impl IntoIterator<Item = T>) -> Self {
        Self {
            name,
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the predicate's name.
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.terms.len()
    }
}

impl HasTerms for Predicate {
    fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_application(f, &self.name, &self.terms)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(f, "Predicate", &self.name, &self.terms)
    }
}

/// A numeric fluent, such as `(distance ?from ?to)` or `(total-cost)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Function {
    name: Name,
    terms: Vec<Term>,
}

impl Function {
    /// Creates a function over `terms`.
    pub fn new<T: Into<Term>>(name: Name, terms: impl IntoIterator<Item = T>) -> Self {
        Self {
            name,
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a function without arguments.
    #[must_use]
    pub fn nullary(name: Name) -> Self {
        Self {
            name,
            terms: Vec::new(),
        }
    }

    /// Returns the function's name.
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.terms.len()
    }
}

impl HasTerms for Function {
    fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_application(f, &self.name, &self.terms)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(f, "Function", &self.name, &self.terms)
    }
}
