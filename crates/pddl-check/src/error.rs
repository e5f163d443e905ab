//! Validation errors.
//!
//! Every error carries enough context to fix the model without a debugger:
//! the offending type tag, the term or expression it was found in, and the
//! complete set of declared types.

use std::fmt;

use pddl_names::Name;
use thiserror::Error;

use crate::scan::DeclaredTypes;

/// Category of a [`ValidationError`], for inspection without matching on
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A term uses a type that the model does not declare.
    TypeNotDeclared,
    /// A declared type name collides with a grammar keyword.
    ReservedTypeName,
    /// The root type was given a supertype.
    ObjectHasSupertype,
    /// A type derives from a type that is not declared.
    UndeclaredSupertype,
    /// The supertype relation loops back on itself.
    CyclicTypeHierarchy,
}

/// A sorted snapshot of declared types, rendered as `{'block', 'object'}`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct TypeList(Vec<Name>);

impl TypeList {
    /// Captures the declared types of `types` in sorted order.
    pub fn from_declared<D: DeclaredTypes + ?Sized>(types: &D) -> Self {
        Self(types.declared_types().into_iter().cloned().collect())
    }

    /// Returns the captured names.
    #[must_use]
    pub fn names(&self) -> &[Name] {
        &self.0
    }
}

impl fmt::Display for TypeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name:?}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for TypeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A structurally inconsistent model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A constant's type is not declared.
    #[error("type {tag:?} of constant {constant} is not in available types {available}")]
    UndeclaredConstantType {
        /// The undeclared type tag
        tag: Name,
        /// Representation of the constant carrying the tag
        constant: String,
        /// Every declared type
        available: TypeList,
    },

    /// A term inside an atomic expression has an undeclared type.
    #[error(
        "type {tag:?} of term {term} in atomic expression {expression} is not in available types {available}"
    )]
    UndeclaredTermType {
        /// The undeclared type tag
        tag: Name,
        /// Representation of the term carrying the tag
        term: String,
        /// Representation of the containing expression
        expression: String,
        /// Every declared type
        available: TypeList,
    },

    /// A type is named after a reserved keyword.
    #[error("type {name:?} is a reserved keyword and cannot be declared")]
    ReservedTypeName {
        /// The offending type name
        name: Name,
    },

    /// `object` was declared with a supertype.
    #[error("type 'object' must not have a supertype, found {supertype:?}")]
    ObjectHasSupertype {
        /// The supertype given to `object`
        supertype: Name,
    },

    /// A type's supertype is not declared.
    #[error("supertype {supertype:?} of type {child:?} is not declared")]
    UndeclaredSupertype {
        /// The declared type
        child: Name,
        /// Its undeclared supertype
        supertype: Name,
    },

    /// The supertype relation contains a cycle.
    #[error("cycle in type hierarchy: {}", render_cycle(.cycle))]
    CyclicTypeHierarchy {
        /// The types on the cycle, starting and ending with the same type
        cycle: Vec<Name>,
    },
}

fn render_cycle(cycle: &[Name]) -> String {
    cycle
        .iter()
        .map(Name::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl ValidationError {
    /// Returns the error's category.
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::UndeclaredConstantType { .. }
            | ValidationError::UndeclaredTermType { .. } => ValidationErrorKind::TypeNotDeclared,
            ValidationError::ReservedTypeName { .. } => ValidationErrorKind::ReservedTypeName,
            ValidationError::ObjectHasSupertype { .. } => ValidationErrorKind::ObjectHasSupertype,
            ValidationError::UndeclaredSupertype { .. } => {
                ValidationErrorKind::UndeclaredSupertype
            }
            ValidationError::CyclicTypeHierarchy { .. } => {
                ValidationErrorKind::CyclicTypeHierarchy
            }
        }
    }

    /// Returns the undeclared type tag for type-not-declared errors.
    #[must_use]
    pub fn undeclared_tag(&self) -> Option<&Name> {
        match self {
            ValidationError::UndeclaredConstantType { tag, .. }
            | ValidationError::UndeclaredTermType { tag, .. } => Some(tag),
            _ => None,
        }
    }
}

/// A result type for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
