//! Type-consistency validation for PDDL models.
//!
//! This crate rejects structurally inconsistent domain and problem models
//! before they reach a parser or planner:
//! - Scanning typed terms for types the model never declared
//! - Checking constants and atomic expressions against the declared types
//! - Guarding identifiers against reserved PDDL keywords
//! - Building and validating the declared type hierarchy
//!
//! All checks are pure functions over caller-owned data and report only the
//! first problem they find.
//!
//! # Examples
//!
//! ```
//! use pddl_check::{check_has_terms_types, TypeHierarchy, ValidationErrorKind};
//! use pddl_logic::{Predicate, Variable};
//! use pddl_names::Name;
//!
//! let name = |s: &str| Name::new(s).unwrap();
//! let types = TypeHierarchy::new([(name("block"), None)]).unwrap();
//!
//! let on = Predicate::new(
//!     name("on"),
//!     [
//!         Variable::new(name("a"), [name("block")]),
//!         Variable::new(name("b"), [name("table")]),
//!     ],
//! );
//!
//! let err = check_has_terms_types(Some([&on]), &types).unwrap_err();
//! assert_eq!(err.kind(), ValidationErrorKind::TypeNotDeclared);
//! assert!(err.to_string().contains("Predicate(on, ?a, ?b)"));
//! ```

#![warn(missing_docs)]

pub mod check;
pub mod error;
pub mod keyword;
pub mod scan;
pub mod types;

pub use check::{check_constant_types, check_has_terms_types};
pub use error::{Result, TypeList, ValidationError, ValidationErrorKind};
pub use keyword::is_reserved_keyword;
pub use scan::{DeclaredTypes, scan_for_type_inconsistency};
pub use types::TypeHierarchy;
