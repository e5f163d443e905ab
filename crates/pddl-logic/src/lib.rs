//! In-memory logic model for PDDL domains and problems.
//!
//! # Modules
//!
//! - [`term`] - Constants, variables and their type tags
//! - [`atom`] - Predicates and functions applied to terms
//! - [`builders`] - Batch constructors for constants and variables
//!
//! # Examples
//!
//! ```
//! use pddl_logic::{builders::variables, HasTerms, Predicate};
//! use pddl_names::Name;
//!
//! let vars = variables("a b", &["block"]).unwrap();
//! let on = Predicate::new(Name::new("on").unwrap(), vars);
//!
//! assert_eq!(on.to_string(), "(on ?a ?b)");
//! assert_eq!(on.terms().len(), 2);
//! ```

#![warn(missing_docs)]

pub mod atom;
pub mod builders;
pub mod term;

pub use atom::{Function, HasTerms, Predicate};
pub use term::{Constant, Term, TypeTags, Typed, Variable};
