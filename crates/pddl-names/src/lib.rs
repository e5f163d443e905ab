//! Identifiers for PDDL models.
//!
//! This crate provides the [`Name`] type used for every identifier in a
//! domain or problem (types, objects, predicates, functions) and the static
//! table of reserved grammar symbols.
//!
//! # Modules
//!
//! - [`name`] - Validated, ordered identifiers
//! - [`symbols`] - Reserved PDDL symbols
//! - [`error`] - Name construction errors

#![warn(missing_docs)]

pub mod error;
pub mod name;
pub mod symbols;

pub use error::{NameError, Result};
pub use name::{NAME_PATTERN, Name, OBJECT, to_names};
pub use symbols::{ALL_SYMBOLS, is_symbol};
