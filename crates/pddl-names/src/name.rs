//! Validated identifiers.
//!
//! A [`Name`] is the identifier used for types, objects, predicates and
//! functions. Construction validates the text once; afterwards a name is an
//! immutable, cheaply clonable value with lexicographic ordering, so sets of
//! names sort deterministically.
//!
//! # Examples
//!
//! ```
//! use pddl_names::Name;
//!
//! let block = Name::new("block").unwrap();
//! let table: Name = "table".parse().unwrap();
//!
//! assert!(block < table);
//! assert_eq!(block.as_str(), "block");
//! assert_eq!(format!("{block:?}"), "'block'");
//! assert!(Name::new("9lives").is_err());
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::error::{NameError, Result};

/// Pattern every name must match: a letter followed by letters, digits,
/// underscores or dashes.
pub const NAME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_-]*$";

/// Name of the implicit root type.
pub const OBJECT: &str = "object";

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex"));

/// A normalized PDDL identifier.
///
/// Equality, hashing and ordering all follow the underlying string, so a
/// `Name` can be looked up in a set by `&str` through [`Borrow`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(Arc<str>);

impl Name {
    /// Validates `value` and wraps it as a name.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Invalid`] if `value` does not match
    /// [`NAME_PATTERN`].
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        if !NAME_REGEX.is_match(value) {
            return Err(NameError::Invalid {
                value: value.to_string(),
                pattern: NAME_PATTERN,
            });
        }
        Ok(Self(Arc::from(value)))
    }

    /// The root type every PDDL type ultimately derives from.
    #[must_use]
    pub fn object() -> Self {
        Self(Arc::from(OBJECT))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the root type `object`.
    #[must_use]
    pub fn is_object(&self) -> bool {
        &*self.0 == OBJECT
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Quoted, so diagnostics can tell a name apart from surrounding prose.
impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0)
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Name {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Converts every string in `values` into a [`Name`], stopping at the first
/// invalid one.
///
/// ```
/// use pddl_names::to_names;
///
/// let names = to_names(["block", "table"]).unwrap();
/// assert_eq!(names.len(), 2);
/// assert!(to_names(["block", "bad name"]).is_err());
/// ```
pub fn to_names<I>(values: I) -> Result<Vec<Name>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values.into_iter().map(Name::new).collect()
}
