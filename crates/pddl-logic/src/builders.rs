//! Shorthand constructors for batches of terms.
//!
//! ```
//! use pddl_logic::{builders::variables, Function};
//! use pddl_names::Name;
//!
//! let vars = variables("x y z", &["type1"]).unwrap();
//! let f = Function::new(Name::new("simple_function").unwrap(), vars);
//! assert_eq!(f.arity(), 3);
//! ```

use pddl_names::{Name, Result, to_names};

use crate::term::{Constant, Variable};

/// Creates one constant per whitespace-separated name in `names`, all with
/// the same optional type.
///
/// # Errors
///
/// Fails on the first name (or the type) that is not a valid identifier.
pub fn constants(names: &str, type_tag: Option<&str>) -> Result<Vec<Constant>> {
    let type_tag = type_tag.map(Name::new).transpose()?;
    names
        .split_whitespace()
        .map(|n| Name::new(n).map(|n| Constant::new(n, type_tag.clone())))
        .collect()
}

/// Creates one variable per whitespace-separated name in `names`, each
/// tagged with every type in `types`.
///
/// # Errors
///
/// Fails on the first name or type that is not a valid identifier.
pub fn variables(names: &str, types: &[&str]) -> Result<Vec<Variable>> {
    let types = to_names(types)?;
    names
        .split_whitespace()
        .map(|n| Name::new(n).map(|n| Variable::new(n, types.iter().cloned())))
        .collect()
}
