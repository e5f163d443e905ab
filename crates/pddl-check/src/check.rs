//! Type checks over constants and atomic expressions.
//!
//! Both checks stop at the first undeclared type and turn it into a
//! [`ValidationError`]. Fix the reported declaration and run the check again
//! to see the next problem.

use pddl_log::{debug, trace};
use pddl_logic::{Constant, HasTerms};

use crate::error::{Result, TypeList, ValidationError};
use crate::scan::{DeclaredTypes, scan_for_type_inconsistency};

/// Checks that every constant's type is declared.
///
/// `None` is accepted as an empty collection.
///
/// # Errors
///
/// Returns [`ValidationError::UndeclaredConstantType`] for the first
/// constant with an undeclared type.
///
/// # Examples
///
/// ```
/// use hashbrown::HashSet;
/// use pddl_check::check_constant_types;
/// use pddl_logic::builders::constants;
/// use pddl_names::{to_names, Name};
///
/// let all_types: HashSet<Name> = to_names(["object", "block"]).unwrap().into_iter().collect();
/// let cs = constants("c", Some("table")).unwrap();
///
/// let err = check_constant_types(Some(&cs), &all_types).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "type 'table' of constant Constant(c, type_tag='table') is not in available types {'block', 'object'}"
/// );
/// ```
pub fn check_constant_types<'a, I, D>(constants: Option<I>, all_types: &D) -> Result<()>
where
    I: IntoIterator<Item = &'a Constant>,
    D: DeclaredTypes + ?Sized,
{
    trace!("checking constant types");
    match scan_for_type_inconsistency(constants, all_types) {
        None => Ok(()),
        Some((constant, tag)) => {
            debug!("constant {constant} has undeclared type {tag:?}");
            Err(ValidationError::UndeclaredConstantType {
                tag: tag.clone(),
                constant: format!("{constant:?}"),
                available: TypeList::from_declared(all_types),
            })
        }
    }
}

/// Checks that the terms of every atomic expression have declared types.
///
/// Expressions are visited in order and the check ends at the first
/// undeclared type found in any of them. `None` is accepted as an empty
/// collection.
///
/// # Errors
///
/// Returns [`ValidationError::UndeclaredTermType`] naming the term, the
/// expression containing it, and the declared types.
pub fn check_has_terms_types<'a, I, H, D>(has_terms_objects: Option<I>, all_types: &D) -> Result<()>
where
    I: IntoIterator<Item = &'a H>,
    H: HasTerms + ?Sized + 'a,
    D: DeclaredTypes + ?Sized,
{
    let Some(objects) = has_terms_objects else {
        return Ok(());
    };

    for has_terms in objects {
        trace!("checking term types of {has_terms:?}");
        if let Some((term, tag)) = scan_for_type_inconsistency(Some(has_terms.terms()), all_types) {
            debug!("term {term} of {has_terms:?} has undeclared type {tag:?}");
            return Err(ValidationError::UndeclaredTermType {
                tag: tag.clone(),
                term: format!("{term:?}"),
                expression: format!("{has_terms:?}"),
                available: TypeList::from_declared(all_types),
            });
        }
    }
    Ok(())
}
