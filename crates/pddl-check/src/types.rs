//! Declared type hierarchy of a domain.
//!
//! Builds the declared-type set from `type -> supertype` declarations and
//! rejects hierarchies that no planner could use: keyword type names, a
//! supertype on `object`, undeclared supertypes, and cycles.

use hashbrown::{HashMap, HashSet};
use pddl_log::debug;
use pddl_names::{Name, OBJECT};

use crate::error::{Result, ValidationError};
use crate::keyword::is_reserved_keyword;
use crate::scan::DeclaredTypes;

/// A validated set of types and their supertypes.
///
/// `object` is always declared, even when the declarations do not mention
/// it.
///
/// # Examples
///
/// ```
/// use pddl_check::{check_constant_types, TypeHierarchy};
/// use pddl_logic::builders::constants;
/// use pddl_names::Name;
///
/// let name = |s: &str| Name::new(s).unwrap();
/// let types = TypeHierarchy::new([
///     (name("vehicle"), None),
///     (name("truck"), Some(name("vehicle"))),
/// ])
/// .unwrap();
///
/// assert!(types.is_subtype_of(&name("truck"), &name("object")));
///
/// let fleet = constants("t1 t2", Some("truck")).unwrap();
/// assert!(check_constant_types(Some(&fleet), &types).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TypeHierarchy {
    /// Declared types and their direct supertype
    supertypes: HashMap<Name, Option<Name>>,

    /// Declared types plus `object`
    all_types: HashSet<Name>,
}

impl TypeHierarchy {
    /// Validates `declarations` and builds the hierarchy.
    ///
    /// A type declared twice keeps its last supertype. Checks run over the
    /// types in name order, so the reported error is stable.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::ReservedTypeName`] if a type other than `object`
    ///   is a reserved keyword
    /// - [`ValidationError::ObjectHasSupertype`] if `object` has a supertype
    /// - [`ValidationError::UndeclaredSupertype`] if a supertype is neither
    ///   declared nor `object`
    /// - [`ValidationError::CyclicTypeHierarchy`] if the supertype relation
    ///   has a cycle
    pub fn new<I>(declarations: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Name, Option<Name>)>,
    {
        let supertypes: HashMap<Name, Option<Name>> = declarations.into_iter().collect();

        let mut names: Vec<&Name> = supertypes.keys().collect();
        names.sort_unstable();

        for &child in &names {
            if is_reserved_keyword(child.as_str(), Some(&[OBJECT])) {
                debug!("rejecting reserved type name {child:?}");
                return Err(ValidationError::ReservedTypeName {
                    name: child.clone(),
                });
            }
            let Some(supertype) = &supertypes[child] else {
                continue;
            };
            if child.is_object() {
                return Err(ValidationError::ObjectHasSupertype {
                    supertype: supertype.clone(),
                });
            }
            if !supertype.is_object() && !supertypes.contains_key(supertype) {
                return Err(ValidationError::UndeclaredSupertype {
                    child: child.clone(),
                    supertype: supertype.clone(),
                });
            }
        }

        find_cycle(&supertypes, &names)?;

        let mut all_types: HashSet<Name> = supertypes.keys().cloned().collect();
        all_types.insert(Name::object());
        debug!("declared {} types", all_types.len());

        Ok(Self {
            supertypes,
            all_types,
        })
    }

    /// Returns every declared type, including `object`.
    #[must_use]
    pub fn all_types(&self) -> &HashSet<Name> {
        &self.all_types
    }

    /// Returns the direct supertype of `name`, if it has one.
    #[must_use]
    pub fn supertype(&self, name: &Name) -> Option<&Name> {
        self.supertypes.get(name).and_then(Option::as_ref)
    }

    /// Returns true if `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &Name) -> bool {
        self.all_types.contains(name)
    }

    /// Returns true if `child` equals `ancestor` or derives from it.
    ///
    /// Every declared type derives from `object`.
    #[must_use]
    pub fn is_subtype_of(&self, child: &Name, ancestor: &Name) -> bool {
        if !self.contains(child) {
            return false;
        }
        if ancestor.is_object() {
            return true;
        }
        let mut current = Some(child);
        while let Some(name) = current {
            if name == ancestor {
                return true;
            }
            current = self.supertype(name);
        }
        false
    }

    /// Returns the number of declared types, including `object`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all_types.len()
    }

    /// Always false: `object` is always declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_types.is_empty()
    }
}

impl Default for TypeHierarchy {
    fn default() -> Self {
        Self {
            supertypes: HashMap::new(),
            all_types: std::iter::once(Name::object()).collect(),
        }
    }
}

impl DeclaredTypes for TypeHierarchy {
    fn declares(&self, tag: &Name) -> bool {
        self.contains(tag)
    }

    fn declared_types(&self) -> Vec<&Name> {
        self.all_types.declared_types()
    }
}

/// Walks each supertype chain once; a chain that revisits a type on the
/// current path is a cycle.
fn find_cycle(supertypes: &HashMap<Name, Option<Name>>, names: &[&Name]) -> Result<()> {
    let mut acyclic: HashSet<&Name> = HashSet::new();

    for &start in names {
        let mut path: Vec<&Name> = Vec::new();
        let mut current = Some(start);

        while let Some(name) = current {
            if acyclic.contains(name) {
                break;
            }
            if let Some(pos) = path.iter().position(|&seen| seen == name) {
                let mut cycle: Vec<Name> = path[pos..].iter().map(|&n| n.clone()).collect();
                cycle.push(name.clone());
                debug!("type hierarchy cycle through {name:?}");
                return Err(ValidationError::CyclicTypeHierarchy { cycle });
            }
            path.push(name);
            current = supertypes.get(name).and_then(Option::as_ref);
        }

        acyclic.extend(path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    fn decl(child: &str, parent: Option<&str>) -> (Name, Option<Name>) {
        (name(child), parent.map(name))
    }

    #[test]
    fn test_object_is_implicit() {
        let types = TypeHierarchy::new([decl("block", None)]).unwrap();
        assert!(types.contains(&name("object")));
        assert!(types.contains(&name("block")));
        assert_eq!(types.len(), 2);
        assert!(!types.is_empty());
    }

    #[test]
    fn test_default_declares_only_object() {
        let types = TypeHierarchy::default();
        assert_eq!(types.declared_types(), vec![&name("object")]);
    }

    #[test]
    fn test_explicit_object_without_supertype() {
        let types = TypeHierarchy::new([decl("object", None), decl("block", Some("object"))]).unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types.supertype(&name("block")), Some(&name("object")));
        assert_eq!(types.supertype(&name("object")), None);
    }

    #[test]
    fn test_subtyping() {
        let types = TypeHierarchy::new([
            decl("vehicle", None),
            decl("truck", Some("vehicle")),
            decl("location", None),
        ])
        .unwrap();

        assert!(types.is_subtype_of(&name("truck"), &name("vehicle")));
        assert!(types.is_subtype_of(&name("truck"), &name("truck")));
        assert!(types.is_subtype_of(&name("location"), &name("object")));
        assert!(!types.is_subtype_of(&name("vehicle"), &name("truck")));
        assert!(!types.is_subtype_of(&name("location"), &name("vehicle")));
        assert!(!types.is_subtype_of(&name("plane"), &name("object")));
    }

    #[test]
    fn test_reserved_type_name() {
        let err = TypeHierarchy::new([decl("block", None), decl("either", None)]).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::ReservedTypeName);
        assert_eq!(
            err.to_string(),
            "type 'either' is a reserved keyword and cannot be declared"
        );
    }

    #[test]
    fn test_object_with_supertype() {
        let err = TypeHierarchy::new([decl("thing", None), decl("object", Some("thing"))]).unwrap_err();
        assert_eq!(err, ValidationError::ObjectHasSupertype { supertype: name("thing") });
    }

    #[test]
    fn test_undeclared_supertype() {
        let err = TypeHierarchy::new([decl("truck", Some("vehicle"))]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "supertype 'vehicle' of type 'truck' is not declared"
        );
        assert_eq!(err.kind(), ValidationErrorKind::UndeclaredSupertype);
    }

    #[test]
    fn test_cycle() {
        let err = TypeHierarchy::new([
            decl("a", Some("b")),
            decl("b", Some("c")),
            decl("c", Some("a")),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "cycle in type hierarchy: a -> b -> c -> a");
    }

    #[test]
    fn test_self_cycle() {
        let err = TypeHierarchy::new([decl("loop", Some("loop"))]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CyclicTypeHierarchy {
                cycle: vec![name("loop"), name("loop")],
            }
        );
    }

    #[test]
    fn test_chain_into_cycle_reports_only_cycle() {
        let err = TypeHierarchy::new([
            decl("a", Some("x")),
            decl("x", Some("y")),
            decl("y", Some("x")),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "cycle in type hierarchy: x -> y -> x");
    }

    #[test]
    fn test_redeclaration_keeps_last() {
        let types = TypeHierarchy::new([
            decl("vehicle", None),
            decl("truck", None),
            decl("truck", Some("vehicle")),
        ])
        .unwrap();
        assert_eq!(types.supertype(&name("truck")), Some(&name("vehicle")));
    }
}
