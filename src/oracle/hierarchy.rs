use super::TypeOracle;
use crate::core::{TypeEntity, TypeName, UNIVERSAL_TYPE};
use im::{HashMap, HashSet, Vector};
use tracing::trace;

/// In-memory oracle over an explicitly declared type hierarchy.
///
/// Every declared type, every named supertype and the root type resolve.
/// Primitive keywords never resolve, and primitives are only subtypes of
/// themselves. Every reference type is a subtype of the root.
///
/// [`UNIVERSAL_TYPE`] always resolves to the configured root, so
/// `any_type()` slots keep matching every reference type under another root.
#[derive(Debug, Clone)]
pub struct HierarchyOracle {
    root: TypeName,
    supertypes: HashMap<TypeName, Vector<TypeName>>,
}

impl Default for HierarchyOracle {
    fn default() -> Self {
        Self::new(UNIVERSAL_TYPE)
    }
}

impl HierarchyOracle {
    pub fn new(root: impl Into<TypeName>) -> Self {
        Self {
            root: root.into(),
            supertypes: HashMap::new(),
        }
    }

    pub fn root(&self) -> &TypeName {
        &self.root
    }

    /// Declare `name` with its direct supertypes. Repeated declarations of
    /// the same name accumulate supertypes.
    pub fn declare<I, S>(mut self, name: impl Into<TypeName>, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TypeName>,
    {
        self.insert(name.into(), supertypes.into_iter().map(Into::into));
        self
    }

    /// Declare a type with no supertype other than the root.
    pub fn declare_type(self, name: impl Into<TypeName>) -> Self {
        self.declare(name, std::iter::empty::<TypeName>())
    }

    pub(crate) fn insert(&mut self, name: TypeName, supertypes: impl Iterator<Item = TypeName>) {
        let mut direct = self.supertypes.get(&name).cloned().unwrap_or_default();
        for supertype in supertypes {
            if !self.supertypes.contains_key(&supertype) {
                self.supertypes.insert(supertype.clone(), Vector::new());
            }
            if !direct.contains(&supertype) {
                direct.push_back(supertype);
            }
        }
        self.supertypes.insert(name, direct);
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.supertypes.contains_key(&TypeName::new(name))
    }

    fn reaches(&self, from: &TypeName, target: &TypeName) -> bool {
        let mut visited: HashSet<TypeName> = HashSet::new();
        let mut pending = vec![from.clone()];
        while let Some(current) = pending.pop() {
            if &current == target {
                return true;
            }
            if visited.insert(current.clone()).is_some() {
                continue;
            }
            if let Some(parents) = self.supertypes.get(&current) {
                pending.extend(parents.iter().cloned());
            }
        }
        false
    }
}

impl TypeOracle for HierarchyOracle {
    fn resolve(&self, qualified_name: &str) -> Option<TypeEntity> {
        if qualified_name == UNIVERSAL_TYPE {
            Some(TypeEntity::reference(self.root.clone()))
        } else if self.root.is(qualified_name) || self.is_declared(qualified_name) {
            Some(TypeEntity::reference(qualified_name))
        } else {
            None
        }
    }

    fn is_subtype(&self, actual: &TypeEntity, expected: &TypeEntity) -> bool {
        let result = if actual.is_primitive() || expected.is_primitive() {
            actual == expected
        } else {
            expected.name == self.root || self.reaches(&actual.name, &expected.name)
        };
        trace!(actual = %actual.name, expected = %expected.name, result, "subtype test");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrimitiveKind;

    fn widgets() -> HierarchyOracle {
        HierarchyOracle::default()
            .declare("android.view.View", Vec::<&str>::new())
            .declare("android.widget.TextView", ["android.view.View"])
            .declare("android.widget.Button", ["android.widget.TextView"])
            .declare("android.widget.CompoundButton", ["android.widget.Button"])
    }

    #[test]
    fn test_transitive_subtype() {
        let oracle = widgets();
        let button = TypeEntity::reference("android.widget.CompoundButton");
        assert!(oracle.extends(&button, "android.view.View"));
        assert!(oracle.extends(&button, "android.widget.Button"));
        assert!(!oracle.extends(
            &TypeEntity::reference("android.view.View"),
            "android.widget.Button"
        ));
    }

    #[test]
    fn test_every_reference_extends_root() {
        let oracle = widgets();
        assert!(oracle.extends(&TypeEntity::reference("com.example.Unknown"), UNIVERSAL_TYPE));
        assert!(!oracle.extends(&TypeEntity::primitive(PrimitiveKind::Int), UNIVERSAL_TYPE));
    }

    #[test]
    fn test_unresolved_expected_never_matches() {
        let oracle = widgets();
        let view = TypeEntity::reference("android.view.View");
        assert!(oracle.resolve("android.app.Fragment").is_none());
        assert!(!oracle.extends(&view, "android.app.Fragment"));
    }

    #[test]
    fn test_primitive_keywords_do_not_resolve() {
        assert!(widgets().resolve("boolean").is_none());
    }

    #[test]
    fn test_supertypes_resolve_without_own_declaration() {
        let oracle = HierarchyOracle::default().declare("a.Child", ["a.Parent"]);
        assert!(oracle.resolve("a.Parent").is_some());
        assert!(oracle.extends(&TypeEntity::reference("a.Child"), "a.Parent"));
    }

    #[test]
    fn test_universal_type_aliases_custom_root() {
        let oracle = HierarchyOracle::new("kotlin.Any").declare_type("com.example.Foo");
        let resolved = oracle.resolve(UNIVERSAL_TYPE).map(|t| t.name);
        assert_eq!(resolved, Some(TypeName::new("kotlin.Any")));
        assert!(oracle.extends(&TypeEntity::reference("com.example.Unknown"), UNIVERSAL_TYPE));
        assert!(oracle.extends(&TypeEntity::reference("com.example.Foo"), "kotlin.Any"));
        assert!(!oracle.extends(&TypeEntity::primitive(PrimitiveKind::Int), UNIVERSAL_TYPE));
    }

    #[test]
    fn test_cyclic_declarations_terminate() {
        let oracle = HierarchyOracle::default()
            .declare("a.A", ["a.B"])
            .declare("a.B", ["a.A"])
            .declare_type("a.C");
        assert!(!oracle.extends(&TypeEntity::reference("a.A"), "a.C"));
        assert!(oracle.extends(&TypeEntity::reference("a.A"), "a.B"));
    }
}
