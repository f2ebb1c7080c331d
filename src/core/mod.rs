pub mod types;

use serde::{Deserialize, Serialize};

pub use types::{PrimitiveKind, SourceLocation, TypeEntity, TypeName, UNIVERSAL_TYPE};

/// One declared parameter of a callable, as seen by the validators.
///
/// Read-only: the surrounding compilation context resolves the type and
/// collects marker annotations before validation runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeEntity,
    /// Qualified names of the annotations present on the parameter.
    #[serde(default)]
    pub annotations: Vec<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeEntity) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }

    /// Build a parameter from a textual type, classifying primitive keywords.
    pub fn of_type(name: impl Into<String>, type_name: &str) -> Self {
        Self::new(name, TypeEntity::parse(type_name))
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn type_name(&self) -> &TypeName {
        &self.ty.name
    }

    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        self.ty.primitive
    }

    pub fn has_annotation(&self, qualified_name: &str) -> bool {
        self.annotations.iter().any(|a| a == qualified_name)
    }
}

/// A method-like declaration whose parameter list is being validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callable {
    pub name: String,
    pub location: Option<SourceLocation>,
    pub parameters: Vec<Parameter>,
}

impl Callable {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            location: None,
            parameters,
        }
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn first_parameter(&self) -> Option<&Parameter> {
        self.parameters.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_annotations() {
        let param = Parameter::of_type("extra", "java.lang.String")
            .with_annotation("org.androidannotations.annotations.Receiver.Extra");
        assert!(param.has_annotation("org.androidannotations.annotations.Receiver.Extra"));
        assert!(!param.has_annotation("org.androidannotations.annotations.OnActivityResult.Extra"));
    }

    #[test]
    fn test_callable_accessors() {
        let callable = Callable::new(
            "onClick",
            vec![
                Parameter::of_type("view", "android.view.View"),
                Parameter::of_type("checked", "boolean"),
            ],
        );
        assert_eq!(callable.arity(), 2);
        assert_eq!(
            callable.first_parameter().map(|p| p.type_name().as_str()),
            Some("android.view.View")
        );
        assert_eq!(
            callable.parameters()[1].primitive_kind(),
            Some(PrimitiveKind::Boolean)
        );
    }
}
