//! Fixture builders for callables, parameters and oracles.

use crate::core::{Callable, Parameter, PrimitiveKind, TypeEntity};
use crate::oracle::HierarchyOracle;

/// A parameter of the given textual type; primitive keywords are classified.
pub fn param(name: &str, type_name: &str) -> Parameter {
    Parameter::of_type(name, type_name)
}

/// A primitive parameter.
pub fn primitive(name: &str, kind: PrimitiveKind) -> Parameter {
    Parameter::new(name, TypeEntity::primitive(kind))
}

/// A parameter carrying one marker annotation.
pub fn annotated(name: &str, type_name: &str, annotation: &str) -> Parameter {
    Parameter::of_type(name, type_name).with_annotation(annotation)
}

pub fn callable(name: &str, parameters: Vec<Parameter>) -> Callable {
    Callable::new(name, parameters)
}

/// A callable whose parameters have the given types, named `p0`, `p1`, ...
pub fn callable_of(name: &str, types: &[&str]) -> Callable {
    let parameters = types
        .iter()
        .enumerate()
        .map(|(i, t)| param(&format!("p{i}"), t))
        .collect();
    Callable::new(name, parameters)
}

/// Oracle over a slice of the Android widget and content hierarchy.
pub fn android_oracle() -> HierarchyOracle {
    HierarchyOracle::default()
        .declare_type("android.view.View")
        .declare("android.widget.TextView", ["android.view.View"])
        .declare("android.widget.EditText", ["android.widget.TextView"])
        .declare("android.widget.Button", ["android.widget.TextView"])
        .declare("android.widget.CompoundButton", ["android.widget.Button"])
        .declare("android.widget.CheckBox", ["android.widget.CompoundButton"])
        .declare_type("android.view.MotionEvent")
        .declare_type("android.view.KeyEvent")
        .declare_type("android.view.MenuItem")
        .declare_type("android.content.Context")
        .declare("android.content.ContextWrapper", ["android.content.Context"])
        .declare("android.app.Activity", ["android.content.ContextWrapper"])
        .declare_type("android.content.Intent")
        .declare_type("android.os.Bundle")
        .declare_type("java.lang.String")
        .declare_type("java.lang.Boolean")
        .declare_type("java.lang.Integer")
        .declare_type("java.util.Collection")
        .declare("java.util.Set", ["java.util.Collection"])
}
