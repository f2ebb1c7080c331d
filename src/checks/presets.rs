use super::{arity, membership, positional, singleton};
use crate::config::TypeCatalog;
use crate::core::{Callable, PrimitiveKind, TypeName};
use crate::diagnostics::Outcome;

/// Shape checks for the annotations of an Android processor, bound to the
/// type names of a [`TypeCatalog`].
#[derive(Debug, Clone, Copy)]
pub struct ShapeChecks<'a> {
    types: &'a TypeCatalog,
}

impl<'a> ShapeChecks<'a> {
    pub fn new(types: &'a TypeCatalog) -> Self {
        Self { types }
    }

    pub fn types(&self) -> &'a TypeCatalog {
        self.types
    }

    // Arity

    pub fn zero_parameters(&self, callable: &Callable) -> Outcome {
        arity::zero_parameters(callable)
    }

    pub fn zero_or_one_parameter(&self, callable: &Callable) -> Outcome {
        arity::zero_or_one_parameter(callable)
    }

    pub fn exactly_one_parameter(&self, callable: &Callable) -> Outcome {
        arity::exactly_one_parameter(callable)
    }

    // Zero or one parameter of a given type

    pub fn zero_or_one_view_parameter(&self, callable: &Callable) -> Outcome {
        membership::zero_or_one_specific_parameter(callable, &[&self.types.view])
    }

    pub fn zero_or_one_menu_item_parameter(&self, callable: &Callable) -> Outcome {
        membership::zero_or_one_specific_parameter(callable, &self.types.menu_items())
    }

    pub fn zero_or_one_intent_parameter(&self, callable: &Callable) -> Outcome {
        membership::zero_or_one_specific_parameter(callable, &[&self.types.intent])
    }

    pub fn zero_or_one_bundle_parameter(&self, callable: &Callable) -> Outcome {
        membership::zero_or_one_specific_parameter(callable, &[&self.types.bundle])
    }

    pub fn zero_or_one_preference_parameter(&self, callable: &Callable) -> Outcome {
        membership::zero_or_one_specific_parameter(callable, &[&self.types.preference])
    }

    // Positional

    pub fn one_or_two_parameters_first_boolean(&self, callable: &Callable) -> Outcome {
        positional::one_or_two_with_first_primitive(
            callable,
            PrimitiveKind::Boolean,
            self.types.boolean.as_str(),
        )
    }

    pub fn first_parameter_is_database(&self, callable: &Callable) -> Outcome {
        positional::first_parameter_is_type(callable, self.types.sqlite_database.as_str())
    }

    // Singletons

    pub fn at_most_one_compound_button(&self, callable: &Callable) -> Outcome {
        singleton::zero_or_one_of_type(callable, self.types.compound_button.as_str())
    }

    pub fn at_most_one_boolean(&self, callable: &Callable) -> Outcome {
        singleton::zero_or_one_of_primitive(
            callable,
            PrimitiveKind::Boolean,
            self.types.boolean.as_str(),
        )
    }

    pub fn at_most_one_motion_event(&self, callable: &Callable) -> Outcome {
        singleton::zero_or_one_of_type(callable, self.types.motion_event.as_str())
    }

    pub fn at_most_one_view(&self, callable: &Callable) -> Outcome {
        singleton::zero_or_one_of_type(callable, self.types.view.as_str())
    }

    pub fn at_most_one_preference(&self, callable: &Callable) -> Outcome {
        singleton::zero_or_one_of_type(callable, self.types.preference.as_str())
    }

    pub fn at_most_one_text_view(&self, callable: &Callable) -> Outcome {
        singleton::at_most_one_of(callable, &[&self.types.text_view])
    }

    pub fn at_most_one_integer(&self, callable: &Callable) -> Outcome {
        singleton::at_most_one_of(callable, &self.types.integers())
    }

    pub fn at_most_one_key_event(&self, callable: &Callable) -> Outcome {
        singleton::at_most_one_of(callable, &[&self.types.key_event])
    }

    pub fn at_most_one_preference_value(&self, callable: &Callable) -> Outcome {
        singleton::at_most_one_of(callable, &self.types.preference_values())
    }

    // Allowed sets

    pub fn only_compound_button_or_boolean(&self, callable: &Callable) -> Outcome {
        membership::only_types(
            callable,
            &[
                self.types.compound_button.clone(),
                self.types.boolean.clone(),
                TypeName::new("boolean"),
            ],
        )
    }

    pub fn only_motion_event_or_view(&self, callable: &Callable) -> Outcome {
        membership::only_types(callable, &[&self.types.motion_event, &self.types.view])
    }

    pub fn only_view_or_boolean(&self, callable: &Callable) -> Outcome {
        membership::only_types(
            callable,
            &[
                self.types.view.clone(),
                self.types.boolean.clone(),
                TypeName::new("boolean"),
            ],
        )
    }

    pub fn only_preference_or_value(&self, callable: &Callable) -> Outcome {
        let mut allowed = self.types.preference_values();
        allowed.push(self.types.preference.clone());
        membership::only_types(callable, &allowed)
    }

    pub fn only_context_intent_or_receiver_extra(&self, callable: &Callable) -> Outcome {
        membership::only_types_or_annotated(
            callable,
            &[&self.types.context, &self.types.intent],
            &self.types.receiver_extra,
        )
    }

    pub fn only_context_intent_or_receiver_action_extra(&self, callable: &Callable) -> Outcome {
        membership::only_types_or_annotated(
            callable,
            &[&self.types.context, &self.types.intent],
            &self.types.receiver_action_extra,
        )
    }

    pub fn only_intent_int_or_activity_result_extra(&self, callable: &Callable) -> Outcome {
        let mut allowed = vec![self.types.intent.clone()];
        allowed.extend(self.types.integers());
        membership::only_types_or_annotated(callable, &allowed, &self.types.on_activity_result_extra)
    }

    pub fn only_editor_action_parameters(&self, callable: &Callable) -> Outcome {
        membership::only_types_described(
            callable,
            &self.types.editor_action_types(),
            "TextView, int and/or KeyEvent",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Parameter;
    use crate::diagnostics::DiagnosticKind;

    fn callable(types: &[&str]) -> Callable {
        Callable::new(
            "handler",
            types
                .iter()
                .enumerate()
                .map(|(i, t)| Parameter::of_type(format!("p{i}"), t))
                .collect(),
        )
    }

    #[test]
    fn test_menu_item_accepts_either_flavor() {
        let catalog = TypeCatalog::default();
        let checks = ShapeChecks::new(&catalog);
        assert!(checks
            .zero_or_one_menu_item_parameter(&callable(&["com.actionbarsherlock.view.MenuItem"]))
            .is_valid());
        assert!(!checks
            .zero_or_one_menu_item_parameter(&callable(&["android.view.View"]))
            .is_valid());
    }

    #[test]
    fn test_compound_button_or_boolean() {
        let catalog = TypeCatalog::default();
        let checks = ShapeChecks::new(&catalog);
        assert!(checks
            .only_compound_button_or_boolean(&callable(&["android.widget.CompoundButton", "boolean"]))
            .is_valid());
        let outcome = checks.only_compound_button_or_boolean(&callable(&["int", "long"]));
        assert_eq!(outcome.count_of(DiagnosticKind::DisallowedParameter), 2);
    }

    #[test]
    fn test_preference_change_parameters() {
        let catalog = TypeCatalog::default();
        let checks = ShapeChecks::new(&catalog);
        let ok = callable(&["android.preference.Preference", "java.lang.String"]);
        assert!(checks.only_preference_or_value(&ok).is_valid());
        assert!(checks.at_most_one_preference_value(&ok).is_valid());

        let two_values = callable(&["java.lang.String", "java.util.Set"]);
        assert_eq!(checks.at_most_one_preference_value(&two_values).len(), 1);
    }

    #[test]
    fn test_activity_result_extra_marker() {
        let catalog = TypeCatalog::default();
        let checks = ShapeChecks::new(&catalog);
        let target = Callable::new(
            "onResult",
            vec![
                Parameter::of_type("code", "int"),
                Parameter::of_type("data", "android.content.Intent"),
                Parameter::of_type("value", "java.lang.String")
                    .with_annotation(catalog.on_activity_result_extra.clone()),
            ],
        );
        assert!(checks.only_intent_int_or_activity_result_extra(&target).is_valid());
    }

    #[test]
    fn test_editor_action_message() {
        let catalog = TypeCatalog::default();
        let checks = ShapeChecks::new(&catalog);
        let target = callable(&["android.view.View"]);
        assert_eq!(
            checks.only_editor_action_parameters(&target).messages(&target),
            vec!["handler can only have TextView, int and/or KeyEvent parameters"]
        );
    }

    #[test]
    fn test_custom_catalog_changes_checks() {
        let catalog = TypeCatalog {
            bundle: "com.example.State".into(),
            ..TypeCatalog::default()
        };
        let checks = ShapeChecks::new(&catalog);
        assert!(checks
            .zero_or_one_bundle_parameter(&callable(&["com.example.State"]))
            .is_valid());
    }
}
