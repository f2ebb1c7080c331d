use crate::core::TypeName;
use serde::{Deserialize, Serialize};

/// Concrete framework type names the preset shape checks refer to.
///
/// Defaults are the Android names used by AndroidAnnotations; any field can be
/// overridden from the `[types]` table of `.paramshape.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeCatalog {
    pub view: TypeName,
    pub menu_item: TypeName,
    pub sherlock_menu_item: TypeName,
    pub intent: TypeName,
    pub bundle: TypeName,
    pub preference: TypeName,
    pub compound_button: TypeName,
    pub motion_event: TypeName,
    pub text_view: TypeName,
    pub key_event: TypeName,
    pub context: TypeName,
    pub sqlite_database: TypeName,
    pub object: TypeName,
    pub set: TypeName,
    pub string: TypeName,
    pub boolean: TypeName,
    pub integer: TypeName,

    /// Marker admitting extra parameters on broadcast receiver methods.
    pub receiver_extra: String,
    /// Marker admitting extra parameters on receiver action methods.
    pub receiver_action_extra: String,
    /// Marker admitting extra parameters on activity result methods.
    pub on_activity_result_extra: String,
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self {
            view: "android.view.View".into(),
            menu_item: "android.view.MenuItem".into(),
            sherlock_menu_item: "com.actionbarsherlock.view.MenuItem".into(),
            intent: "android.content.Intent".into(),
            bundle: "android.os.Bundle".into(),
            preference: "android.preference.Preference".into(),
            compound_button: "android.widget.CompoundButton".into(),
            motion_event: "android.view.MotionEvent".into(),
            text_view: "android.widget.TextView".into(),
            key_event: "android.view.KeyEvent".into(),
            context: "android.content.Context".into(),
            sqlite_database: "android.database.sqlite.SQLiteDatabase".into(),
            object: "java.lang.Object".into(),
            set: "java.util.Set".into(),
            string: "java.lang.String".into(),
            boolean: "java.lang.Boolean".into(),
            integer: "java.lang.Integer".into(),
            receiver_extra: "org.androidannotations.annotations.Receiver.Extra".to_string(),
            receiver_action_extra: "org.androidannotations.annotations.ReceiverAction.Extra"
                .to_string(),
            on_activity_result_extra: "org.androidannotations.annotations.OnActivityResult.Extra"
                .to_string(),
        }
    }
}

impl TypeCatalog {
    /// Native and compatibility-library menu items.
    pub fn menu_items(&self) -> Vec<TypeName> {
        vec![self.menu_item.clone(), self.sherlock_menu_item.clone()]
    }

    /// Boxed and primitive int.
    pub fn integers(&self) -> Vec<TypeName> {
        vec![self.integer.clone(), TypeName::new("int")]
    }

    /// Types a preference-change listener may receive as the new value.
    pub fn preference_values(&self) -> Vec<TypeName> {
        vec![
            self.object.clone(),
            self.set.clone(),
            self.string.clone(),
            self.boolean.clone(),
        ]
    }

    /// Types an editor-action handler may declare.
    pub fn editor_action_types(&self) -> Vec<TypeName> {
        vec![
            self.text_view.clone(),
            self.integer.clone(),
            TypeName::new("int"),
            self.key_event.clone(),
        ]
    }

    /// Every configured type name, for sanity checks.
    pub(crate) fn all_types(&self) -> Vec<(&'static str, &TypeName)> {
        vec![
            ("view", &self.view),
            ("menu_item", &self.menu_item),
            ("sherlock_menu_item", &self.sherlock_menu_item),
            ("intent", &self.intent),
            ("bundle", &self.bundle),
            ("preference", &self.preference),
            ("compound_button", &self.compound_button),
            ("motion_event", &self.motion_event),
            ("text_view", &self.text_view),
            ("key_event", &self.key_event),
            ("context", &self.context),
            ("sqlite_database", &self.sqlite_database),
            ("object", &self.object),
            ("set", &self.set),
            ("string", &self.string),
            ("boolean", &self.boolean),
            ("integer", &self.integer),
        ]
    }

    /// Every configured marker annotation, for sanity checks.
    pub(crate) fn all_markers(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("receiver_extra", self.receiver_extra.as_str()),
            ("receiver_action_extra", self.receiver_action_extra.as_str()),
            ("on_activity_result_extra", self.on_activity_result_extra.as_str()),
        ]
    }
}
