//! Configuration for paramshape.
//!
//! Everything is optional: a missing `.paramshape.toml` yields the Android
//! type catalog, an empty hierarchy and `java.lang.Object` as root type.
//!
//! ```toml
//! [types]
//! view = "android.view.View"
//!
//! [[hierarchy]]
//! name = "android.widget.Button"
//! supertypes = ["android.widget.TextView"]
//!
//! [oracle]
//! root_type = "java.lang.Object"
//! ```

mod catalog;
mod core;
mod loader;
pub mod validation;

pub use catalog::TypeCatalog;
pub use self::core::{default_root_type, OracleConfig, ParamShapeConfig, TypeDeclaration};
pub use loader::{
    directory_ancestors, load_config, load_config_from_current_dir, load_config_from_path,
    parse_config, CONFIG_FILE_NAME,
};
pub use validation::{validate_config, validate_config_result};
