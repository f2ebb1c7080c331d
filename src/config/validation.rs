//! Validation with error accumulation for configuration.
//!
//! Every problem in a configuration is collected before reporting, so a user
//! fixing `.paramshape.toml` sees all of them in one run.

use stillwater::{NonEmptyVec, Validation};

use super::ParamShapeConfig;
use crate::errors::{ParamShapeError, Result};

/// Validation result carrying every configuration problem found.
pub type ConfigValidation = Validation<(), NonEmptyVec<String>>;

/// Validate configuration, accumulating all problems.
pub fn validate_config(config: &ParamShapeConfig) -> ConfigValidation {
    let mut problems = Vec::new();

    if config.oracle.root_type.as_str().trim().is_empty() {
        problems.push("oracle.root_type must not be empty".to_string());
    }

    for (field, name) in config.types.all_types() {
        if name.as_str().trim().is_empty() {
            problems.push(format!("types.{} must not be empty", field));
        }
    }

    for (field, marker) in config.types.all_markers() {
        if marker.trim().is_empty() {
            problems.push(format!("types.{} must not be empty", field));
        }
    }

    for (index, declaration) in config.hierarchy.iter().enumerate() {
        if declaration.name.as_str().trim().is_empty() {
            problems.push(format!("hierarchy[{}].name must not be empty", index));
        }
        if declaration.supertypes.contains(&declaration.name) {
            problems.push(format!(
                "hierarchy[{}]: {} cannot be its own supertype",
                index, declaration.name
            ));
        }
    }

    match NonEmptyVec::from_vec(problems) {
        Some(problems) => Validation::Failure(problems),
        None => Validation::Success(()),
    }
}

/// [`validate_config`] folded into a single error.
pub fn validate_config_result(config: &ParamShapeConfig) -> Result<()> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(problems) => {
            let problems: Vec<String> = problems.into_iter().collect();
            Err(ParamShapeError::InvalidConfig(problems.join("; ")))
        }
    }
}
