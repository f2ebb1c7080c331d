use std::fs;
use std::path::{Path, PathBuf};

use super::core::ParamShapeConfig;
use super::validation::validate_config_result;
use crate::errors::{ParamShapeError, Result};

/// File name searched for in the start directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".paramshape.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<ParamShapeConfig, String> {
    toml::from_str::<ParamShapeConfig>(contents).map_err(|e| e.to_string())
}

/// Load and validate configuration from an explicit path.
pub fn load_config_from_path(path: &Path) -> Result<ParamShapeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| ParamShapeError::io(path, e))?;
    let config = parse_config(&contents).map_err(|message| ParamShapeError::parse(path, message))?;
    validate_config_result(&config)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try one candidate path, logging anything other than a missing file.
pub(crate) fn try_load_config_from_path(path: &Path) -> Option<ParamShapeConfig> {
    match load_config_from_path(path) {
        Ok(config) => Some(config),
        Err(e) if e.is_not_found() => None,
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find `.paramshape.toml` in `start` or one of its ancestors, falling back
/// to defaults when none loads.
pub fn load_config(start: &Path) -> ParamShapeConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ParamShapeConfig::default()
        })
}

/// [`load_config`] starting from the current directory.
pub fn load_config_from_current_dir() -> ParamShapeConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ParamShapeConfig::default()
        }
    }
}
