use std::path::PathBuf;

use crate::env::{Env, LIST_SEPARATOR};
use crate::error::ConfigError;

pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

const XDG_CACHE_HOME: &str = "XDG_CACHE_HOME";
const HOME: &str = "HOME";
const USERPROFILE: &str = "USERPROFILE";

/// Resolves the user's home directory from the environment alone. Variables
/// set to the empty string count as unset. The precedence chain is the same
/// on every platform.
pub fn home_dir(env: &dyn Env) -> Option<String> {
    [XDG_CACHE_HOME, HOME, USERPROFILE].iter().find_map(|key| env.var(key).filter(|v| !v.is_empty()))
}

/// Resolves the single kubeconfig path used for write operations.
///
/// A non-empty `KUBECONFIG` wins outright, but only when it names exactly one
/// file; a value containing the path-list separator is rejected rather than
/// merged or truncated. Without an override the path is `<home>/.kube/config`.
pub fn kubeconfig_path(env: &dyn Env) -> Result<PathBuf, ConfigError> {
    if let Some(value) = env.var(KUBECONFIG_ENV).filter(|v| !v.is_empty()) {
        if value.contains(LIST_SEPARATOR) {
            return Err(ConfigError::InvalidOverride(value));
        }
        return Ok(PathBuf::from(value));
    }

    let home = home_dir(env).ok_or(ConfigError::HomeNotResolvable)?;
    let path = PathBuf::from(home).join(".kube").join("config");
    tracing::debug!("resolved kubeconfig path {}", path.display());
    Ok(path)
}

/// Resolves the ordered list of kubeconfig paths for read-only flows. An
/// override listing several files keeps them all, in order, with empty
/// entries dropped; an override that yields no usable entry falls through to
/// the home-derived default. The result is never empty.
pub fn kubeconfig_paths(env: &dyn Env) -> Result<Vec<PathBuf>, ConfigError> {
    if let Some(value) = env.var(KUBECONFIG_ENV).filter(|v| !v.is_empty()) {
        let paths: Vec<PathBuf> =
            value.split(LIST_SEPARATOR).filter(|p| !p.is_empty()).map(PathBuf::from).collect();
        if !paths.is_empty() {
            return Ok(paths);
        }
    }

    let home = home_dir(env).ok_or(ConfigError::HomeNotResolvable)?;
    Ok(vec![PathBuf::from(home).join(".kube").join("config")])
}

#[cfg(test)]
mod tests;
