use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One entry of the kubeconfig `contexts` list. Everything except the name
/// (the `context` mapping with its cluster/user/namespace references) is
/// opaque to this tool and carried through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NamedContext {
    pub name: String,
    #[serde(flatten)]
    pub rest: serde_yaml::Mapping,
}

/// In-memory kubeconfig document. Only `current-context` and the context
/// names are interpreted; all other fields (clusters, users, preferences,
/// extensions) round-trip verbatim through the flattened mapping.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Kubeconfig {
    #[serde(rename = "current-context", default, skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,
    #[serde(default)]
    pub contexts: Vec<NamedContext>,
    #[serde(flatten)]
    pub rest: serde_yaml::Mapping,
}

impl Kubeconfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn context_names(&self) -> Vec<&str> {
        self.contexts.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contexts.iter().any(|c| c.name == name)
    }

    /// The active context name, with the empty "no active context" marker
    /// normalized away.
    pub fn active_context(&self) -> Option<&str> {
        self.current_context.as_deref().filter(|c| !c.is_empty())
    }

    pub fn set_current(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.contains(name) {
            return Err(ConfigError::ContextNotFound(name.to_string()));
        }
        self.current_context = Some(name.to_string());
        Ok(())
    }

    pub fn unset_current(&mut self) {
        self.current_context = Some(String::new());
    }

    pub fn rename_context(&mut self, old: &str, new: &str) -> Result<(), ConfigError> {
        let idx = self
            .contexts
            .iter()
            .position(|c| c.name == old)
            .ok_or_else(|| ConfigError::ContextNotFound(old.to_string()))?;
        if old == new {
            return Ok(());
        }
        if self.contains(new) {
            return Err(ConfigError::ContextExists(new.to_string()));
        }
        self.contexts[idx].name = new.to_string();
        if self.current_context.as_deref() == Some(old) {
            self.current_context = Some(new.to_string());
        }
        Ok(())
    }

    pub fn delete_context(&mut self, name: &str) -> Result<(), ConfigError> {
        let idx = self
            .contexts
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| ConfigError::ContextNotFound(name.to_string()))?;
        self.contexts.remove(idx);
        if self.current_context.as_deref() == Some(name) {
            self.unset_current();
        }
        Ok(())
    }

    /// Atomically replaces `path` with the serialized document: write to a
    /// temp file in the same directory, sync, then rename over the target.
    /// Any failure before the rename leaves the original file untouched.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let data = serde_yaml::to_string(self).map_err(io::Error::other)?;
        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        temp.write_all(data.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| ConfigError::Io(e.error))?;
        tracing::debug!("wrote kubeconfig {}", path.display());
        Ok(())
    }

    /// Folds another document into this one under kubectl's merge rule:
    /// the earlier file wins for `current-context` and for duplicate names.
    fn merge(mut self, other: Kubeconfig) -> Kubeconfig {
        for ctx in other.contexts {
            if !self.contains(&ctx.name) {
                self.contexts.push(ctx);
            }
        }
        if self.active_context().is_none() {
            self.current_context = other.current_context;
        }
        self
    }
}

/// Loads every existing file from an ordered path list into one merged view.
/// Intended for read-only flows (listing, current-context lookup); merged
/// documents are never written back.
pub fn load_merged(paths: &[PathBuf]) -> Result<Kubeconfig, ConfigError> {
    let mut merged: Option<Kubeconfig> = None;
    for path in paths {
        if !path.exists() {
            continue;
        }
        let config = Kubeconfig::load(path)?;
        merged = Some(match merged {
            Some(previous) => previous.merge(config),
            None => config,
        });
    }
    merged.ok_or_else(|| {
        ConfigError::FileNotFound(paths.first().cloned().unwrap_or_else(|| PathBuf::from(".kube/config")))
    })
}
