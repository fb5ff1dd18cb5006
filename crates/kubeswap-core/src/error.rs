use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::env::LIST_SEPARATOR;

#[derive(Debug)]
pub enum ConfigError {
    InvalidOverride(String),
    HomeNotResolvable,
    FileNotFound(PathBuf),
    ContextNotFound(String),
    ContextExists(String),
    Parse { path: PathBuf, source: serde_yaml::Error },
    Io(io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOverride(value) => {
                write!(f, "KUBECONFIG=\"{value}\": multiple paths ('{LIST_SEPARATOR}') are not supported here")
            }
            Self::HomeNotResolvable => {
                write!(f, "cannot determine home directory (tried XDG_CACHE_HOME, HOME, USERPROFILE)")
            }
            Self::FileNotFound(path) => write!(f, "kubeconfig file not found: {}", path.display()),
            Self::ContextNotFound(name) => write!(f, "no context exists with the name \"{name}\""),
            Self::ContextExists(name) => write!(f, "a context named \"{name}\" already exists"),
            Self::Parse { path, source } => write!(f, "cannot parse {}: {source}", path.display()),
            Self::Io(source) => write!(f, "I/O error: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Io(source) => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(source: io::Error) -> Self {
        Self::Io(source)
    }
}
