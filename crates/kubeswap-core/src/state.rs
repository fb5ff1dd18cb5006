use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Remembers the previously active context so a bare `-` target can toggle
/// back to it. Missing or unreadable state degrades to "no previous
/// context"; only writes can fail.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SwitchState {
    #[serde(default)]
    pub previous_context: Option<String>,
    #[serde(skip)]
    path: PathBuf,
}

impl SwitchState {
    pub fn load() -> Self {
        Self::load_from(state_path())
    }

    pub fn load_from(path: PathBuf) -> Self {
        let mut state: SwitchState =
            std::fs::read_to_string(&path).ok().and_then(|s| serde_json::from_str(&s).ok()).unwrap_or_default();
        state.path = path;
        state
    }

    pub fn record(&mut self, context: &str) -> io::Result<()> {
        self.previous_context = Some(context.to_string());
        self.save()
    }

    fn save(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(&self.path, data)
    }
}

fn state_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("kubeswap").join("state.json")
}

#[cfg(test)]
mod tests;
