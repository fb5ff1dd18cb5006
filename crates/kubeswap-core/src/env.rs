use std::collections::HashMap;

/// Platform path-list separator, as used in `KUBECONFIG`.
pub const LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Key-value lookup over environment variables. Resolution code takes this
/// instead of reading ambient process state so tests can run against a plain
/// map without touching the real environment.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Env for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
