pub mod env;
pub mod error;
pub mod kubeconfig;
pub mod paths;
pub mod state;

pub use env::{Env, ProcessEnv, LIST_SEPARATOR};
pub use error::ConfigError;
pub use kubeconfig::{load_merged, Kubeconfig, NamedContext};
pub use paths::{home_dir, kubeconfig_path, kubeconfig_paths};
pub use state::SwitchState;
