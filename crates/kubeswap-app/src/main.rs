mod command;
mod ops;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use kubeswap_core::{ProcessEnv, SwitchState};

use crate::command::Action;

/// Switch, rename, and delete kubeconfig contexts.
#[derive(Parser, Debug)]
#[command(name = "kubeswap", version, about)]
struct Cli {
    /// Context to switch to; '-' for the previous context; OLD=NEW renames
    /// (use '.' for the current context). Lists all contexts when omitted.
    #[arg(value_name = "TARGET")]
    target: Option<String>,

    /// Delete one or more contexts ('.' for the current one)
    #[arg(short = 'd', long = "delete", value_name = "NAME", num_args = 1.., conflicts_with = "target")]
    delete: Vec<String>,

    /// Print the current context
    #[arg(short = 'c', long = "current", conflicts_with_all = ["target", "delete"])]
    current: bool,

    /// Unset the current context
    #[arg(short = 'u', long = "unset", conflicts_with_all = ["target", "delete", "current"])]
    unset: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let env = ProcessEnv;

    if !cli.delete.is_empty() {
        return ops::delete(&env, &cli.delete);
    }
    if cli.current {
        return ops::current(&env);
    }
    if cli.unset {
        return ops::unset(&env);
    }

    match cli.target {
        None => ops::list(&env),
        Some(target) => match command::parse_target(&target)? {
            Action::Switch(name) => ops::switch(&env, &mut SwitchState::load(), &name),
            Action::SwitchPrevious => ops::switch_previous(&env, &mut SwitchState::load()),
            Action::Rename { old, new } => ops::rename(&env, &old, &new),
        },
    }
}
