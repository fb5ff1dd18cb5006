use anyhow::{bail, Context};
use kubeswap_core::{kubeconfig_path, kubeconfig_paths, load_merged, Env, Kubeconfig, SwitchState};

pub fn list(env: &dyn Env) -> anyhow::Result<()> {
    let paths = kubeconfig_paths(env)?;
    let merged = load_merged(&paths)?;
    for name in merged.context_names() {
        println!("{name}");
    }
    Ok(())
}

pub fn current(env: &dyn Env) -> anyhow::Result<()> {
    let paths = kubeconfig_paths(env)?;
    let merged = load_merged(&paths)?;
    match merged.active_context() {
        Some(name) => {
            println!("{name}");
            Ok(())
        }
        None => bail!("current-context is not set"),
    }
}

pub fn switch(env: &dyn Env, state: &mut SwitchState, name: &str) -> anyhow::Result<()> {
    let path = kubeconfig_path(env)?;
    let mut doc = Kubeconfig::load(&path)?;
    let prior = doc.active_context().map(str::to_string);

    doc.set_current(name)?;
    doc.save(&path)?;

    if let Some(prior) = prior.filter(|p| p.as_str() != name) {
        if let Err(e) = state.record(&prior) {
            tracing::warn!("could not record previous context: {e}");
        }
    }
    eprintln!("Switched to context \"{name}\".");
    Ok(())
}

pub fn switch_previous(env: &dyn Env, state: &mut SwitchState) -> anyhow::Result<()> {
    let previous = state.previous_context.clone().context("no previous context to switch back to")?;
    switch(env, state, &previous)
}

pub fn rename(env: &dyn Env, old: &str, new: &str) -> anyhow::Result<()> {
    let path = kubeconfig_path(env)?;
    let mut doc = Kubeconfig::load(&path)?;
    let old = resolve_dot(&doc, old)?;

    doc.rename_context(&old, new)?;
    doc.save(&path)?;
    eprintln!("Renamed context \"{old}\" to \"{new}\".");
    Ok(())
}

pub fn delete(env: &dyn Env, names: &[String]) -> anyhow::Result<()> {
    let path = kubeconfig_path(env)?;
    let mut doc = Kubeconfig::load(&path)?;
    let mut deleted = Vec::new();

    for name in names {
        let name = resolve_dot(&doc, name)?;
        doc.delete_context(&name)?;
        deleted.push(name);
    }
    doc.save(&path)?;

    for name in deleted {
        eprintln!("Deleted context \"{name}\".");
    }
    Ok(())
}

pub fn unset(env: &dyn Env) -> anyhow::Result<()> {
    let path = kubeconfig_path(env)?;
    let mut doc = Kubeconfig::load(&path)?;
    doc.unset_current();
    doc.save(&path)?;
    eprintln!("Active context unset.");
    Ok(())
}

/// `.` stands for the current context in rename and delete targets.
fn resolve_dot(doc: &Kubeconfig, name: &str) -> anyhow::Result<String> {
    if name == "." {
        doc.active_context().map(str::to_string).context("no active context (current-context is not set)")
    } else {
        Ok(name.to_string())
    }
}
