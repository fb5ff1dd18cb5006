use anyhow::bail;

/// What a positional target argument asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Switch(String),
    SwitchPrevious,
    Rename { old: String, new: String },
}

/// Interprets the positional target: `-` toggles to the previous context,
/// `OLD=NEW` renames (with `.` standing for the current context), anything
/// else is a context name to switch to.
pub fn parse_target(target: &str) -> anyhow::Result<Action> {
    if target == "-" {
        return Ok(Action::SwitchPrevious);
    }
    if let Some((old, new)) = target.split_once('=') {
        if old.is_empty() || new.is_empty() {
            bail!("invalid rename \"{target}\": expected OLD=NEW");
        }
        return Ok(Action::Rename { old: old.to_string(), new: new.to_string() });
    }
    if target.is_empty() {
        bail!("context name must not be empty");
    }
    Ok(Action::Switch(target.to_string()))
}
