use std::collections::HashMap;
use std::path::Path;

use super::*;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn xdg_cache_home_takes_precedence() {
    let env = env(&[("XDG_CACHE_HOME", "xdg"), ("HOME", "home")]);
    assert_eq!(home_dir(&env), Some("xdg".to_string()));
}

#[test]
fn home_wins_over_userprofile() {
    let env = env(&[("HOME", "home"), ("USERPROFILE", "up")]);
    assert_eq!(home_dir(&env), Some("home".to_string()));
}

#[test]
fn only_userprofile_available() {
    let env = env(&[("XDG_CACHE_HOME", ""), ("HOME", ""), ("USERPROFILE", "up")]);
    assert_eq!(home_dir(&env), Some("up".to_string()));
}

#[test]
fn empty_values_count_as_unset() {
    let env = env(&[("XDG_CACHE_HOME", ""), ("HOME", ""), ("USERPROFILE", "")]);
    assert_eq!(home_dir(&env), None);
}

#[test]
fn default_path_is_under_home() {
    let env = env(&[("HOME", "/x/y/z")]);
    let expected = Path::new("/x/y/z").join(".kube").join("config");
    assert_eq!(kubeconfig_path(&env).unwrap(), expected);
}

#[test]
fn override_wins_verbatim() {
    let env = env(&[("KUBECONFIG", "foo"), ("HOME", "/x/y/z")]);
    assert_eq!(kubeconfig_path(&env).unwrap(), Path::new("foo"));
}

#[test]
fn override_with_separator_is_rejected() {
    let value = format!("file1{LIST_SEPARATOR}file2");
    let env = env(&[("KUBECONFIG", value.as_str())]);
    let err = kubeconfig_path(&env).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidOverride(_)), "got {err:?}");
}

#[test]
fn empty_override_is_ignored() {
    let env = env(&[("KUBECONFIG", ""), ("HOME", "/x/y/z")]);
    let expected = Path::new("/x/y/z").join(".kube").join("config");
    assert_eq!(kubeconfig_path(&env).unwrap(), expected);
}

#[test]
fn no_home_is_fatal() {
    let env = env(&[]);
    let err = kubeconfig_path(&env).unwrap_err();
    assert!(matches!(err, ConfigError::HomeNotResolvable), "got {err:?}");
}

#[test]
fn read_paths_split_on_separator() {
    let value = format!("a{LIST_SEPARATOR}b{LIST_SEPARATOR}{LIST_SEPARATOR}c");
    let env = env(&[("KUBECONFIG", value.as_str())]);
    let paths = kubeconfig_paths(&env).unwrap();
    assert_eq!(paths, vec![Path::new("a"), Path::new("b"), Path::new("c")]);
}

#[test]
fn read_paths_fall_back_to_home() {
    let env = env(&[("HOME", "/x/y/z")]);
    let paths = kubeconfig_paths(&env).unwrap();
    assert_eq!(paths, vec![Path::new("/x/y/z").join(".kube").join("config")]);
}

#[test]
fn read_paths_with_only_separators_fall_back_to_home() {
    let value = LIST_SEPARATOR.to_string();
    let env = env(&[("KUBECONFIG", value.as_str()), ("HOME", "/x/y/z")]);
    let paths = kubeconfig_paths(&env).unwrap();
    assert_eq!(paths, vec![Path::new("/x/y/z").join(".kube").join("config")]);
}
