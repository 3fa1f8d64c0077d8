use crate::error::{PizzaError, Result};
use crate::types::config::PizzaConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "pizza.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".pizza/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/pizza-match/config.toml";

pub fn load_config(root: &Path) -> Result<Option<PizzaConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges the global, project and local layers, then validates the result.
/// Returns `None` when the project has no `pizza.toml`.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<PizzaConfig>> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    if !project_path.exists() {
        return Ok(None);
    }

    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([project_path, root.join(DEFAULT_LOCAL_FILE)])
        .filter(|path| path.exists());

    let mut merged = Value::Table(Map::new());
    for path in layers {
        tracing::debug!(path = %path.display(), "merging config layer");
        merge_toml(&mut merged, read_toml_value(&path)?);
    }

    let cfg: PizzaConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PizzaError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PizzaError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::ReportFormatConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_project_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[report]
format = "json"

[limits]
max_toppings = 4
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[selections]
crust = "Thick crust"
sauce = "A lot"
toppings = ["Ham"]

[limits]
max_toppings = 3
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".pizza")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[selections]
sauce = "No sauce"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.max_toppings(), 3);
        assert_eq!(cfg.report_format(), Some(ReportFormatConfig::Json));
        let selections = cfg.selections().expect("selections should build");
        assert_eq!(selections.crust.as_deref(), Some("Thick crust"));
        assert_eq!(selections.sauce.as_deref(), Some("No sauce"));
        assert_eq!(selections.toppings.joined(), "Ham");
    }

    #[test]
    fn load_config_rejects_merged_config_that_fails_validation() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[selections]
toppings = ["Ham", "Bacon"]
"#,
        )
        .expect("project config should write");
        fs::create_dir_all(root.path().join(".pizza")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[limits]
max_toppings = 1
"#,
        )
        .expect("local override should write");

        let err = load_config_with_global(root.path(), None).expect_err("limit should be enforced");
        assert!(matches!(
            err,
            PizzaError::ToppingLimit {
                limit: 1,
                requested: 2
            }
        ));
    }

    #[test]
    fn load_config_reports_malformed_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[selections\ncrust = 1")
            .expect("broken config should write");
        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(matches!(err, PizzaError::ConfigParse(_)));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
