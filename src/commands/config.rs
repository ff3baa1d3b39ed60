use crate::config::{Config, config_path, load_from_path};
use anyhow::{Context, Result};
use std::path::Path;

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    // Walk the serialized config with dot notation: "api.base_url"
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", key))?;
    }

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        serde_json::Value::Null => println!("(not set)"),
        v => println!("{}", v),
    }

    Ok(())
}

pub fn set(key: &str, value: &str) -> Result<()> {
    let path = config_path()?;
    set_in_file(&path, key, value)?;
    println!("✓ {} = {}", key, value);
    Ok(())
}

/// Update one dotted key in the TOML file, creating the file and any
/// intermediate tables. The result must still load and validate; otherwise
/// the file is left untouched. Comments are not preserved.
pub fn set_in_file(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut root: toml::Table = if path.exists() {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        content.parse().context("Failed to parse config file")?
    } else {
        toml::Table::new()
    };

    let parts: Vec<&str> = key.split('.').collect();
    let Some((leaf, tables)) = parts.split_last() else {
        anyhow::bail!("Empty config key");
    };
    if leaf.is_empty() || tables.iter().any(|t| t.is_empty()) {
        anyhow::bail!("Invalid config key '{}'", key);
    }

    let mut table = &mut root;
    for name in tables {
        table = table
            .entry(name.to_string())
            .or_insert(toml::Value::Table(toml::Table::new()))
            .as_table_mut()
            .with_context(|| format!("'{}' is not a table", name))?;
    }
    table.insert(leaf.to_string(), parse_value(value));

    let rendered = toml::to_string_pretty(&root).context("Failed to serialize config")?;
    let tmp = path.with_extension("toml.tmp");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(&tmp, rendered).context("Failed to write config file")?;

    if let Err(e) = load_from_path(&tmp) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.context(format!("Rejected {} = {}", key, value)));
    }
    std::fs::rename(&tmp, path).context("Failed to replace config file")?;

    Ok(())
}

/// Integers and booleans keep their type; everything else is a string.
fn parse_value(raw: &str) -> toml::Value {
    if let Ok(i) = raw.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(b) = raw.parse::<bool>() {
        return toml::Value::Boolean(b);
    }
    toml::Value::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(
            parse_value("http://x"),
            toml::Value::String("http://x".to_string())
        );
    }
}
