use crate::output::{Output, OutputFormat};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::{Path, PathBuf};
use wanted_config::{Config, ConnectionConfig, PathManager, API_KEY_PLACEHOLDER};

pub fn run_config(cmd: crate::ConfigCommands, config_path: Option<PathBuf>, output: &Output) -> Result<()> {
    let path = resolve_config_path(config_path);
    match cmd {
        crate::ConfigCommands::Show { full } => show_config(&path, full, output),
        crate::ConfigCommands::Init { base_url, api_key, port, include_data, force } => {
            let connection = ConnectionConfig { base_url, port, api_key, include_data };
            init_config(&path, connection, force, output)
        }
    }
}

/// Explicit `--config` path, otherwise the platform default location
pub fn resolve_config_path(config_path: Option<PathBuf>) -> PathBuf {
    config_path.unwrap_or_else(|| PathManager::default().config_file())
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let path = resolve_config_path(config_path);
    if !path.exists() {
        return Err(eyre!(
            "Configuration file not found at: {}. Run 'wantedlist config init' first.",
            path.display()
        ));
    }
    Config::load_from_file(&path)
        .wrap_err_with(|| format!("Failed to load config from {}", path.display()))
}

fn show_config(path: &Path, full: bool, output: &Output) -> Result<()> {
    if !path.exists() {
        output.warn(format!("Configuration file not found at: {}", path.display()));
        output.info("Create one with 'wantedlist config init --base-url <URL> --api-key <KEY>'.");
        return Ok(());
    }

    let config = Config::load_from_file(path)
        .wrap_err_with(|| format!("Failed to load config from {}", path.display()))?;
    let cp = &config.couchpotato;
    let api_key_display = if full { cp.api_key.clone() } else { mask_string(&cp.api_key) };

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("CouchPotato Configuration").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold),
                Cell::new(path.display().to_string()),
            ]);
            table.add_row(vec![Cell::new("Base URL"), Cell::new(&cp.base_url)]);
            table.add_row(vec![Cell::new("Port"), Cell::new(cp.port)]);
            table.add_row(vec![Cell::new("API Key"), Cell::new(api_key_display)]);
            table.add_row(vec![
                Cell::new("Include Quality Data"),
                Cell::new(if cp.include_data { "✓".green().to_string() } else { "✗".red().to_string() }),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", table);

            if let Err(e) = config.validate() {
                output.warn(e.to_string());
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": path.display().to_string(),
                "couchpotato": {
                    "base_url": cp.base_url,
                    "port": cp.port,
                    "api_key": api_key_display,
                    "include_data": cp.include_data,
                },
                "valid": config.validate().is_ok(),
            }));
        }
    }

    Ok(())
}

fn init_config(path: &Path, connection: ConnectionConfig, force: bool, output: &Output) -> Result<()> {
    if path.exists() && !force {
        return Err(eyre!(
            "Configuration file already exists at {}. Use --force to overwrite it.",
            path.display()
        ));
    }

    let config = Config { couchpotato: connection };
    config.validate()?;
    config
        .save_to_file(path)
        .wrap_err_with(|| format!("Failed to write config to {}", path.display()))?;

    output.success(format!("Configuration saved to {}", path.display()));
    Ok(())
}

fn mask_string(s: &str) -> String {
    if s.is_empty() || s == API_KEY_PLACEHOLDER {
        return "<not set>".to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet_output() -> Output {
        Output::new(OutputFormat::Human, true)
    }

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string(""), "<not set>");
        assert_eq!(mask_string(API_KEY_PLACEHOLDER), "<not set>");
        assert_eq!(mask_string("abcd"), "****");
        assert_eq!(mask_string("0123456789abcdef"), "01***ef");
        assert_eq!(mask_string("ké€y-secret-ü€"), "ké***ü€");
        assert_eq!(mask_string("€€€"), "***");
    }

    #[test]
    fn test_init_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut connection = ConnectionConfig::new("http://localhost", "abc123");
        connection.include_data = true;

        init_config(&path, connection.clone(), false, &quiet_output()).unwrap();
        let loaded = load_config(Some(path)).unwrap();

        assert_eq!(loaded.couchpotato, connection);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let connection = ConnectionConfig::new("http://localhost", "abc123");

        init_config(&path, connection.clone(), false, &quiet_output()).unwrap();
        assert!(init_config(&path, connection.clone(), false, &quiet_output()).is_err());
        assert!(init_config(&path, connection, true, &quiet_output()).is_ok());
    }

    #[test]
    fn test_init_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let connection = ConnectionConfig::new("localhost", "abc123");

        assert!(init_config(&path, connection, false, &quiet_output()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("wantedlist config init"));
    }
}
