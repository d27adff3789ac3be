//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_file {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output.kv("timeout_secs", &ctx.config.api.timeout_secs.to_string());
    if ctx.api_url != ctx.config.api.base_url {
        ctx.output.kv("in use", &ctx.api_url);
    }

    ctx.output.info("[session]");
    ctx.output
        .kv("file", &ctx.session_file().display().to_string());
    match ctx.app.current_session() {
        Some(session) => ctx.output.kv("logged in as", &session.username),
        None => ctx.output.kv("logged in as", "-"),
    }

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = match &ctx.config_file {
        Some(path) => path.to_string_lossy().to_string(),
        None => find_config_file(&ctx.cwd)?,
    };

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config(&ctx.api_url);
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => Ok(config.api.base_url.clone()),
        ["api", "timeout_secs"] => Ok(config.api.timeout_secs.to_string()),
        ["session", "file"] => Ok(config.session.file.clone().unwrap_or_default()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => config.api.base_url = value.trim_end_matches('/').to_string(),
        ["api", "timeout_secs"] => config.api.timeout_secs = value.parse()?,
        ["session", "file"] => {
            config.session.file = Some(value.to_string()).filter(|v| !v.is_empty())
        }
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

fn find_config_file(cwd: &std::path::Path) -> Result<String> {
    for name in &CONFIG_FILE_NAMES {
        let path = cwd.join(name);
        if path.exists() {
            return Ok(path.to_string_lossy().to_string());
        }
    }
    bail!("No config file found. Run `eshop config init` to create one.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_known_keys() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "api.base_url", "https://shop.test/").unwrap();
        set_config_value(&mut config, "api.timeout_secs", "5").unwrap();
        assert_eq!(get_config_value(&config, "api.base_url").unwrap(), "https://shop.test");
        assert_eq!(get_config_value(&config, "api.timeout_secs").unwrap(), "5");

        set_config_value(&mut config, "session.file", "").unwrap();
        assert!(config.session.file.is_none());
    }

    #[test]
    fn test_unknown_and_malformed_values() {
        let mut config = CliConfig::default();
        assert!(get_config_value(&config, "api.token").is_err());
        assert!(set_config_value(&mut config, "api.timeout_secs", "soon").is_err());
    }
}
