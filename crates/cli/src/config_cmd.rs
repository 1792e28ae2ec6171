use std::path::PathBuf;

use anyhow::{Context, Result};
use tagsight_runtime_config::{Config, CONFIG_FILE_NAME};

pub fn config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Could not determine home directory")?;
    Ok(PathBuf::from(home).join(".config").join("tagsight"))
}

/// Load `~/.config/tagsight/tagsight.toml`; absent or unparseable files
/// yield the defaults.
pub fn load_config() -> Config {
    let Ok(dir) = config_dir() else {
        return Config::default();
    };
    std::fs::read_to_string(dir.join(CONFIG_FILE_NAME))
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn save_config(config: &Config) -> Result<()> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(CONFIG_FILE_NAME);
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Print the active configuration.
pub fn show_config() -> Result<()> {
    let config = load_config();
    if let Ok(dir) = config_dir() {
        println!("# {}", dir.join(CONFIG_FILE_NAME).display());
    }
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Update the given fields and persist the result.
pub fn set_config(user_id: Option<String>, logo: Option<String>) -> Result<()> {
    let mut config = load_config();
    if let Some(user_id) = user_id {
        config.identity.user_id = user_id;
    }
    if let Some(logo) = logo {
        config.branding.logo_path = logo;
    }
    save_config(&config)?;
    println!("Configuration updated.");
    Ok(())
}
