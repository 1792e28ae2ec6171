use std::path::PathBuf;

use tagsight_runtime_config::{Config, CONFIG_FILE_NAME};

pub fn config_dir() -> Option<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()?;
    Some(PathBuf::from(home).join(".config").join("tagsight"))
}

/// Load `~/.config/tagsight/tagsight.toml`; absent or unparseable files
/// yield the defaults.
pub fn load_config() -> Config {
    let Some(dir) = config_dir() else {
        return Config::default();
    };
    let path = dir.join(CONFIG_FILE_NAME);
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}
