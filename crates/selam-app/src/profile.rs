use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use selam_config::Config;
use serde::{Deserialize, Serialize};

/// Config root: SELAM_CONFIG_DIR override, else the OS config directory
fn selam_root() -> PathBuf {
    match env::var("SELAM_CONFIG_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Selam"),
    }
}

fn profiles_dir() -> PathBuf {
    selam_root().join("profiles")
}

/// Represents a named config profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize config folders and the main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    init_profiles_in(&profiles_dir())
}

pub(crate) fn init_profiles_in(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;

    let main_profile = dir.join("main.json");
    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: Config::new(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a profile by name, falling back to main, then to built-in defaults
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    load_profile_from(&profiles_dir(), name)
}

pub(crate) fn load_profile_from(dir: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = dir.join(format!("{name}.json"));

    if profile_file.exists() {
        let data = fs::read_to_string(profile_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        return Ok(profile.value);
    }

    if name != "main" {
        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
    }

    let main_file = dir.join("main.json");
    if main_file.exists() {
        let data = fs::read_to_string(main_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile.value)
    } else {
        Ok(Config::new())
    }
}

/// Resolve the effective config for a CLI invocation; never fails
pub fn load_or_default(name: Option<&str>) -> Config {
    let name = name.unwrap_or("main");
    load_user_profile(name).unwrap_or_else(|e| {
        tracing::warn!("Failed to load profile {name}: {e}; using defaults");
        Config::new()
    })
}
