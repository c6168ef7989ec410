use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wordbook_config::Config;

fn wordbook_root() -> anyhow::Result<PathBuf> {
    let dir = dirs::config_dir().context("no config directory on this platform")?;
    Ok(dir.join("wordbook"))
}

pub fn profiles_dir() -> anyhow::Result<PathBuf> {
    Ok(wordbook_root()?.join("profiles"))
}

/// Named config stored as `<profiles>/<name>.json`
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn profile_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.json"))
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let profile: Profile =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(profile.value)
}

fn write_profile(path: &Path, profile: &Profile) -> anyhow::Result<()> {
    fs::write(path, serde_json::to_string_pretty(profile)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Create `dir` and a default main profile if missing, returns the main profile path
pub fn init_profiles_in(dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let main_profile = profile_path(dir, "main");
    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: Config::new(),
        };
        write_profile(&main_profile, &profile)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(main_profile)
}

/// Load a profile by name, falling back to main and then to defaults
pub fn load_profile_from(dir: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = profile_path(dir, name);
    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    let main_file = profile_path(dir, "main");
    if main_file.exists() {
        if name != "main" {
            tracing::warn!("Profile {name} not found, falling back to main profile");
        }
        read_profile(&main_file)
    } else {
        tracing::debug!("No profiles in {}, using defaults", dir.display());
        Ok(Config::new())
    }
}

/// New profile cloned from main (or defaults if main is missing)
pub fn add_profile_in(dir: &Path, new_name: &str) -> anyhow::Result<PathBuf> {
    let file = profile_path(dir, new_name);
    anyhow::ensure!(!file.exists(), "profile {new_name} already exists");

    let profile = Profile {
        name: new_name.into(),
        value: load_profile_from(dir, "main")?,
    };
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    write_profile(&file, &profile)?;
    tracing::info!("Created new profile: {new_name}");

    Ok(file)
}

pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    match profiles_dir() {
        Ok(dir) => load_profile_from(&dir, name),
        Err(e) => {
            tracing::warn!("{e}, using default config");
            Ok(Config::new())
        }
    }
}
