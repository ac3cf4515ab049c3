use crate::CaseStyle;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub style: CaseStyle,

    #[serde(default)]
    pub skip_blank: bool,

    #[serde(default = "default_color")]
    pub color: bool,
}

/// One config file as written: keys it leaves out stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct ConfigLayer {
    style: Option<CaseStyle>,
    skip_blank: Option<bool>,
    color: Option<bool>,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: CaseStyle::default(),
            skip_blank: false,
            color: default_color(),
        }
    }
}

/// Values supplied on the command line; `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub style: Option<CaseStyle>,
    pub skip_blank: bool,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let global = Self::global_config_path();
        Self::load_from(global.as_deref(), Path::new(LOCAL_CONFIG_FILE), overrides)
    }

    pub fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        // Local config overrides global
        if local.exists() {
            tracing::debug!(path = %local.display(), "loading local config");
            config = config.merge(Self::from_file(local)?);
        }

        if let Some(style) = overrides.style {
            config.style = style;
        }
        if overrides.skip_blank {
            config.skip_blank = true;
        }
        if overrides.no_color {
            config.color = false;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigLayer> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        // Every key the layer sets wins, even when it spells out a default
        if let Some(style) = layer.style {
            self.style = style;
        }
        if let Some(skip_blank) = layer.skip_blank {
            self.skip_blank = skip_blank;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.style, CaseStyle::Camel);
        assert!(!config.skip_blank);
        assert!(config.color);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let layer = ConfigLayer {
            style: Some(CaseStyle::Dot),
            ..Default::default()
        };

        let merged = base.merge(layer);
        assert_eq!(merged.style, CaseStyle::Dot);
        assert!(merged.color);
        assert!(!merged.skip_blank);
    }

    #[test]
    fn test_local_default_values_override_global() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");

        fs::write(&global, "style = \"kebab\"\ncolor = false\nskip_blank = true\n").unwrap();
        fs::write(&local, "style = \"camel\"\ncolor = true\nskip_blank = false\n").unwrap();

        let config = Config::load_from(Some(global.as_path()), &local, Overrides::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_layering() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");

        fs::write(&global, "style = \"kebab\"\ncolor = false\n").unwrap();
        fs::write(&local, "skip_blank = true\n").unwrap();

        let config = Config::load_from(Some(global.as_path()), &local, Overrides::default()).unwrap();
        assert_eq!(config.style, CaseStyle::Kebab);
        assert!(config.skip_blank);
        assert!(!config.color);

        let overrides = Overrides {
            style: Some(CaseStyle::Snake),
            ..Default::default()
        };
        let config = Config::load_from(Some(global.as_path()), &local, overrides).unwrap();
        assert_eq!(config.style, CaseStyle::Snake);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(
            Some(dir.path().join("nope.toml").as_path()),
            &dir.path().join("also-nope.toml"),
            Overrides::default(),
        )
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_names_path() {
        let dir = tempdir().unwrap();
        let local = dir.path().join("bad.toml");
        fs::write(&local, "style = \"title\"\n").unwrap();

        let err = Config::load_from(None, &local, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
