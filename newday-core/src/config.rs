use crate::error::{Error, Result};
use chrono_tz::Tz;
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Where the day's puzzle unlocks. All "now" comparisons happen in this zone
/// so day boundaries don't shift with the host locale.
const DEFAULT_TIMEZONE: &str = "US/Eastern";
const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the `{year}/inputs` and `{year}/solutions` trees are created under.
    /// Defaults to the invocation directory.
    pub root_dir: PathBuf,
    /// Solution template, read once per run. Placeholders `{year}` and `{day}`
    /// are replaced literally.
    pub template_path: PathBuf,
    /// Timezone used for every date comparison.
    pub timezone: Tz,
    /// Base URL inputs are fetched from. Overridable so tests can point at a
    /// local server.
    pub base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    root_dir: Option<PathBuf>,
    template_path: Option<PathBuf>,
    timezone: Option<String>,
    base_url: Option<String>,
}

impl Config {
    /// Load config from disk (first XDG path, then native) and apply defaults.
    /// A missing config file is fine; a present-but-broken one is not.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;

        let timezone = match file_config.timezone.as_deref() {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| Error::Config(format!("invalid timezone: {name}")))?,
            None => DEFAULT_TIMEZONE.parse::<Tz>().expect("valid timezone"),
        };

        Ok(Self {
            root_dir: file_config.root_dir.unwrap_or_else(|| PathBuf::from(".")),
            template_path: file_config
                .template_path
                .unwrap_or_else(|| PathBuf::from("TEMPLATE_FILE.py")),
            timezone,
            base_url: file_config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("newday")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("newday").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s = fs::read_to_string(&path)?;
            return Self::parse_file(&s)
                .map_err(|e| Error::Config(format!("parsing {}: {e}", path.display())));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> std::result::Result<FileConfig, toml::de::Error> {
        toml::from_str::<FileConfig>(s)
    }
}
