use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Width of the default date window in days. The default `after`
    /// bound is midnight this many days before now.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

fn default_window_days() -> i64 {
    30
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.search.window_days < 1 {
        anyhow::bail!("search.window_days must be >= 1");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("embedscan.toml");
        fs::write(&path, content).unwrap();
        (tmp, path)
    }

    #[test]
    fn loads_full_config() {
        let (_tmp, path) = write_config(
            r#"[db]
path = "./data/embedscan.sqlite"

[search]
window_days = 14
"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.db.path, PathBuf::from("./data/embedscan.sqlite"));
        assert_eq!(config.search.window_days, 14);
    }

    #[test]
    fn search_section_is_optional() {
        let (_tmp, path) = write_config("[db]\npath = \"./data/embedscan.sqlite\"\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.search.window_days, 30);
    }

    #[test]
    fn rejects_non_positive_window() {
        let (_tmp, path) = write_config(
            "[db]\npath = \"./data/embedscan.sqlite\"\n\n[search]\nwindow_days = 0\n",
        );
        assert!(load_config(&path).is_err());
    }
}
