//! Configuration loading and management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::persist::DEFAULT_DATA_FILE;

/// Tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the task data file.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Config {
    /// Load configuration from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations or return defaults.
    ///
    /// Tries `taskline.yaml` in the working directory, then
    /// `taskline/config.yaml` under the user config directory. The
    /// `TASKLINE_DATA_PATH` environment variable overrides whatever the
    /// file (or default) provides; CLI flags override both.
    pub fn load_or_default() -> Self {
        let mut config = Self::load("taskline.yaml")
            .ok()
            .or_else(|| {
                let dir = dirs::config_dir()?;
                Self::load(dir.join("taskline").join("config.yaml")).ok()
            })
            .unwrap_or_default();

        if let Ok(path) = std::env::var("TASKLINE_DATA_PATH") {
            config.data_path = PathBuf::from(path);
        }

        config
    }

    /// Ensure the data file's directory exists.
    pub fn ensure_data_dir(&self) -> Result<()> {
        if let Some(parent) = self.data_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_tasks_json() {
        let config = Config::default();
        assert_eq!(config.data_path, PathBuf::from("tasks.json"));
    }

    #[test]
    fn load_reads_data_path_from_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "data_path: /tmp/elsewhere/tasks.json\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(
            config.data_path,
            PathBuf::from("/tmp/elsewhere/tasks.json")
        );
    }

    #[test]
    fn load_defaults_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "{}\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_path, PathBuf::from("tasks.json"));
    }

    #[test]
    fn env_var_overrides_the_default_data_path() {
        // SAFETY: this is the only test that touches process environment,
        // and nothing else reads this variable concurrently.
        unsafe {
            std::env::set_var("TASKLINE_DATA_PATH", "/tmp/env-tasks.json");
        }
        let config = Config::load_or_default();
        unsafe {
            std::env::remove_var("TASKLINE_DATA_PATH");
        }

        assert_eq!(config.data_path, PathBuf::from("/tmp/env-tasks.json"));
    }

    #[test]
    fn ensure_data_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_path: dir.path().join("nested").join("tasks.json"),
        };
        config.ensure_data_dir().unwrap();
        assert!(dir.path().join("nested").is_dir());
    }
}
