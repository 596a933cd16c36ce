use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ACCOUNT: &str = "suandre35";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub account: String,
    pub api_base: String,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>, cli_account: Option<String>) -> Self {
        let config_file = config_path.unwrap_or_else(default_config_file);

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("FOLIO_").ignore(&["LOG"]));

        if let Some(account) = cli_account {
            figment = figment.merge(Serialized::default("account", account));
        }

        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }

    pub fn resolved_log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| state_dir().join("folio").join("folio.log"))
    }
}

pub fn default_config_file() -> PathBuf {
    config_dir().join("folio").join("config.toml")
}

pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", Path::new(".config"))
}

fn state_dir() -> PathBuf {
    xdg_dir("XDG_STATE_HOME", &Path::new(".local").join("state"))
}

fn xdg_dir(var: &str, home_relative: &Path) -> PathBuf {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(home_relative))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn missing_file() -> Option<PathBuf> {
        Some(PathBuf::from("/nonexistent/folio/config.toml"))
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        std::env::remove_var("FOLIO_ACCOUNT");
        std::env::remove_var("FOLIO_API_BASE");
        let config = Config::load(missing_file(), None);
        assert_eq!(config, Config::default());
        assert_eq!(config.account, "suandre35");
    }

    #[test]
    #[serial]
    fn test_file_then_env_then_cli() {
        std::env::remove_var("FOLIO_ACCOUNT");
        std::env::remove_var("FOLIO_API_BASE");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "account = \"from-file\"\napi_base = \"http://localhost:9000\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.clone()), None);
        assert_eq!(config.account, "from-file");
        assert_eq!(config.api_base, "http://localhost:9000");

        std::env::set_var("FOLIO_ACCOUNT", "from-env");
        let config = Config::load(Some(path.clone()), None);
        assert_eq!(config.account, "from-env");

        let config = Config::load(Some(path), Some("from-cli".to_string()));
        assert_eq!(config.account, "from-cli");
        std::env::remove_var("FOLIO_ACCOUNT");
    }

    #[test]
    #[serial]
    fn test_broken_file_falls_back_to_defaults() {
        std::env::remove_var("FOLIO_ACCOUNT");
        std::env::remove_var("FOLIO_API_BASE");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "account = [1, 2").unwrap();

        assert_eq!(Config::load(Some(path), None), Config::default());
    }

    #[test]
    #[serial]
    fn test_log_file_under_state_dir() {
        std::env::set_var("XDG_STATE_HOME", "/tmp/folio-state");
        let config = Config::default();
        assert_eq!(
            config.resolved_log_file(),
            PathBuf::from("/tmp/folio-state/folio/folio.log")
        );
        std::env::remove_var("XDG_STATE_HOME");
    }
}
