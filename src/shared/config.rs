//! Application configuration. Delays, export directory, RNG seed.

use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
pub const DEFAULT_RUN_DELAY_MS: u64 = 2000;
pub const DEFAULT_LESSON_DELAY_MS: u64 = 1000;
pub const DEFAULT_GREETING_DELAY_MS: u64 = 2000;
pub const DEFAULT_EXPORT_DIR: &str = "./code";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// BugBot "typing" delay in ms. Read from TECHIBUG_REPLY_DELAY_MS.
    #[serde(default)]
    pub reply_delay_ms: Option<u64>,

    /// Terminal run delay in ms. Read from TECHIBUG_RUN_DELAY_MS.
    #[serde(default)]
    pub run_delay_ms: Option<u64>,

    /// Lesson sandbox run delay in ms. Read from TECHIBUG_LESSON_DELAY_MS.
    #[serde(default)]
    pub lesson_delay_ms: Option<u64>,

    /// Delay before BugBot's greeting notice in ms. Read from TECHIBUG_GREETING_DELAY_MS.
    #[serde(default)]
    pub greeting_delay_ms: Option<u64>,

    /// Where exported code lands. Read from TECHIBUG_EXPORT_DIR.
    #[serde(default)]
    pub export_dir: Option<String>,

    /// Fixed seed for reply selection (reproducible sessions). Read from TECHIBUG_RNG_SEED.
    #[serde(default)]
    pub rng_seed: Option<u64>,

    /// Skip all simulated delays. Read from TECHIBUG_INSTANT.
    #[serde(default)]
    pub instant: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("TECHIBUG_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // env wins over the file
        c = c.add_source(config::Environment::with_prefix("TECHIBUG").try_parsing(true));
        c.build()?.try_deserialize()
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms.unwrap_or(DEFAULT_REPLY_DELAY_MS))
    }

    pub fn run_delay(&self) -> Duration {
        Duration::from_millis(self.run_delay_ms.unwrap_or(DEFAULT_RUN_DELAY_MS))
    }

    pub fn lesson_delay(&self) -> Duration {
        Duration::from_millis(self.lesson_delay_ms.unwrap_or(DEFAULT_LESSON_DELAY_MS))
    }

    pub fn greeting_delay(&self) -> Duration {
        Duration::from_millis(self.greeting_delay_ms.unwrap_or(DEFAULT_GREETING_DELAY_MS))
    }

    pub fn export_dir_or_default(&self) -> &str {
        self.export_dir.as_deref().unwrap_or(DEFAULT_EXPORT_DIR)
    }

    pub fn is_instant(&self) -> bool {
        self.instant.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.reply_delay(), Duration::from_millis(1000));
        assert_eq!(cfg.run_delay(), Duration::from_millis(2000));
        assert_eq!(cfg.lesson_delay(), Duration::from_millis(1000));
        assert_eq!(cfg.greeting_delay(), Duration::from_millis(2000));
        assert_eq!(cfg.export_dir_or_default(), "./code");
        assert!(!cfg.is_instant());
        assert!(cfg.rng_seed.is_none());
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig {
            reply_delay_ms: Some(5),
            run_delay_ms: Some(0),
            greeting_delay_ms: Some(50),
            export_dir: Some("/tmp/out".into()),
            instant: Some(true),
            ..Default::default()
        };
        assert_eq!(cfg.reply_delay(), Duration::from_millis(5));
        assert_eq!(cfg.run_delay(), Duration::ZERO);
        assert_eq!(cfg.greeting_delay(), Duration::from_millis(50));
        assert_eq!(cfg.export_dir_or_default(), "/tmp/out");
        assert!(cfg.is_instant());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("techibug.toml");
        std::fs::write(&path, "run_delay_ms = 250\nrng_seed = 9\n").unwrap();

        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.run_delay(), Duration::from_millis(250));
        assert_eq!(cfg.rng_seed, Some(9));
    }
}
