use crate::error::{ArtVisionError, Result};
use crate::submission::Latency;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// カタログパスを上書きする環境変数
pub const CATALOG_ENV: &str = "ART_VISION_CATALOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// カタログJSON（未設定なら組み込みサンプル）
    pub catalog_path: Option<PathBuf>,
    pub processing_min_ms: u64,
    pub processing_max_ms: u64,
    pub persistence_ms: u64,
    /// 揺らぎの乱数シード（未設定なら毎回異なる）
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            processing_min_ms: 3000,
            processing_max_ms: 5000,
            persistence_ms: 1000,
            seed: None,
        }
    }
}

impl Config {
    /// 既定の場所から読み込む（ファイルがなければ既定値）
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }
        let config: Config = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 不正な値は書き込まない
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// ~/.config/art-vision/config.json
    pub fn config_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".config").join("art-vision").join("config.json"))
            .ok_or_else(|| ArtVisionError::Config("ホームディレクトリが見つかりません".into()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.processing_min_ms > self.processing_max_ms {
            return Err(ArtVisionError::Config(format!(
                "processing_min_ms ({}) が processing_max_ms ({}) を超えています",
                self.processing_min_ms, self.processing_max_ms
            )));
        }
        Ok(())
    }

    /// 使用するカタログ（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_catalog_path(&self, cli_override: Option<PathBuf>) -> Option<PathBuf> {
        cli_override
            .or_else(|| std::env::var_os(CATALOG_ENV).map(PathBuf::from))
            .or_else(|| self.catalog_path.clone())
    }

    pub fn latency(&self) -> Latency {
        Latency {
            processing_min: Duration::from_millis(self.processing_min_ms),
            processing_max: Duration::from_millis(self.processing_max_ms),
            persistence: Duration::from_millis(self.persistence_ms),
        }
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = Some(path);
        self.save()
    }

    pub fn set_seed(&mut self, seed: u64) -> Result<()> {
        self.seed = Some(seed);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latency() {
        let latency = Config::default().latency();
        assert_eq!(latency.processing_min, Duration::from_millis(3000));
        assert_eq!(latency.processing_max, Duration::from_millis(5000));
        assert_eq!(latency.persistence, Duration::from_millis(1000));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.processing_max_ms, 5000);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = Config {
            processing_min_ms: 6000,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ArtVisionError::Config(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            catalog_path: Some(PathBuf::from("/data/catalog.json")),
            seed: Some(7),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_rejected_on_load() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"processing_min_ms": 9000, "processing_max_ms": 1000}"#).unwrap();

        assert!(matches!(Config::load_from(&path), Err(ArtVisionError::Config(_))));
    }

    #[test]
    fn test_invalid_config_not_saved() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        let config = Config {
            processing_min_ms: 6000,
            ..Default::default()
        };

        assert!(config.save_to(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config {
            catalog_path: Some(PathBuf::from("/from/config.json")),
            ..Default::default()
        };
        let resolved = config.resolve_catalog_path(Some(PathBuf::from("/from/cli.json")));
        assert_eq!(resolved, Some(PathBuf::from("/from/cli.json")));
    }
}
