//! 配置服务
//!
//! 配置保存在 `<配置目录>/quote-board-tui/config.json`，文件不存在时使用默认值。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use quote_board_client::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::model::state::Theme;

/// 覆盖 `server_url` 的环境变量
pub const SERVER_URL_ENV: &str = "QUOTE_BOARD_URL";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 服务端根地址
    pub server_url: String,
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
    /// 读请求的自动重试次数
    pub max_retries: u32,
    pub theme: Theme,
    /// 语言代码（BCP 47）
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
            max_retries: 0,
            theme: Theme::Dark,
            language: Language::EnUs.code().to_string(),
        }
    }
}

impl AppConfig {
    /// 界面语言，无法识别的代码回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', using default", self.language);
            Language::default()
        })
    }

    /// 生成客户端配置
    pub fn client_config(&self, server_url: &str) -> Result<ClientConfig> {
        let config = ClientConfig::new(server_url)
            .with_context(|| format!("Invalid server URL '{server_url}'"))?
            .with_request_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_retries(self.max_retries);
        Ok(config)
    }
}

/// 决定实际使用的服务端地址：环境变量优先，且不写回配置文件
pub fn resolve_server_url(config: &AppConfig, env_value: Option<String>) -> String {
    env_value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| config.server_url.clone())
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quote-board-tui")
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str) -> JsonConfigService {
        let path = std::env::temp_dir()
            .join(format!("quote-board-tui-test-{}", std::process::id()))
            .join(name)
            .join("config.json");
        let _ = std::fs::remove_file(&path);
        JsonConfigService::with_path(path)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let service = temp_config("missing");
        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn save_then_load() {
        let service = temp_config("save");
        let config = AppConfig {
            server_url: "http://quotes.internal:9000".into(),
            theme: Theme::Light,
            language: "zh-CN".into(),
            ..AppConfig::default()
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let service = temp_config("partial");
        std::fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        std::fs::write(service.path(), r#"{ "theme": "light" }"#).unwrap();

        let config = service.load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.server_url, AppConfig::default().server_url);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let service = temp_config("malformed");
        std::fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        std::fs::write(service.path(), "not json").unwrap();

        assert!(service.load().is_err());
    }

    #[test]
    fn env_overrides_server_url() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_server_url(&config, Some(" http://10.0.0.2:8080 ".into())),
            "http://10.0.0.2:8080"
        );
        assert_eq!(resolve_server_url(&config, Some("  ".into())), config.server_url);
        assert_eq!(resolve_server_url(&config, None), config.server_url);
    }

    #[test]
    fn unknown_language_falls_back() {
        let config = AppConfig {
            language: "fr-FR".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn invalid_server_url_is_rejected() {
        let config = AppConfig::default();
        assert!(config.client_config("ftp://example.com").is_err());
        assert!(config.client_config("http://example.com/api").is_ok());
    }
}
