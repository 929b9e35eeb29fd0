//! 运行时配置
//!
//! 浏览器中没有进程环境变量，配置在构建时通过 `option_env!` 注入：
//! - `TASKDESK_API_URL`: 后端 API 基础地址
//! - `TASKDESK_LOG_LEVEL`: 日志级别 (`error` / `warn` / `info` / `debug` / `trace` / `off`)

use log::LevelFilter;
use std::str::FromStr;

/// 未配置时的默认值
const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// 从构建时环境变量读取配置，读不到就用默认值
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("TASKDESK_API_URL"),
            option_env!("TASKDESK_LOG_LEVEL"),
        )
    }

    pub fn new(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or_else(default_log_level);

        Self {
            api_base_url,
            log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new(None, None);
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn test_trims_trailing_slash() {
        let config = AppConfig::new(Some(" https://api.example.com/ "), None);
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn test_blank_url_falls_back() {
        let config = AppConfig::new(Some("  "), None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(
            AppConfig::new(None, Some("warn")).log_level,
            LevelFilter::Warn
        );
        assert_eq!(
            AppConfig::new(None, Some("TRACE")).log_level,
            LevelFilter::Trace
        );
        assert_eq!(
            AppConfig::new(None, Some("loud")).log_level,
            default_log_level()
        );
    }
}
