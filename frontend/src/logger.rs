//! 日志初始化
//!
//! 浏览器中交给 `console_log` 输出到控制台，本地测试时使用 `env_logger`。

use log::{LevelFilter, SetLoggerError};

/// 安装全局日志后端，只有第一次调用生效
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    match level.to_level() {
        Some(level) => console_log::init_with_level(level),
        None => {
            log::set_max_level(LevelFilter::Off);
            Ok(())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    env_logger::Builder::new().filter_level(level).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_applies_level_once() {
        assert!(init(LevelFilter::Debug).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(init(LevelFilter::Warn).is_err());
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
