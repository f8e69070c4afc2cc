//! 日志初始化
//!
//! TUI 占用了 stdout，所以日志写入按天滚动的文件：
//! `<数据目录>/quote-board-tui/logs/quote-board-tui.YYYY-MM-DD.log`。
//!
//! 日志级别由 `RUST_LOG` 控制，默认 `info`。
//! `log` crate 的记录会经由 tracing-log 桥接进来。

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_DIR: &str = "quote-board-tui";

/// 日志目录
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join("logs")
}

/// 初始化日志系统
///
/// 返回的 guard 必须存活到程序退出，否则缓冲区中的日志会丢失。
pub fn init() -> Result<WorkerGuard> {
    let dir = log_dir();
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(APP_DIR)
        .filename_suffix("log")
        .build(&dir)
        .with_context(|| format!("Failed to create log file in {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(guard)
}
