//! Quote Board 终端客户端
//!
//! ```text
//! ┌────────────────────────────── 主循环 (app.rs) ──────────────────────────────┐
//! │                                                                             │
//! │   ┌─────────┐          ┌───────────┐          ┌──────────┐                  │
//! │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │                  │
//! │   │   层    │   翻译    │    层     │   消费    │    层    │                  │
//! │   └─────────┘          └───────────┘          └────┬─────┘                  │
//! │        ▲                     ▲                     │ 修改 / 排入请求         │
//! │        │                     │ BackendEvent        ▼                        │
//! │   ┌─────────┐          ┌─────┴─────┐          ┌──────────┐                  │
//! │   │  View   │ ◀─ 读取 ─│           │          │  Model   │                  │
//! │   │   层    │          │  Backend  │ ◀─────── │    层    │                  │
//! │   └────┬────┘          │  (tokio)  │ Command  └──────────┘                  │
//! │        │               └─────┬─────┘                                        │
//! │        ▼                     ▼                                              │
//! │      终端             quote-board-client ──▶ REST 服务                       │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! 服务端地址来自配置文件的 `server_url`，可用环境变量 `QUOTE_BOARD_URL` 覆盖。

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};

use backend::{resolve_server_url, ConfigService, JsonConfigService, QuoteBackend, SERVER_URL_ENV};
use model::{App, SettingsState};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志（guard 必须存活到退出）
    let _log_guard = util::logging::init()?;
    tracing::info!("Starting Quote Board TUI v{}", env!("CARGO_PKG_VERSION"));

    // 2. 配置：读取失败时使用默认值继续运行
    let config_service = JsonConfigService::new();
    let mut config = config_service.load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load {}: {e:#}", config_service.path().display());
        backend::AppConfig::default()
    });

    let server_url = resolve_server_url(&config, std::env::var(SERVER_URL_ENV).ok());
    let client_config = config.client_config(&server_url)?;

    // 3. 界面语言与主题
    let settings = SettingsState::new(config.theme, config.language());
    update::apply_appearance(&settings);

    // 4. 后台请求运行时
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;
    let mut backend = QuoteBackend::connect(&client_config, runtime.handle().clone())?;

    // 5. 创建应用实例（会排入首次加载）
    let mut app = App::new(settings);

    // 6. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(
        &mut terminal,
        &mut app,
        &mut backend,
        &config_service,
        &mut config,
    );

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Quote Board TUI exited");
    result
}
