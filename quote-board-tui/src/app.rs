//! 主循环
//!
//! 每一轮：
//!
//! 1. 把 Update 层排入的请求交给 Backend
//! 2. 取出已完成的请求结果，作为 `AppMessage::Backend` 交给 Update 层
//! 3. 设置有修改时写回配置文件
//! 4. 渲染 UI
//! 5. 轮询键盘事件（100ms 超时），翻译成消息并更新状态
//!
//! 轮询超时保证了即使没有按键，后台结果也会在 100ms 内显示出来。

use std::time::Duration;

use anyhow::Result;

use crate::backend::{AppConfig, ConfigService, QuoteBackend};
use crate::event;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &mut QuoteBackend,
    config_service: &dyn ConfigService,
    config: &mut AppConfig,
) -> Result<()> {
    loop {
        for command in app.take_commands() {
            backend.dispatch(command);
        }

        while let Some(result) = backend.try_recv() {
            update::update(app, AppMessage::Backend(result));
        }

        if app.settings.take_dirty() {
            save_settings(app, config_service, config);
        }

        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}

/// 把设置页面的修改写回配置文件，失败只提示不退出
fn save_settings(app: &mut App, config_service: &dyn ConfigService, config: &mut AppConfig) {
    config.theme = app.settings.theme;
    config.language = app.settings.language.code().to_string();

    if let Err(e) = config_service.save(config) {
        log::warn!("Failed to save settings: {e:#}");
        app.set_status(format!("{} {e}", t().status.settings_save_failed));
    }
}
