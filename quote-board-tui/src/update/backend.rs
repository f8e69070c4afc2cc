//! 后台请求结果的更新逻辑
//!
//! 把 `BackendEvent` 回填到 `QuotesState`，并更新状态栏或弹窗。

use crate::i18n::t;
use crate::message::BackendEvent;
use crate::model::App;

/// 处理后台请求结果
pub fn update(app: &mut App, event: BackendEvent) {
    let texts = t();

    match event {
        BackendEvent::Loaded(Ok(quotes)) => {
            let count = quotes.len();
            app.quotes.on_loaded(quotes);
            app.set_status(format!("{} {count}", texts.status.loaded));
        }
        BackendEvent::Loaded(Err(e)) => {
            log::warn!("Failed to load quotes: {e}");
            app.set_status(format!("{} {e}", texts.status.load_failed));
            app.quotes.on_load_failed(e);
        }

        BackendEvent::Created {
            draft,
            result: Ok(quote),
        } => {
            app.set_status(format!("{} #{}", texts.status.created, quote.id));
            app.quotes.on_created(&draft, quote);
        }
        BackendEvent::Created {
            draft,
            result: Err(e),
        } => {
            log::warn!("Failed to create quote: {e}");
            app.set_status(format!("{} {e}", texts.status.create_failed));
            app.quotes.on_create_failed(draft, e);
        }

        BackendEvent::Updated {
            result: Ok(applied),
            ..
        } => {
            if app.quotes.on_updated(&applied) {
                app.set_status(format!("{} #{}", texts.status.updated, applied.id));
            } else {
                app.set_status(format!("{} #{}", texts.status.update_dropped, applied.id));
            }
        }
        BackendEvent::Updated {
            submitted,
            result: Err(e),
        } => {
            log::warn!("Failed to update quote {}: {e}", submitted.id);
            app.set_status(format!(
                "{} #{}: {e}",
                texts.status.update_failed, submitted.id
            ));
            app.quotes.on_update_failed(submitted, e);
        }

        BackendEvent::Deleted { id, result: Ok(()) } => {
            app.set_status(format!("{} #{id}", texts.status.deleted));
            app.quotes.on_deleted(&id);
        }
        BackendEvent::Deleted { id, result: Err(e) } => {
            log::warn!("Failed to delete quote {id}: {e}");
            app.set_status(format!("{} #{id}: {e}", texts.status.delete_failed));
            app.quotes.on_delete_failed(id, e);
        }

        BackendEvent::Random(result) => {
            app.quotes.on_random_finished();
            // 已有弹窗时不覆盖，改为写到状态栏
            match result {
                Ok(text) if app.modal.is_open() => app.set_status(text),
                Ok(text) => app.modal.show_random_quote(text),
                Err(e) if app.modal.is_open() => {
                    app.set_status(format!("{} {e}", texts.modal.random_quote.failed));
                }
                Err(e) => {
                    log::warn!("Failed to fetch a random quote: {e}");
                    app.modal
                        .show_error(texts.modal.random_quote.failed, e.to_string());
                }
            }
        }
    }
}
