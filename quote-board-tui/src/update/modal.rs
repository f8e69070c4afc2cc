//! 弹窗更新逻辑

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::state::Modal;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(_) => handle_simple_modal(app, msg),
        None => {}
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        ref id,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::ToggleDeleteFocus => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            let id = (*focus == 1).then(|| id.clone());
            app.modal.close();

            if let Some(id) = id {
                if !app.quotes.request_delete(id) {
                    app.set_status(t().status.already_pending);
                }
            }
        }
    }
}

/// 处理简单弹窗（帮助、错误、随机名言）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
        }
        ModalMessage::ToggleDeleteFocus => {}
    }
}
