//! 行内编辑更新逻辑

use crate::i18n::t;
use crate::message::EditorMessage;
use crate::model::App;

/// 处理行内编辑消息
pub fn update(app: &mut App, msg: EditorMessage) {
    match msg {
        EditorMessage::Input(ch) => app.quotes.input_char(ch),
        EditorMessage::Backspace => app.quotes.backspace(),
        EditorMessage::NextField => app.quotes.next_field(),
        EditorMessage::Cancel => app.quotes.cancel_input(),
        EditorMessage::Submit => {
            if !app.quotes.submit_input() {
                app.set_status(t().status.already_pending);
            }
        }
    }
}
