//! 单条名言的编辑状态

use quote_board_client::{Quote, QuoteId};

/// 当前输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Quote,
    Person,
}

impl EditField {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Quote => Self::Person,
            Self::Person => Self::Quote,
        }
    }
}

/// 一行名言的编辑器
///
/// 保存本地草稿以及草稿派生自的上游记录 (`base`)。
/// 容器每次变更后都会调用 [`sync`](Self::sync)：上游记录与 `base` 不同时，
/// 草稿被权威值覆盖。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteEditor {
    base: Quote,
    pub quote: String,
    pub person: String,
    pub field: EditField,
}

impl QuoteEditor {
    pub fn new(record: &Quote) -> Self {
        Self {
            base: record.clone(),
            quote: record.quote.clone(),
            person: record.person.clone(),
            field: EditField::default(),
        }
    }

    pub fn id(&self) -> &QuoteId {
        &self.base.id
    }

    /// 与容器提供的记录同步，返回草稿是否被覆盖
    pub fn sync(&mut self, upstream: &Quote) -> bool {
        if upstream.id == self.base.id && upstream.same_content(&self.base) {
            return false;
        }

        let field = self.field;
        *self = Self::new(upstream);
        self.field = field;
        true
    }

    /// 草稿是否与上游记录不同
    pub fn is_dirty(&self) -> bool {
        self.quote != self.base.quote || self.person != self.base.person
    }

    /// 以当前草稿构造更新请求
    pub fn draft(&self) -> Quote {
        Quote::new(self.id().clone(), self.quote.clone(), self.person.clone())
    }

    pub fn input(&mut self, ch: char) {
        self.current_mut().push(ch);
    }

    pub fn backspace(&mut self) {
        self.current_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.field = self.field.toggle();
    }

    fn current_mut(&mut self) -> &mut String {
        match self.field {
            EditField::Quote => &mut self.quote,
            EditField::Person => &mut self.person,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_for_seven() -> QuoteEditor {
        QuoteEditor::new(&Quote::new("7", "old", "Ann"))
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut editor = editor_for_seven();
        editor.input('!');
        editor.next_field();
        editor.backspace();

        assert_eq!(editor.quote, "old!");
        assert_eq!(editor.person, "An");
        assert!(editor.is_dirty());
        assert_eq!(editor.draft(), Quote::new("7", "old!", "An"));
    }

    #[test]
    fn upstream_change_overwrites_uncommitted_draft() {
        let mut editor = editor_for_seven();
        editor.input('?');

        assert!(editor.sync(&Quote::new("7", "new", "Ann")));
        assert_eq!(editor.quote, "new");
        assert_eq!(editor.person, "Ann");
        assert!(!editor.is_dirty());
    }

    #[test]
    fn unchanged_upstream_keeps_draft() {
        let mut editor = editor_for_seven();
        editor.input('?');

        assert!(!editor.sync(&Quote::new("7", "old", "Ann")));
        assert_eq!(editor.quote, "old?");
    }

    #[test]
    fn different_id_resets_editor() {
        let mut editor = editor_for_seven();
        editor.next_field();
        editor.input('x');

        assert!(editor.sync(&Quote::new("8", "old", "Ann")));
        assert_eq!(editor.id(), &QuoteId::from("8"));
        assert_eq!(editor.person, "Ann");
        assert_eq!(editor.field, EditField::Person);
    }
}
