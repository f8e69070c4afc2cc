//! 名言列表页面状态
//!
//! `QuotesState` 是列表容器：持有权威的 `QuoteCollection`，
//! 管理每行的编辑器、新建行输入框、进行中的请求以及每个操作的错误。
//!
//! 它不直接发请求，而是把 `BackendCommand` 放进 `outbox`，
//! 由主循环取出交给 Backend 执行；请求结果通过 `on_*` 方法回填。

use std::collections::{HashMap, HashSet};

use quote_board_client::{Quote, QuoteCollection, QuoteDraft, QuoteError, QuoteId};

use super::editor::{EditField, QuoteEditor};
use crate::message::BackendCommand;

/// 进行中的请求，同一个 key 同时只会有一个请求
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PendingOp {
    Load,
    Create,
    Update(QuoteId),
    Delete(QuoteId),
    Random,
}

/// 可由用户重试的失败操作（携带当时提交的参数）
///
/// 重试时新建和更新以输入框中的当前内容为准，这里的参数只在没有草稿时使用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailedOp {
    Load,
    Create(QuoteDraft),
    Update(Quote),
    Delete(QuoteId),
}

/// 一次失败操作及其错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpFailure {
    pub op: FailedOp,
    pub error: QuoteError,
}

/// 新建行的两个输入框
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRowState {
    pub quote: String,
    pub person: String,
    pub field: EditField,
}

impl CreateRowState {
    pub fn draft(&self) -> QuoteDraft {
        QuoteDraft::new(self.quote.clone(), self.person.clone())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.quote.is_empty() && self.person.is_empty()
    }

    fn current_mut(&mut self) -> &mut String {
        match self.field {
            EditField::Quote => &mut self.quote,
            EditField::Person => &mut self.person,
        }
    }
}

/// 当前接收键盘输入的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputTarget {
    Row(QuoteId),
    Create,
}

/// 名言列表页面状态
#[derive(Debug, Default)]
pub struct QuotesState {
    /// 权威列表
    pub collection: QuoteCollection,
    /// 当前选中行；`collection.len()` 表示新建行
    pub selected: usize,
    /// 是否至少成功加载过一次
    pub loaded: bool,
    /// 新建行
    pub create_row: CreateRowState,
    /// 正在输入的位置
    pub input: Option<InputTarget>,

    editors: HashMap<QuoteId, QuoteEditor>,
    pending: HashSet<PendingOp>,
    load_error: Option<QuoteError>,
    create_failure: Option<OpFailure>,
    row_failures: HashMap<QuoteId, OpFailure>,
    outbox: Vec<BackendCommand>,
}

impl QuotesState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 选择 ==========

    /// 行数（含新建行）
    pub fn row_count(&self) -> usize {
        self.collection.len() + 1
    }

    pub fn is_create_row_selected(&self) -> bool {
        self.selected >= self.collection.len()
    }

    pub fn selected_quote(&self) -> Option<&Quote> {
        self.collection.get_index(self.selected)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.row_count() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.collection.len();
    }

    // ========== 行内编辑 ==========

    pub fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    pub fn editor(&self, id: &QuoteId) -> Option<&QuoteEditor> {
        self.editors.get(id)
    }

    /// 在选中行上开始输入；名言行会按需创建编辑器
    pub fn begin_edit(&mut self) {
        let Some(record) = self.selected_quote().cloned() else {
            self.input = Some(InputTarget::Create);
            return;
        };

        self.editors
            .entry(record.id.clone())
            .or_insert_with(|| QuoteEditor::new(&record));
        self.input = Some(InputTarget::Row(record.id));
    }

    /// 跳到新建行并开始输入
    pub fn begin_create(&mut self) {
        self.selected = self.collection.len();
        self.input = Some(InputTarget::Create);
    }

    /// 取消输入：名言行丢弃草稿，新建行保留已输入的内容
    pub fn cancel_input(&mut self) {
        if let Some(InputTarget::Row(id)) = self.input.take() {
            self.editors.remove(&id);
        }
    }

    pub fn input_char(&mut self, ch: char) {
        match &self.input {
            Some(InputTarget::Row(id)) => {
                if let Some(editor) = self.editors.get_mut(id) {
                    editor.input(ch);
                }
            }
            Some(InputTarget::Create) => self.create_row.current_mut().push(ch),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        match &self.input {
            Some(InputTarget::Row(id)) => {
                if let Some(editor) = self.editors.get_mut(id) {
                    editor.backspace();
                }
            }
            Some(InputTarget::Create) => {
                self.create_row.current_mut().pop();
            }
            None => {}
        }
    }

    pub fn next_field(&mut self) {
        match &self.input {
            Some(InputTarget::Row(id)) => {
                if let Some(editor) = self.editors.get_mut(id) {
                    editor.next_field();
                }
            }
            Some(InputTarget::Create) => {
                self.create_row.field = self.create_row.field.toggle();
            }
            None => {}
        }
    }

    /// 提交当前输入，返回是否发出了请求
    pub fn submit_input(&mut self) -> bool {
        match self.input.take() {
            Some(InputTarget::Row(id)) => match self.editors.get(&id) {
                Some(editor) => {
                    let draft = editor.draft();
                    self.request_update(draft)
                }
                None => false,
            },
            Some(InputTarget::Create) => {
                let draft = self.create_row.draft();
                self.request_create(draft)
            }
            None => false,
        }
    }

    // ========== 请求 ==========

    pub fn is_pending(&self, op: &PendingOp) -> bool {
        self.pending.contains(op)
    }

    /// 该行是否有更新或删除请求在进行中
    pub fn is_row_busy(&self, id: &QuoteId) -> bool {
        self.pending.contains(&PendingOp::Update(id.clone()))
            || self.pending.contains(&PendingOp::Delete(id.clone()))
    }

    pub fn request_load(&mut self) -> bool {
        self.enqueue(PendingOp::Load, BackendCommand::LoadQuotes)
    }

    pub fn request_create(&mut self, draft: QuoteDraft) -> bool {
        self.enqueue(PendingOp::Create, BackendCommand::CreateQuote(draft))
    }

    pub fn request_update(&mut self, quote: Quote) -> bool {
        self.enqueue(
            PendingOp::Update(quote.id.clone()),
            BackendCommand::UpdateQuote(quote),
        )
    }

    pub fn request_delete(&mut self, id: QuoteId) -> bool {
        self.enqueue(
            PendingOp::Delete(id.clone()),
            BackendCommand::DeleteQuote(id),
        )
    }

    pub fn request_random(&mut self) -> bool {
        self.enqueue(PendingOp::Random, BackendCommand::RandomQuote)
    }

    /// 取出待执行的请求
    pub fn take_commands(&mut self) -> Vec<BackendCommand> {
        std::mem::take(&mut self.outbox)
    }

    fn enqueue(&mut self, key: PendingOp, command: BackendCommand) -> bool {
        if !self.pending.insert(key) {
            log::debug!("Skipping {command:?}: identical request in flight");
            return false;
        }
        self.outbox.push(command);
        true
    }

    // ========== 错误与重试 ==========

    pub fn load_error(&self) -> Option<&QuoteError> {
        self.load_error.as_ref()
    }

    pub fn create_failure(&self) -> Option<&OpFailure> {
        self.create_failure.as_ref()
    }

    pub fn row_failure(&self, id: &QuoteId) -> Option<&OpFailure> {
        self.row_failures.get(id)
    }

    /// 按选中位置决定重试哪个失败操作：选中行 → 新建行 → 列表加载。
    /// 只有可重试的错误才会成为重试目标。
    pub fn retry_target(&self) -> Option<FailedOp> {
        let scoped = if let Some(record) = self.selected_quote() {
            self.row_failures.get(&record.id)
        } else {
            self.create_failure.as_ref()
        };

        scoped
            .filter(|failure| failure.error.is_retryable())
            .map(|failure| self.resubmission(&failure.op))
            .or_else(|| {
                self.load_error
                    .as_ref()
                    .filter(|e| e.is_retryable())
                    .map(|_| FailedOp::Load)
            })
    }

    /// 重试时实际发送的内容：输入框里的当前值优先于失败时的参数
    fn resubmission(&self, op: &FailedOp) -> FailedOp {
        match op {
            FailedOp::Create(_) => FailedOp::Create(self.create_row.draft()),
            FailedOp::Update(submitted) => self
                .editors
                .get(&submitted.id)
                .map_or_else(|| op.clone(), |editor| FailedOp::Update(editor.draft())),
            FailedOp::Load | FailedOp::Delete(_) => op.clone(),
        }
    }

    /// 重新发出失败的操作，返回是否发出了请求
    pub fn retry(&mut self) -> bool {
        match self.retry_target() {
            Some(FailedOp::Load) => self.request_load(),
            Some(FailedOp::Create(draft)) => self.request_create(draft),
            Some(FailedOp::Update(quote)) => self.request_update(quote),
            Some(FailedOp::Delete(id)) => self.request_delete(id),
            None => false,
        }
    }

    // ========== 请求结果 ==========

    /// 列表加载成功：整体替换。首次加载后选中第一行
    pub fn on_loaded(&mut self, quotes: Vec<Quote>) {
        let first_load = !self.loaded;
        self.pending.remove(&PendingOp::Load);
        self.load_error = None;
        self.loaded = true;
        self.mutate(|collection| collection.replace_all(quotes));
        if first_load {
            self.selected = 0;
        }
    }

    pub fn on_load_failed(&mut self, error: QuoteError) {
        self.pending.remove(&PendingOp::Load);
        self.load_error = Some(error);
    }

    /// 创建成功：追加记录。输入框仍是提交时的内容才清空
    pub fn on_created(&mut self, draft: &QuoteDraft, quote: Quote) {
        self.pending.remove(&PendingOp::Create);
        self.create_failure = None;
        if self.create_row.draft() == *draft {
            self.create_row.clear();
        }
        self.mutate(|collection| collection.append(quote));
    }

    pub fn on_create_failed(&mut self, draft: QuoteDraft, error: QuoteError) {
        self.pending.remove(&PendingOp::Create);
        self.create_failure = Some(OpFailure {
            op: FailedOp::Create(draft),
            error,
        });
    }

    /// 更新成功。记录已被删除时丢弃，返回是否已应用
    pub fn on_updated(&mut self, quote: &Quote) -> bool {
        self.pending.remove(&PendingOp::Update(quote.id.clone()));
        if !self.collection.contains(&quote.id) {
            log::info!("Dropping update for removed quote {}", quote.id);
            return false;
        }

        self.row_failures.remove(&quote.id);
        self.editors.remove(&quote.id);
        if self.input == Some(InputTarget::Row(quote.id.clone())) {
            self.input = None;
        }
        self.mutate(|collection| {
            collection.apply_update(quote);
        });
        true
    }

    pub fn on_update_failed(&mut self, submitted: Quote, error: QuoteError) {
        let id = submitted.id.clone();
        self.pending.remove(&PendingOp::Update(id.clone()));
        if self.collection.contains(&id) {
            self.row_failures.insert(
                id,
                OpFailure {
                    op: FailedOp::Update(submitted),
                    error,
                },
            );
        }
    }

    /// 删除成功：按 id 移除（不存在时无操作）
    pub fn on_deleted(&mut self, id: &QuoteId) {
        self.pending.remove(&PendingOp::Delete(id.clone()));
        self.mutate(|collection| {
            collection.remove(id);
        });
    }

    pub fn on_delete_failed(&mut self, id: QuoteId, error: QuoteError) {
        self.pending.remove(&PendingOp::Delete(id.clone()));
        if self.collection.contains(&id) {
            self.row_failures.insert(
                id.clone(),
                OpFailure {
                    op: FailedOp::Delete(id),
                    error,
                },
            );
        }
    }

    pub fn on_random_finished(&mut self) {
        self.pending.remove(&PendingOp::Random);
    }

    /// 修改列表后保持选中项并与编辑器对账
    fn mutate(&mut self, change: impl FnOnce(&mut QuoteCollection)) {
        let on_create_row = self.is_create_row_selected();
        let selected_id = self.selected_quote().map(|q| q.id.clone());

        change(&mut self.collection);

        self.selected = if on_create_row {
            self.collection.len()
        } else {
            selected_id
                .and_then(|id| self.collection.position(&id))
                .unwrap_or_else(|| self.selected.min(self.collection.len()))
        };
        self.reconcile();
    }

    /// 编辑器与权威列表对账：上游变化覆盖草稿，消失的 id 丢弃编辑器
    fn reconcile(&mut self) {
        let collection = &self.collection;

        self.editors.retain(|id, editor| match collection.get(id) {
            Some(record) => {
                if editor.sync(record) {
                    log::info!("Quote {id} changed upstream, draft discarded");
                }
                true
            }
            None => false,
        });
        self.row_failures.retain(|id, _| collection.contains(id));

        if let Some(InputTarget::Row(id)) = &self.input {
            if !self.editors.contains_key(id) {
                self.input = None;
            }
        }
    }
}
