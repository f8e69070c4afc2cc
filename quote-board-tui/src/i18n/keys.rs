//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **页面内容归对应页面**：如 `quotes.*`, `settings.*`
//! 4. **跨组件复用归 `common.*`**
//! 5. **键盘提示归 `hints.*`**，状态栏消息归 `status.*`

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub nav: NavTexts,
    pub quotes: QuotesTexts,
    pub settings: SettingsTexts,
    pub modal: ModalTexts,
    pub status: StatusTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub close: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str,
    pub arrows_ud: &'static str,
}

/// 动作描述
pub struct ActionTexts {
    pub navigate: &'static str,
    pub open: &'static str,
    pub select: &'static str,
    pub switch_option: &'static str,
    pub switch_panel: &'static str,
    pub edit: &'static str,
    pub submit: &'static str,
    pub next_field: &'static str,
    pub cancel: &'static str,
    pub add: &'static str,
    pub delete: &'static str,
    pub refresh: &'static str,
    pub retry: &'static str,
    pub random: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    pub quotes: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 名言列表页面
// ============================================================================

pub struct QuotesTexts {
    pub title: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub load_failed: &'static str,
    pub new_row: &'static str,
    pub quote_label: &'static str,
    pub person_label: &'static str,
    pub saving: &'static str,
    pub deleting: &'static str,
    pub creating: &'static str,
    pub retry_hint: &'static str,
}

// ============================================================================
// 设置页面
// ============================================================================

pub struct SettingsTexts {
    pub title: &'static str,
    pub theme: ThemeTexts,
    pub language: LanguageTexts,
}

pub struct ThemeTexts {
    pub label: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
}

pub struct LanguageTexts {
    pub label: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub confirm_delete: ConfirmDeleteTexts,
    pub random_quote: RandomQuoteTexts,
    pub help: HelpTexts,
    pub close_hint: &'static str,
}

pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
}

pub struct RandomQuoteTexts {
    pub title: &'static str,
    pub failed: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub quotes: &'static str,
    pub editing: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

pub struct StatusTexts {
    pub refreshing: &'static str,
    pub loaded: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub update_dropped: &'static str,
    pub load_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub already_pending: &'static str,
    pub nothing_to_retry: &'static str,
    pub retrying: &'static str,
    pub settings_save_failed: &'static str,
}
