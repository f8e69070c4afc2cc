//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, ConfirmDeleteTexts, HelpTexts, HintTexts, KeyNames, LanguageTexts,
    ModalTexts, NavTexts, QuotesTexts, RandomQuoteTexts, SettingsTexts, StatusTexts, ThemeTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "名言板",
        cancel: "取消",
        delete: "删除",
        close: "关闭",
        error: "错误",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "导航",
            open: "打开",
            select: "选择",
            switch_option: "切换选项",
            switch_panel: "切换面板",
            edit: "编辑",
            submit: "保存",
            next_field: "下一个输入框",
            cancel: "取消",
            add: "新建",
            delete: "删除",
            refresh: "重新加载",
            retry: "重试",
            random: "随机",
            help: "帮助",
            quit: "退出",
        },
    },

    nav: NavTexts {
        title: "菜单",
        quotes: "名言",
        settings: "设置",
    },

    quotes: QuotesTexts {
        title: "名言",
        loading: "正在加载名言...",
        empty: "还没有名言，按 Alt+a 添加第一条。",
        load_failed: "名言加载失败",
        new_row: "新建",
        quote_label: "名言",
        person_label: "人物",
        saving: "保存中...",
        deleting: "删除中...",
        creating: "创建中...",
        retry_hint: "按 Alt+t 重试",
    },

    settings: SettingsTexts {
        title: "设置",
        theme: ThemeTexts {
            label: "主题",
            dark: "深色",
            light: "浅色",
        },
        language: LanguageTexts { label: "语言" },
    },

    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "确认删除",
            message: "确定删除这条名言吗？",
        },
        random_quote: RandomQuoteTexts {
            title: "随机名言",
            failed: "获取随机名言失败",
        },
        help: HelpTexts {
            title: "帮助",
            global: "全局快捷键",
            quotes: "名言列表",
            editing: "编辑时",
        },
        close_hint: "按 Esc 或 Enter 关闭",
    },

    status: StatusTexts {
        refreshing: "正在重新加载...",
        loaded: "已加载名言：",
        created: "已创建：",
        updated: "已保存：",
        deleted: "已删除：",
        update_dropped: "保存完成前该名言已被删除：",
        load_failed: "加载失败：",
        create_failed: "创建失败：",
        update_failed: "保存失败：",
        delete_failed: "删除失败：",
        already_pending: "请求正在进行中",
        nothing_to_retry: "没有可重试的操作",
        retrying: "正在重试...",
        settings_save_failed: "设置保存失败：",
    },
};
