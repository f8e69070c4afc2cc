//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, ConfirmDeleteTexts, HelpTexts, HintTexts, KeyNames, LanguageTexts,
    ModalTexts, NavTexts, QuotesTexts, RandomQuoteTexts, SettingsTexts, StatusTexts, ThemeTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Quote Board",
        cancel: "Cancel",
        delete: "Delete",
        close: "Close",
        error: "Error",
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
            navigate: "Navigate",
            open: "Open",
            select: "Select",
            switch_option: "Switch",
            switch_panel: "Switch panel",
            edit: "Edit",
            submit: "Save",
            next_field: "Next field",
            cancel: "Cancel",
            add: "New",
            delete: "Delete",
            refresh: "Reload",
            retry: "Retry",
            random: "Random",
            help: "Help",
            quit: "Quit",
        },
    },

    nav: NavTexts {
        title: "Menu",
        quotes: "Quotes",
        settings: "Settings",
    },

    quotes: QuotesTexts {
        title: "Quotes",
        loading: "Loading quotes...",
        empty: "No quotes yet. Press Alt+a to add the first one.",
        load_failed: "Could not load quotes",
        new_row: "New",
        quote_label: "Quote",
        person_label: "Person",
        saving: "saving...",
        deleting: "deleting...",
        creating: "creating...",
        retry_hint: "Alt+t to retry",
    },

    settings: SettingsTexts {
        title: "Settings",
        theme: ThemeTexts {
            label: "Theme",
            dark: "Dark",
            light: "Light",
        },
        language: LanguageTexts { label: "Language" },
    },

    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirm Deletion",
            message: "Delete this quote?",
        },
        random_quote: RandomQuoteTexts {
            title: "Random Quote",
            failed: "Could not fetch a random quote",
        },
        help: HelpTexts {
            title: "Help",
            global: "Global shortcuts",
            quotes: "Quote list",
            editing: "While editing",
        },
        close_hint: "Press Esc or Enter to close",
    },

    status: StatusTexts {
        refreshing: "Reloading quotes...",
        loaded: "Quotes loaded:",
        created: "Quote created:",
        updated: "Quote saved:",
        deleted: "Quote deleted:",
        update_dropped: "Quote was deleted before the save finished:",
        load_failed: "Load failed:",
        create_failed: "Create failed:",
        update_failed: "Save failed:",
        delete_failed: "Delete failed:",
        already_pending: "Request already in progress",
        nothing_to_retry: "Nothing to retry",
        retrying: "Retrying...",
        settings_save_failed: "Could not save settings:",
    },
};
