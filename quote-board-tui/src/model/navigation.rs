//! 导航状态定义

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Quotes,
    Settings,
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Quotes,
                    icon: "❝",
                },
                NavItem {
                    id: NavItemId::Settings,
                    icon: "≡",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut nav = NavigationState::new();
        nav.select_previous();
        assert_eq!(nav.current_id(), Some(NavItemId::Quotes));

        nav.select_next();
        nav.select_next();
        assert_eq!(nav.current_id(), Some(NavItemId::Settings));

        nav.select_first();
        assert_eq!(nav.selected, 0);
        nav.select_last();
        assert_eq!(nav.selected, 1);
    }
}
