use tracing::debug;

use crate::models::{
    Branch, FocusArea, LayoutSettingsState, PythonVersion, Route, SettingsField, SidebarVisibility,
};
use crate::router::LinkRequest;

/// Entries of the navigation bar, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    OpenSidebar,
    Link(Route),
}

/// Top-level layout: nav bar, settings sidebar and the state behind them.
///
/// Mounting creates fresh default settings; dropping the shell discards them.
#[derive(Debug)]
pub struct LayoutShell {
    settings: LayoutSettingsState,
    focus: FocusArea,
    nav_index: usize,
}

impl LayoutShell {
    pub fn mount() -> Self {
        debug!("layout shell mounted");
        Self {
            settings: LayoutSettingsState::default(),
            focus: FocusArea::Nav,
            nav_index: 0,
        }
    }

    pub fn settings(&self) -> &LayoutSettingsState {
        &self.settings
    }

    pub fn focus(&self) -> FocusArea {
        self.focus
    }

    pub fn open_sidebar(&mut self) {
        if self.settings.sidebar_open() {
            return;
        }
        self.settings.set_sidebar(SidebarVisibility::Open);
        self.focus = FocusArea::Sidebar(SettingsField::PythonVersion);
        // the trigger at index 0 is gone, keep pointing at the same link
        self.nav_index = self.nav_index.saturating_sub(1);
        debug!("sidebar opened");
    }

    pub fn close_sidebar(&mut self) {
        if !self.settings.sidebar_open() {
            return;
        }
        self.settings.set_sidebar(SidebarVisibility::Closed);
        self.focus = FocusArea::Nav;
        self.nav_index += 1;
        debug!("sidebar closed");
    }

    pub fn set_python_version(&mut self, version: PythonVersion) {
        debug!(%version, "python version selected");
        self.settings.set_python_version(version);
    }

    pub fn set_github_repo(&mut self, repo: impl Into<String>) {
        self.settings.set_github_repo(repo);
    }

    pub fn set_branch(&mut self, branch: Branch) {
        debug!(%branch, "branch selected");
        self.settings.set_branch(branch);
    }

    /// The open trigger is only part of the nav bar while the sidebar is closed.
    pub fn nav_items(&self) -> Vec<NavItem> {
        let trigger = (!self.settings.sidebar_open()).then_some(NavItem::OpenSidebar);
        trigger
            .into_iter()
            .chain(Route::ALL.into_iter().map(NavItem::Link))
            .collect()
    }

    pub fn nav_index(&self) -> usize {
        self.nav_index
    }

    pub fn selected_nav_item(&self) -> Option<NavItem> {
        self.nav_items().get(self.nav_index).copied()
    }

    pub fn select_next_nav(&mut self) {
        let len = self.nav_items().len();
        if self.nav_index + 1 < len {
            self.nav_index += 1;
        }
    }

    pub fn select_prev_nav(&mut self) {
        self.nav_index = self.nav_index.saturating_sub(1);
    }

    /// Activates the selected nav item. Links turn into a request for the router.
    pub fn activate_nav(&mut self) -> Option<LinkRequest> {
        match self.selected_nav_item()? {
            NavItem::OpenSidebar => {
                self.open_sidebar();
                None
            }
            NavItem::Link(route) => Some(self.link(route)),
        }
    }

    pub fn link(&self, route: Route) -> LinkRequest {
        debug!(path = route.path(), "link requested");
        LinkRequest::new(route)
    }

    pub fn focus_nav(&mut self) {
        self.focus = FocusArea::Nav;
    }

    /// Moves focus into the sidebar. Ignored while the sidebar is hidden.
    pub fn focus_sidebar(&mut self, field: SettingsField) {
        if self.settings.sidebar_open() {
            self.focus = FocusArea::Sidebar(field);
        }
    }
}
