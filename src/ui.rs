use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::models::{FocusArea, SettingsField};
use crate::router::PageRouter;
use crate::shell::{LayoutShell, NavItem};
use crate::theme::Theme;
use crate::utils::sidebar_rect;

const OPEN_TRIGGER: &str = " »» ";
const CLOSE_TRIGGER: &str = " «« ";
const REPO_PLACEHOLDER: &str = "https://github.com/user/repo";

/// Draws the whole shell: nav bar, current page, footer and (if open) the sidebar on top.
pub fn render_shell(f: &mut Frame, shell: &LayoutShell, router: &PageRouter, theme: &Theme, sidebar_width: u16) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(theme.root_bg)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    render_nav(f, shell, router, theme, rows[0]);
    render_page(f, shell, router, theme, rows[1]);
    render_footer(f, shell, theme, rows[2]);

    if shell.settings().sidebar().is_open() {
        render_sidebar(f, shell, theme, sidebar_rect(area, sidebar_width));
    }
}

fn render_nav(f: &mut Frame, shell: &LayoutShell, router: &PageRouter, theme: &Theme, area: Rect) {
    let nav_focused = shell.focus() == FocusArea::Nav;
    let mut trigger = None;
    let mut links = vec![];

    for (i, item) in shell.nav_items().into_iter().enumerate() {
        let selected = nav_focused && i == shell.nav_index();
        match item {
            NavItem::OpenSidebar => {
                let style = if selected { theme.toggle_selected } else { theme.toggle };
                trigger = Some(Span::styled(OPEN_TRIGGER, style));
            }
            NavItem::Link(route) => {
                let style = if selected {
                    theme.nav_selected
                } else if router.current() == Some(route) {
                    theme.nav_current
                } else {
                    theme.nav_link
                };
                links.push(Span::styled(route.label(), style));
                links.push(Span::raw("   "));
            }
        }
    }

    if let Some(trigger) = trigger {
        f.render_widget(Paragraph::new(Line::from(trigger)), area);
    }
    f.render_widget(Paragraph::new(Line::from(links)).alignment(Alignment::Right), area);
}

fn render_page(f: &mut Frame, shell: &LayoutShell, router: &PageRouter, theme: &Theme, area: Rect) {
    let settings = shell.settings();
    let (title, path) = match router.current() {
        Some(route) => (route.label(), route.path()),
        None => ("Home", "/"),
    };
    let repo = if settings.github_repo().is_empty() {
        "(none)"
    } else {
        settings.github_repo()
    };

    let secondary = Style::default().fg(theme.text_secondary);
    let text = vec![
        Line::from(Span::styled(path, secondary)),
        Line::from(""),
        Line::from(vec![Span::styled("Python Version: ", secondary), Span::raw(settings.python_version().as_str())]),
        Line::from(vec![Span::styled("GitHub Repo:    ", secondary), Span::raw(repo)]),
        Line::from(vec![Span::styled("Branch:         ", secondary), Span::raw(settings.branch().as_str())]),
    ];

    let block = Block::default()
        .title(Span::styled(title, theme.page_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.blurred_border));
    let para = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(theme.text));
    f.render_widget(para, area);
}

fn render_footer(f: &mut Frame, shell: &LayoutShell, theme: &Theme, area: Rect) {
    let help = match shell.focus() {
        FocusArea::Nav if shell.settings().sidebar_open() => {
            "←/→ Select | Enter Open | 1-6 Jump | Tab Settings | q Quit"
        }
        FocusArea::Nav => "←/→ Select | Enter Open | 1-6 Jump | s Settings | q Quit",
        FocusArea::Sidebar(SettingsField::GithubRepo) => {
            "Type to edit | Backspace Delete | Ctrl+U Clear | Ctrl+V Paste | ↑/↓ Field | Esc Close"
        }
        FocusArea::Sidebar(_) => "↑/↓ Field | ←/→ Change | Enter Select | n Nav | Esc Close | Ctrl+C Quit",
    };
    f.render_widget(Paragraph::new(help).style(theme.footer), area);
}

fn render_sidebar(f: &mut Frame, shell: &LayoutShell, theme: &Theme, area: Rect) {
    f.render_widget(Clear, area);

    let focused_field = match shell.focus() {
        FocusArea::Sidebar(field) => Some(field),
        FocusArea::Nav => None,
    };
    let border = if focused_field.is_some() { theme.focus_border } else { theme.blurred_border };
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.sidebar_bg).fg(theme.text));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let padded = Rect {
        x: inner.x + 2,
        y: inner.y + 1,
        width: inner.width.saturating_sub(4),
        height: inner.height.saturating_sub(1),
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(3), // python version
            Constraint::Length(3), // repo
            Constraint::Length(3), // branch
            Constraint::Min(0),
        ])
        .split(padded);

    let close_style = if focused_field == Some(SettingsField::Close) {
        theme.toggle_selected
    } else {
        theme.toggle
    };
    f.render_widget(Paragraph::new(Span::styled("Settings", theme.sidebar_title)), rows[0]);
    f.render_widget(
        Paragraph::new(Span::styled(CLOSE_TRIGGER, close_style)).alignment(Alignment::Right),
        rows[0],
    );

    let settings = shell.settings();
    let python = select_line(settings.python_version().as_str(), focused_field == Some(SettingsField::PythonVersion), theme);
    render_field(f, "Python Version", python, rows[1], theme);

    let repo_focused = focused_field == Some(SettingsField::GithubRepo);
    let repo = if settings.github_repo().is_empty() && !repo_focused {
        Line::from(Span::styled(REPO_PLACEHOLDER, theme.placeholder))
    } else {
        let style = if repo_focused { theme.field_focused } else { theme.field_value };
        let cursor = if repo_focused { "▏" } else { "" };
        Line::from(Span::styled(format!("{}{}", settings.github_repo(), cursor), style))
    };
    render_field(f, "GitHub Repo Link", repo, rows[2], theme);

    let branch = select_line(settings.branch().as_str(), focused_field == Some(SettingsField::Branch), theme);
    render_field(f, "Branch", branch, rows[3], theme);
}

fn select_line(value: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let style = if focused { theme.field_focused } else { theme.field_value };
    Line::from(Span::styled(format!("‹ {} ›", value), style))
}

fn render_field(f: &mut Frame, label: &str, value: Line<'_>, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    f.render_widget(Paragraph::new(Span::styled(label.to_string(), theme.field_label)), chunks[0]);
    f.render_widget(
        Paragraph::new(value).style(Style::default().bg(theme.input_bg)),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Branch, Route};
    use ratatui::backend::TestBackend;

    fn draw(shell: &LayoutShell, router: &PageRouter) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_shell(f, shell, router, &Theme::default(), 42))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn open_and_close_triggers_are_never_both_visible() {
        let mut shell = LayoutShell::mount();
        let router = PageRouter::new(None);

        let closed = draw(&shell, &router);
        assert!(closed.contains("»»"));
        assert!(!closed.contains("««"));
        assert!(!closed.contains("GitHub Repo Link"));

        shell.open_sidebar();
        let open = draw(&shell, &router);
        assert!(!open.contains("»»"));
        assert!(open.contains("««"));
        assert!(open.contains("Python Version"));
        assert!(open.contains("GitHub Repo Link"));
    }

    #[test]
    fn nav_bar_lists_every_link_label() {
        let shell = LayoutShell::mount();
        let screen = draw(&shell, &PageRouter::new(None));
        for route in Route::ALL {
            assert!(screen.contains(route.label()), "missing {}", route.label());
        }
    }

    #[test]
    fn sidebar_shows_controlled_values_and_placeholder() {
        let mut shell = LayoutShell::mount();
        shell.open_sidebar();
        let screen = draw(&shell, &PageRouter::new(None));
        assert!(screen.contains("‹ 3.10 ›"));
        assert!(screen.contains(REPO_PLACEHOLDER));
        assert!(screen.contains("‹ main ›"));

        shell.set_branch(Branch::Dev);
        shell.set_github_repo("https://github.com/acme/widget");
        let screen = draw(&shell, &PageRouter::new(None));
        assert!(screen.contains("‹ dev ›"));
        assert!(screen.contains("https://github.com/acme/widget"));
        assert!(!screen.contains(REPO_PLACEHOLDER));
    }

    #[test]
    fn page_area_shows_current_route() {
        let shell = LayoutShell::mount();
        let screen = draw(&shell, &PageRouter::new(Some(Route::GithubAction)));
        assert!(screen.contains("/github_action"));

        let screen = draw(&shell, &PageRouter::new(None));
        assert!(screen.contains("Home"));
    }
}
