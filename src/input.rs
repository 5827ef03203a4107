use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{FocusArea, Route, SettingsField};
use crate::router::PageRouter;
use crate::shell::LayoutShell;
use crate::utils::read_clipboard_text;

/// Applies one key press to the shell. Returns `false` when the app should quit.
pub fn handle_key(shell: &mut LayoutShell, router: &mut PageRouter, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return false;
    }

    match shell.focus() {
        FocusArea::Nav => handle_nav_key(shell, router, key.code),
        FocusArea::Sidebar(field) => {
            handle_sidebar_key(shell, field, key.code, ctrl);
            true
        }
    }
}

/// Bracketed paste lands in the repo field when it has focus.
pub fn handle_paste(shell: &mut LayoutShell, text: &str) {
    if shell.focus() == FocusArea::Sidebar(SettingsField::GithubRepo) {
        append_to_repo(shell, text);
    }
}

fn handle_nav_key(shell: &mut LayoutShell, router: &mut PageRouter, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => return false,
        KeyCode::Left | KeyCode::Char('h') => shell.select_prev_nav(),
        KeyCode::Right | KeyCode::Char('l') => shell.select_next_nav(),
        KeyCode::Enter => {
            if let Some(request) = shell.activate_nav() {
                router.follow(request);
            }
        }
        KeyCode::Char('s') | KeyCode::Char('>') => shell.open_sidebar(),
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            router.follow(shell.link(Route::ALL[idx]));
        }
        KeyCode::Tab | KeyCode::BackTab => shell.focus_sidebar(SettingsField::PythonVersion),
        _ => {}
    }
    true
}

fn handle_sidebar_key(shell: &mut LayoutShell, field: SettingsField, code: KeyCode, ctrl: bool) {
    if field == SettingsField::GithubRepo && handle_repo_edit(shell, code, ctrl) {
        return;
    }

    match code {
        KeyCode::Esc | KeyCode::Char('<') => shell.close_sidebar(),
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => shell.focus_sidebar(field.next()),
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => shell.focus_sidebar(field.prev()),
        KeyCode::Right | KeyCode::Char('l') => cycle_option(shell, field, true),
        KeyCode::Left | KeyCode::Char('h') => cycle_option(shell, field, false),
        KeyCode::Enter => match field {
            SettingsField::Close => shell.close_sidebar(),
            _ => cycle_option(shell, field, true),
        },
        KeyCode::Char('n') => shell.focus_nav(),
        _ => {}
    }
}

/// Text editing keys for the repo input. Returns `true` if the key was consumed.
fn handle_repo_edit(shell: &mut LayoutShell, code: KeyCode, ctrl: bool) -> bool {
    match code {
        KeyCode::Char('u') if ctrl => shell.set_github_repo(String::new()),
        KeyCode::Char('v') if ctrl => {
            if let Some(text) = read_clipboard_text() {
                append_to_repo(shell, &text);
            }
        }
        KeyCode::Char(c) if !ctrl => {
            let mut repo = shell.settings().github_repo().to_string();
            repo.push(c);
            shell.set_github_repo(repo);
        }
        KeyCode::Backspace => {
            let mut repo = shell.settings().github_repo().to_string();
            repo.pop();
            shell.set_github_repo(repo);
        }
        _ => return false,
    }
    true
}

fn append_to_repo(shell: &mut LayoutShell, text: &str) {
    let repo = format!("{}{}", shell.settings().github_repo(), text);
    shell.set_github_repo(repo);
}

fn cycle_option(shell: &mut LayoutShell, field: SettingsField, forward: bool) {
    match field {
        SettingsField::PythonVersion => {
            let v = shell.settings().python_version();
            shell.set_python_version(if forward { v.next() } else { v.prev() });
        }
        SettingsField::Branch => {
            let b = shell.settings().branch();
            shell.set_branch(if forward { b.next() } else { b.prev() });
        }
        SettingsField::Close | SettingsField::GithubRepo => {}
    }
}
