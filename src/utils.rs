use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::Context;

use arboard::Clipboard;
use ratatui::layout::Rect;
use tracing::warn;

/// Expands `~` and environment variables in a configured path.
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(e) => {
            warn!(path = raw, error = %e, "could not expand path, using it as given");
            PathBuf::from(raw)
        }
    }
}

/// Opens `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory {}", parent.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

pub fn read_clipboard_text() -> Option<String> {
    let text = Clipboard::new().and_then(|mut cb| cb.get_text());
    match text {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(error = %e, "clipboard read failed");
            None
        }
    }
}

/// Area of the sidebar panel: left edge, full height, never wider than `area`.
pub fn sidebar_rect(area: Rect, width: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: width.min(area.width),
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_rect_clamps_to_available_width() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(sidebar_rect(area, 42), Rect::new(0, 0, 30, 10));
        assert_eq!(sidebar_rect(area, 12), Rect::new(0, 0, 12, 10));
    }

    #[test]
    fn open_log_file_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("pydeck-log-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("a").join("b").join("pydeck.log");
        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn open_log_file_reports_unusable_path() {
        let dir = std::env::temp_dir().join(format!("pydeck-badlog-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let err = open_log_file(&blocker.join("pydeck.log")).unwrap_err();
        assert!(err.to_string().contains("cannot create log directory"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn expand_path_leaves_plain_paths_alone() {
        assert_eq!(expand_path("/tmp/pydeck.log"), PathBuf::from("/tmp/pydeck.log"));
    }
}
