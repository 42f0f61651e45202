//! UI capability seams: notifications, overlay toggling, confirmation.
//!
//! The view-model talks to these traits instead of any concrete surface, so
//! flows stay testable with recording fakes. `TermUi` is the terminal
//! implementation used by the CLI.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient messages, named overlays, and interactive confirmation.
pub trait UiHandle {
    fn notify(&self, message: &str, kind: NoticeKind);
    fn open_overlay(&self, name: &str);
    fn close_overlay(&self, name: &str);
    fn confirm(&self, prompt: &str) -> bool;
}

/// Terminal implementation: notices on stderr, confirmation from stdin.
///
/// The terminal has no modal surface, so overlay toggles are logged at
/// debug level; the seam is kept so flow contracts stay observable.
pub struct TermUi {
    assume_yes: bool,
}

impl TermUi {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl UiHandle for TermUi {
    fn notify(&self, message: &str, kind: NoticeKind) {
        match kind {
            NoticeKind::Success => eprintln!("{} {}", "✔".green(), message),
            NoticeKind::Error => eprintln!("{} {}", "✖".red(), message.red()),
        }
    }

    fn open_overlay(&self, name: &str) {
        debug!(overlay = name, "overlay opened");
    }

    fn close_overlay(&self, name: &str) {
        debug!(overlay = name, "overlay closed");
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
