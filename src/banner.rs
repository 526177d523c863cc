//! Startup header: name, version and the command families the translator knows.
//!
//! The CLI writes generated code to stdout, so its header goes to stderr.
//! The server has no such constraint and uses stdout.

use std::env;
use std::io::{self, IsTerminal, Write};

use crate::translator;

const ACCENT: &str = "\x1b[96m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Cli,
    Server,
}

impl Surface {
    fn label(self) -> &'static str {
        match self {
            Surface::Cli => "cli",
            Surface::Server => "api",
        }
    }
}

/// Render the header. `color` adds ANSI styling; callers decide whether the
/// target stream can show it.
pub fn banner(surface: Surface, color: bool) -> String {
    let (accent, dim, reset) = if color {
        (ACCENT, DIM, RESET)
    } else {
        ("", "", "")
    };

    let rules = translator::rules();
    let kinds = rules
        .iter()
        .map(|r| r.kind.as_str())
        .collect::<Vec<_>>()
        .join(" · ");

    format!(
        "{accent}nl2code {}{reset} [{}] english → python\n{dim}{} rules: {kinds}{reset}\n",
        env!("CARGO_PKG_VERSION"),
        surface.label(),
        rules.len(),
    )
}

fn wants_color(is_tty: bool) -> bool {
    is_tty && env::var_os("NO_COLOR").is_none()
}

pub fn print(surface: Surface) {
    let _ = match surface {
        Surface::Cli => {
            let err = io::stderr();
            let text = banner(surface, wants_color(err.is_terminal()));
            err.lock().write_all(text.as_bytes())
        }
        Surface::Server => {
            let out = io::stdout();
            let text = banner(surface, wants_color(out.is_terminal()));
            out.lock().write_all(text.as_bytes())
        }
    };
}
