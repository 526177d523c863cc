use crate::translator::translate_detailed;
pub use crate::translator::Translation;

use serde::Serialize;

/// Shown instead of calling the translator when the input box is empty.
pub const PLEASE_ENTER: &str = "# Please enter a command.";
/// Shown before the first conversion of a session.
pub const PLACEHOLDER: &str = "# Code will appear here after conversion.";

/* ───────────────────── Supported commands ───────────────────── */

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommandHelp {
    pub category: &'static str,
    pub example: &'static str,
}

pub const SUPPORTED_COMMANDS: &[CommandHelp] = &[
    CommandHelp {
        category: "Arithmetic",
        example: "Add 10 and 5 / Subtract 20 and 3",
    },
    CommandHelp {
        category: "Loop",
        example: "Print all numbers from 1 to 5",
    },
    CommandHelp {
        category: "List",
        example: "Create a list named animals with dog cat bird",
    },
    CommandHelp {
        category: "Function",
        example: "Define a function named greeting that prints hello world",
    },
    CommandHelp {
        category: "Conditional",
        example: "If 20 is greater than 10, print big, else print small",
    },
    CommandHelp {
        category: "Dictionary",
        example: "Create a dictionary named user with key name set to Alice and key age set to 30",
    },
    CommandHelp {
        category: "String",
        example: "Reverse the string 'programming'",
    },
];

pub fn supported_commands_text() -> String {
    let width = SUPPORTED_COMMANDS
        .iter()
        .map(|c| c.category.len())
        .max()
        .unwrap_or(0);

    SUPPORTED_COMMANDS
        .iter()
        .map(|c| format!("{:<width$}  {}", format!("{}:", c.category), c.example, width = width + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/* ───────────────────── Conversion ───────────────────── */

/// What the form does on "Convert": zero-length input never reaches the
/// translator. Anything else is passed through byte for byte.
pub fn convert_detailed(input: &str) -> Option<Translation> {
    if input.is_empty() {
        tracing::debug!("empty input, translator not called");
        return None;
    }
    Some(translate_detailed(input))
}

pub fn convert(input: &str) -> String {
    match convert_detailed(input) {
        Some(t) => t.into_code(),
        None => PLEASE_ENTER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::{RuleKind, FALLBACK};

    #[test]
    fn empty_input_skips_translator() {
        assert_eq!(convert(""), PLEASE_ENTER);
        assert!(convert_detailed("").is_none());
    }

    #[test]
    fn whitespace_input_reaches_translator() {
        assert_eq!(convert("  \n "), FALLBACK);
    }

    #[test]
    fn byte_order_mark_is_not_stripped() {
        // U+FEFF is not whitespace, so it survives trimming and blocks every prefix.
        assert_eq!(convert("\u{feff}"), FALLBACK);
        assert_eq!(convert("\u{feff}add 1 and 2"), FALLBACK);
    }

    #[test]
    fn trailing_crlf_is_trimmed_by_the_translator() {
        let t = convert_detailed("Add 1 and 2\r\n").expect("translated");
        assert_eq!(t.rule(), Some(RuleKind::Arithmetic));
    }

    #[test]
    fn inner_carriage_return_reaches_the_snippet() {
        let code = convert("define a function named f that prints a\rb");
        assert!(code.contains("print('a\rb')"));
    }

    #[test]
    fn help_lists_every_rule() {
        let text = supported_commands_text();
        assert_eq!(text.lines().count(), SUPPORTED_COMMANDS.len());
        assert!(text.contains("Dictionary:"));
        assert!(text.contains("Reverse the string 'programming'"));
    }

    #[test]
    fn every_help_example_translates() {
        for help in SUPPORTED_COMMANDS {
            for example in help.example.split(" / ") {
                assert_ne!(convert(example), FALLBACK, "{example}");
            }
        }
    }
}
