//! Command translator.
//!
//! Turns one line of English into a short Python snippet:
//! - Normalizes the command (trim + lowercase) before any matching
//! - Dispatches through an ordered rule table, first leading phrase wins
//! - Returns the fixed fallback text when the owning rule cannot parse the details

mod numbers;
mod rules;


use std::fmt;

/// Returned whenever no rule produced a snippet.
pub const FALLBACK: &str =
    "# Error: Command not recognized or invalid format.\n# Please check the list of supported commands.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Arithmetic,
    Loop,
    List,
    Function,
    Conditional,
    Dictionary,
    StringReversal,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Arithmetic => "arithmetic",
            RuleKind::Loop => "loop",
            RuleKind::List => "list",
            RuleKind::Function => "function",
            RuleKind::Conditional => "conditional",
            RuleKind::Dictionary => "dictionary",
            RuleKind::StringReversal => "string_reversal",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One command type: the leading phrases it owns and the renderer that
/// turns a normalized command into code.
pub struct Rule {
    pub kind: RuleKind,
    pub prefixes: &'static [&'static str],
    pub render: fn(&str) -> Option<String>,
}

impl Rule {
    pub fn claims(&self, normalized: &str) -> bool {
        self.prefixes.iter().any(|p| normalized.starts_with(p))
    }
}

/// Evaluation order is fixed. New commands go at the end.
static RULES: [Rule; 7] = [
    Rule {
        kind: RuleKind::Arithmetic,
        prefixes: &["add", "subtract"],
        render: rules::arithmetic,
    },
    Rule {
        kind: RuleKind::Loop,
        prefixes: &["print all numbers from"],
        render: rules::count_loop,
    },
    Rule {
        kind: RuleKind::List,
        prefixes: &["create a list named"],
        render: rules::list,
    },
    Rule {
        kind: RuleKind::Function,
        prefixes: &["define a function named"],
        render: rules::function,
    },
    Rule {
        kind: RuleKind::Conditional,
        prefixes: &["if"],
        render: rules::conditional,
    },
    Rule {
        kind: RuleKind::Dictionary,
        prefixes: &["create a dictionary named"],
        render: rules::dictionary,
    },
    Rule {
        kind: RuleKind::StringReversal,
        prefixes: &["reverse the string"],
        render: rules::string_reversal,
    },
];

pub fn rules() -> &'static [Rule] {
    &RULES
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Matched { rule: RuleKind, code: String },
    Unmatched,
}

impl Translation {
    pub fn rule(&self) -> Option<RuleKind> {
        match self {
            Translation::Matched { rule, .. } => Some(*rule),
            Translation::Unmatched => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Translation::Matched { .. })
    }

    pub fn into_code(self) -> String {
        match self {
            Translation::Matched { code, .. } => code,
            Translation::Unmatched => FALLBACK.to_string(),
        }
    }
}

/// Trim and lowercase. Every capture is taken from this form, so the
/// original casing never reaches the generated code.
pub fn normalize(command: &str) -> String {
    command.trim().to_lowercase()
}

/// Translate a command, reporting which rule (if any) produced the code.
///
/// Only the first rule whose leading phrase matches is consulted. If its
/// detailed pattern fails the result is `Unmatched`; later rules are not tried.
pub fn translate_detailed(command: &str) -> Translation {
    let normalized = normalize(command);

    let Some(rule) = RULES.iter().find(|r| r.claims(&normalized)) else {
        tracing::debug!(command = %normalized, "no rule claims command");
        return Translation::Unmatched;
    };

    match (rule.render)(&normalized) {
        Some(code) => {
            tracing::debug!(rule = %rule.kind, "rule matched");
            Translation::Matched {
                rule: rule.kind,
                code,
            }
        }
        None => {
            tracing::debug!(rule = %rule.kind, command = %normalized, "rule claimed command but details did not match");
            Translation::Unmatched
        }
    }
}

/// Translate a command into a snippet, or the fallback text.
pub fn translate(command: &str) -> String {
    translate_detailed(command).into_code()
}
