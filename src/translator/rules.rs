//! Renderers for the seven command types.
//!
//! Every renderer receives the already-normalized command and returns `None`
//! when its detailed pattern does not match.

use regex::Regex;
use std::sync::OnceLock;

use super::numbers::{canonical_int, increment_decimal, is_digit_like, numeric_tokens, py_float};

static RANGE_RE: OnceLock<Regex> = OnceLock::new();
static NAMED_RE: OnceLock<Regex> = OnceLock::new();
static PRINTS_RE: OnceLock<Regex> = OnceLock::new();
static CONDITIONAL_RE: OnceLock<Regex> = OnceLock::new();
static DICTIONARY_RE: OnceLock<Regex> = OnceLock::new();
static REVERSE_RE: OnceLock<Regex> = OnceLock::new();

fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("translator regex"))
}

fn range_re() -> &'static Regex {
    cached(&RANGE_RE, r"from (\d+) to (\d+)")
}

fn named_re() -> &'static Regex {
    cached(&NAMED_RE, r"named (\w+)")
}

fn prints_re() -> &'static Regex {
    cached(&PRINTS_RE, r"prints (.*)")
}

fn conditional_re() -> &'static Regex {
    cached(
        &CONDITIONAL_RE,
        r"if (\d+) is greater than (\d+), print (.+?), else print (.*)",
    )
}

fn dictionary_re() -> &'static Regex {
    cached(
        &DICTIONARY_RE,
        r"create a dictionary named (\w+) with key (\w+) set to (.+?) and key (\w+) set to (.+)",
    )
}

fn reverse_re() -> &'static Regex {
    cached(&REVERSE_RE, r#"reverse the string ['"](.*?)['"]"#)
}

/* ───────────────────────── Rules ───────────────────────── */

pub(super) fn arithmetic(cmd: &str) -> Option<String> {
    let numbers = numeric_tokens(cmd);
    let (a, b) = match numbers[..] {
        [a, b, ..] => (a, b),
        _ => return None,
    };

    let (var, op) = if cmd.starts_with("add") {
        ("sum_result", "+")
    } else {
        ("diff_result", "-")
    };

    Some(format!(
        "# Python Arithmetic\n{var} = {} {op} {}\nprint(f\"The result is: {{{var}}}\")",
        py_float(a),
        py_float(b)
    ))
}

pub(super) fn count_loop(cmd: &str) -> Option<String> {
    let c = range_re().captures(cmd)?;
    let start = canonical_int(&c[1]);
    let stop = increment_decimal(&canonical_int(&c[2]));

    Some(format!(
        "# Python Loop (inclusive end)\nfor i in range({start}, {stop}):\n    print(i)"
    ))
}

pub(super) fn list(cmd: &str) -> Option<String> {
    let name = named_re().captures(cmd)?.get(1)?.as_str();
    // First "with" anywhere in the command, even inside another word.
    let with_idx = cmd.find("with")?;

    let items = cmd[with_idx + 4..]
        .split_whitespace()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!(
        "# Python List Creation\n{name} = [{items}]\nprint(f\"Created list {name}: {{{name}}}\")"
    ))
}

pub(super) fn function(cmd: &str) -> Option<String> {
    let name = named_re().captures(cmd)?.get(1)?.as_str();
    let message = clean_message(prints_re().captures(cmd)?.get(1)?.as_str());

    Some(format!(
        "# Python Function Definition\ndef {name}():\n    print('{message}')\n\n# Call the function to test\n{name}()"
    ))
}

pub(super) fn conditional(cmd: &str) -> Option<String> {
    let c = conditional_re().captures(cmd)?;
    let (a, b) = (&c[1], &c[2]);
    let then_msg = clean_message(&c[3]);
    let else_msg = clean_message(&c[4]);

    Some(format!(
        "# Python Conditional Statement\nif {a} > {b}:\n    print('{then_msg}')\nelse:\n    print('{else_msg}')"
    ))
}

pub(super) fn dictionary(cmd: &str) -> Option<String> {
    let c = dictionary_re().captures(cmd)?;
    let name = &c[1];
    let (k1, v1) = (&c[2], format_value(c[3].trim()));
    let (k2, v2) = (&c[4], format_value(c[5].trim()));

    Some(format!(
        "# Python Dictionary Creation\n{name} = {{'{k1}': {v1}, '{k2}': {v2}}}\nprint(f\"Created dictionary {name}: {{{name}}}\")"
    ))
}

pub(super) fn string_reversal(cmd: &str) -> Option<String> {
    // Non-greedy: the capture ends at the first quote of either kind.
    let original = reverse_re().captures(cmd)?.get(1)?.as_str();
    let reversed: String = original.chars().rev().collect();

    Some(format!(
        "# Python String Reversal using slicing\n\
         original_string = '{original}'\n\
         reversed_string = original_string[::-1]  # '{reversed}'\n\
         print(f\"Original: {{original_string}}\")\n\
         print(f\"Reversed: {{reversed_string}}\")"
    ))
}

/* ───────────────────────── Helpers ───────────────────────── */

/// Strip surrounding whitespace, then single quotes, then double quotes, and
/// escape the remaining single quotes for a `'...'` literal.
pub(super) fn clean_message(raw: &str) -> String {
    raw.trim()
        .trim_matches('\'')
        .trim_matches('"')
        .replace('\'', "\\'")
}

/// Numeric-looking values (digits with at most one dot) stay bare, anything else is quoted.
/// The value is emitted as written, so `٣٠` stays `٣٠`.
pub(super) fn format_value(val: &str) -> String {
    let digits = val.replacen('.', "", 1);
    if !digits.is_empty() && digits.chars().all(is_digit_like) {
        val.to_string()
    } else {
        format!("'{val}'")
    }
}
