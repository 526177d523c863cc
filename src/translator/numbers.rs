//! Number handling shared by the renderers.
//!
//! Digits are Unicode decimal digits (`\p{Nd}`), so `١٢` reads as 12. Word
//! characters for boundary checks are alphanumerics plus `_`, which keeps
//! `5²` from reading as a number.

use regex::Regex;
use std::sync::OnceLock;

static DECIMAL_DIGIT_RE: OnceLock<Regex> = OnceLock::new();

fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    if c.is_ascii() {
        return false;
    }
    let re = DECIMAL_DIGIT_RE.get_or_init(|| Regex::new(r"\A\p{Nd}\z").expect("digit regex"));
    re.is_match(c.encode_utf8(&mut [0u8; 4]))
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Value of a decimal digit. Nd digits come in ascending runs of ten, so the
/// value is the offset from the start of the run.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Rewrite decimal digits of any script as ASCII, leaving other characters alone.
pub(super) fn ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| match digit_value(c) {
            Some(d) => char::from_digit(d, 10).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Word-bounded numeric tokens, left to right: the matches of
/// `\b\d+\.?\d*\b` under a backtracking engine, including the `1.` it
/// settles for in `1.5x`.
pub(super) fn numeric_tokens(cmd: &str) -> Vec<f64> {
    let chars: Vec<char> = cmd.chars().collect();
    let n = chars.len();
    let word_at = |k: usize| k < n && is_word(chars[k]);
    let digits_from = |mut k: usize| {
        while k < n && is_decimal_digit(chars[k]) {
            k += 1;
        }
        k
    };

    let mut out = Vec::new();
    let mut i = 0;
    while i < n {
        if !is_decimal_digit(chars[i]) || (i > 0 && is_word(chars[i - 1])) {
            i += 1;
            continue;
        }

        let int_end = digits_from(i);
        let end = if int_end < n && chars[int_end] == '.' {
            let frac_end = digits_from(int_end + 1);
            if frac_end > int_end + 1 && !word_at(frac_end) {
                frac_end
            } else if word_at(int_end + 1) {
                int_end + 1
            } else {
                int_end
            }
        } else if !word_at(int_end) {
            int_end
        } else {
            // No boundary anywhere inside the run; resume after it.
            i = int_end;
            continue;
        };

        let token: String = chars[i..end].iter().collect();
        if let Ok(v) = ascii_digits(&token).parse::<f64>() {
            out.push(v);
        }
        i = end;
    }
    out
}

/// `str.isdigit()`: decimal digits plus the common Numeric_Type=Digit
/// characters (super/subscripts, circled and dingbat digits).
pub(super) fn is_digit_like(c: char) -> bool {
    is_decimal_digit(c)
        || matches!(c,
            '\u{00B2}' | '\u{00B3}' | '\u{00B9}' | '\u{2070}' | '\u{24EA}' | '\u{24FF}' | '\u{19DA}'
            | '\u{2074}'..='\u{2079}'
            | '\u{2080}'..='\u{2089}'
            | '\u{2460}'..='\u{2468}'
            | '\u{2474}'..='\u{247C}'
            | '\u{2488}'..='\u{2490}'
            | '\u{24F5}'..='\u{24FD}'
            | '\u{2776}'..='\u{277E}'
            | '\u{2780}'..='\u{2788}'
            | '\u{278A}'..='\u{2792}'
            | '\u{1369}'..='\u{1371}'
            | '\u{10A40}'..='\u{10A43}'
            | '\u{1F100}'..='\u{1F10A}')
}

/* ───────────────────────── Floats ───────────────────────── */

type Digits = (Vec<u8>, i32);

fn round_trips((digits, exp): &Digits, value: f64) -> bool {
    let head = digits[0] as char;
    let tail = std::str::from_utf8(&digits[1..]).unwrap_or("");
    format!("{head}.{tail}e{exp}").parse::<f64>() == Ok(value)
}

/// Add one unit in the last place.
fn bump((digits, exp): &Digits) -> Digits {
    let mut digits = digits.clone();
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return (digits, *exp);
        }
    }
    digits.insert(0, b'1');
    digits.pop();
    (digits, exp + 1)
}

/// Shortest round-tripping significant digits of a finite, non-negative
/// value; among equally short candidates the nearest wins, ties to even.
fn shortest_digits(value: f64) -> Digits {
    // 767 fractional digits hold the exact expansion of any f64.
    let exact = format!("{value:.767e}");
    let (mantissa, exp) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    for n in 1..=17.min(all.len()) {
        let down: Digits = (all[..n].to_vec(), exp);
        let up = bump(&down);
        let rest = &all[n..];
        let nearest_is_up = match rest.first() {
            Some(&d) if d > b'5' => true,
            Some(&b'5') => {
                rest[1..].iter().any(|&d| d != b'0') || (down.0[n - 1] - b'0') % 2 == 1
            }
            _ => false,
        };
        let (first, second) = if nearest_is_up { (up, down) } else { (down, up) };
        for candidate in [first, second] {
            if round_trips(&candidate, value) {
                let (mut digits, exp) = candidate;
                while digits.len() > 1 && digits.last() == Some(&b'0') {
                    digits.pop();
                }
                return (digits, exp);
            }
        }
    }
    (all.into_iter().take(17).collect(), exp)
}

/// Render a float the way Python's `repr` does: `5.0`, `0.001`, `1e+16`, `inf`.
pub(super) fn py_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exp) = shortest_digits(value.abs());
    let digits = String::from_utf8(digits).unwrap_or_default();

    if (-4..16).contains(&exp) {
        let point = exp + 1;
        if point <= 0 {
            format!("{sign}0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
        } else {
            let point = point as usize;
            if point >= digits.len() {
                format!("{sign}{digits}{}.0", "0".repeat(point - digits.len()))
            } else {
                format!("{sign}{}.{}", &digits[..point], &digits[point..])
            }
        }
    } else {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits
        };
        format!("{sign}{mantissa}e{exp_sign}{:02}", exp.unsigned_abs())
    }
}

/* ───────────────────────── Integers ───────────────────────── */

/// ASCII digit string without leading zeros ("007" -> "7", "٠٠" -> "0").
pub(super) fn canonical_int(digits: &str) -> String {
    let ascii = ascii_digits(digits);
    let trimmed = ascii.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Add one to an ASCII digit string of any length.
pub(super) fn increment_decimal(digits: &str) -> String {
    let mut out = digits.as_bytes().to_vec();
    for b in out.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8(out).unwrap_or_default();
        }
    }
    out.insert(0, b'1');
    String::from_utf8(out).unwrap_or_default()
}
