use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A quoted token that is exactly a signed decimal number: `"-791.83"`, `"1000"`.
static QUOTED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([-+]?[0-9]+(?:\.[0-9]+)?)""#).expect("quoted number pattern is valid")
});

/// Rewrite the balance endpoint's quasi-JSON into strict JSON.
///
/// `["balance":"-791.83","credit":"1000","currency":"EUR"]` becomes
/// `{"balance":-791.83,"credit":1000,"currency":"EUR"}`. The outer `[`/`]` pair is replaced
/// with `{`/`}` first, then quotes are removed around numeric tokens. Unquoted tokens are
/// rewritten into JSON number syntax: a leading `+` is dropped and the integer part loses
/// its leading zeros (`"007.50"` becomes `7.50`). Input that is already valid JSON is
/// returned unchanged.
pub fn repair_balance_json(body: &str) -> String {
    let trimmed = body.trim();
    let braced = match trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        Some(inner) => format!("{{{inner}}}"),
        None => trimmed.to_owned(),
    };

    QUOTED_NUMBER
        .replace_all(&braced, |caps: &Captures<'_>| json_number(&caps[1]))
        .into_owned()
}

/// `token` matches `[-+]?[0-9]+(\.[0-9]+)?`.
fn json_number(token: &str) -> String {
    let (sign, unsigned) = match token.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", token.trim_start_matches('+')),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };
    match fraction {
        Some(fraction) => format!("{sign}{integer}.{fraction}"),
        None => format!("{sign}{integer}"),
    }
}
