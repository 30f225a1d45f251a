//! Value parsers for the network description format.
//!
//! Each parser takes the text to the right of `=` and returns a message on
//! failure; the caller attaches the line number.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Point;

/// Everything before the first `#` that is not inside double quotes.
static UNCOMMENTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"^(?:[^"#]|"[^"]*(?:"|$))*"##).expect("comment pattern is valid")
});

/// `(x, y)` with optional whitespace around each coordinate.
static POINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*([-+]?(?:\d+(?:\.\d*)?|\.\d+))\s*,\s*([-+]?(?:\d+(?:\.\d*)?|\.\d+))\s*\)")
        .expect("point pattern is valid")
});

/// A whole value that is one double-quoted, non-empty name.
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"([^"]+)"$"#).expect("name pattern is valid"));

/// Removes a trailing `#` comment, ignoring `#` inside double quotes.
pub(super) fn strip_comment(line: &str) -> &str {
    UNCOMMENTED.find(line).map_or(line, |m| &line[..m.end()])
}

/// A finite number, with or without decimals.
pub(super) fn number(s: &str) -> Result<f64, String> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("expected a number, got '{s}'")),
    }
}

/// A non-negative whole number.
pub(super) fn count(s: &str) -> Result<usize, String> {
    let s = s.trim();
    s.parse::<usize>()
        .map_err(|_| format!("expected a whole number, got '{s}'"))
}

/// A non-empty double-quoted string.
pub(super) fn quoted(s: &str) -> Result<String, String> {
    let s = s.trim();
    QUOTED
        .captures(s)
        .map(|cap| cap[1].to_string())
        .ok_or_else(|| format!("expected a quoted name, got '{s}'"))
}

/// A single point such as `(120, 45.5)`.
pub(super) fn point(s: &str) -> Result<Point, String> {
    let mut points = points(s)?;
    match (points.pop(), points.is_empty()) {
        (Some(p), true) => Ok(p),
        _ => Err(format!("expected a single point like (x, y), got '{}'", s.trim())),
    }
}

/// One or more points separated by whitespace: `(0, 0) (10, 20)`.
///
/// Only whitespace may appear between points.
pub(super) fn points(s: &str) -> Result<Vec<Point>, String> {
    let unexpected = |rest: &str| format!("expected a point like (x, y), got '{}'", rest.trim());

    let mut out = Vec::new();
    let mut consumed = 0;
    for cap in POINT.captures_iter(s) {
        let whole = cap.get(0).map_or(consumed..consumed, |m| m.range());
        if !s[consumed..whole.start].trim().is_empty() {
            return Err(unexpected(&s[consumed..]));
        }
        out.push(Point::new(number(&cap[1])?, number(&cap[2])?));
        consumed = whole.end;
    }

    if !s[consumed..].trim().is_empty() {
        return Err(unexpected(&s[consumed..]));
    }
    if out.is_empty() {
        return Err("expected at least one point".to_string());
    }
    Ok(out)
}
