//! DOT identifier handling: reserved keywords and quoting.
//!
//! Names are stored exactly as the caller gave them. Escaping happens only
//! when an identifier is emitted, see [`safe_name`] and [`quote_id`].

use std::borrow::Cow;

/// DOT keywords that cannot appear as bare identifiers.
pub const RESERVED_NAMES: [&str; 5] = ["graph", "node", "edge", "subgraph", "digraph"];

/// Every DOT keyword. None of them may be emitted as a bare token.
pub const DOT_KEYWORDS: [&str; 6] = ["graph", "node", "edge", "subgraph", "digraph", "strict"];

/// Suffix appended to identifiers that collide with a reserved keyword.
pub const RESERVED_SUFFIX: &str = "TYPE";

/// Returns true if `name` matches a reserved keyword, ignoring ASCII case.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(name))
}

/// Returns true if `id` matches any DOT keyword, ignoring ASCII case.
#[must_use]
pub fn is_keyword(id: &str) -> bool {
    DOT_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(id))
}

/// Escapes a reserved identifier by appending [`RESERVED_SUFFIX`].
///
/// The original casing is preserved: `"Graph"` becomes `"GraphTYPE"`.
/// Any other name is returned unchanged.
///
/// ```rust
/// use dotgraph_core::names::safe_name;
///
/// assert_eq!(safe_name("graph"), "graphTYPE");
/// assert_eq!(safe_name("Graph"), "GraphTYPE");
/// assert_eq!(safe_name("myNode"), "myNode");
/// ```
#[must_use]
pub fn safe_name(name: &str) -> Cow<'_, str> {
    if is_reserved(name) {
        Cow::Owned(format!("{name}{RESERVED_SUFFIX}"))
    } else {
        Cow::Borrowed(name)
    }
}

fn is_id_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic() || !c.is_ascii()
}

fn is_id_continue(c: char) -> bool {
    is_id_start(c) || c.is_ascii_digit()
}

/// Returns true for a bare alphanumeric identifier (`[A-Za-z_][A-Za-z0-9_]*`,
/// non-ASCII letters allowed).
#[must_use]
pub fn is_plain_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if is_id_start(first) => chars.all(is_id_continue),
        _ => false,
    }
}

/// Returns true for a DOT numeral such as `42`, `-1.5` or `.25`.
#[must_use]
pub fn is_numeral(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    if digits.is_empty() || digits == "." {
        return false;
    }
    let mut seen_dot = false;
    for c in digits.chars() {
        match c {
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' => {}
            _ => return false,
        }
    }
    true
}

/// Returns true if `id` is a single well-formed double-quoted string.
///
/// Quotes between the outer pair must be backslash-escaped, and the closing
/// quote must not be.
#[must_use]
pub fn is_quoted(id: &str) -> bool {
    let Some(inner) = id
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return false;
    };
    let mut escaped = false;
    for c in inner.chars() {
        if c == '"' && !escaped {
            return false;
        }
        escaped = c == '\\' && !escaped;
    }
    !escaped
}

/// Returns true if `id` is a single HTML string: `<...>` with balanced
/// angle brackets, the outer pair enclosing everything.
#[must_use]
pub fn is_html(id: &str) -> bool {
    if !id.starts_with('<') {
        return false;
    }
    let mut depth = 0usize;
    for (i, c) in id.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1 == id.len();
                }
            }
            _ => {}
        }
    }
    false
}

/// Returns true if `id` can be emitted without quoting.
///
/// Keywords never can, whatever their case.
#[must_use]
pub fn is_safe_literal(id: &str) -> bool {
    if is_keyword(id) {
        return false;
    }
    is_plain_id(id) || is_numeral(id) || is_quoted(id) || is_html(id)
}

/// Quotes `id` unless it is already a valid literal.
///
/// Embedded double quotes are backslash-escaped.
#[must_use]
pub fn quote_id(id: &str) -> Cow<'_, str> {
    if is_safe_literal(id) {
        return Cow::Borrowed(id);
    }
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    let mut escaped = false;
    for c in id.chars() {
        if c == '"' && !escaped {
            quoted.push('\\');
        }
        escaped = c == '\\' && !escaped;
        quoted.push(c);
    }
    if escaped {
        // a trailing lone backslash would escape the closing quote
        quoted.push('\\');
    }
    quoted.push('"');
    Cow::Owned(quoted)
}
