//! Shell quoting for synthesized commands.
//!
//! Every value interpolated into a command (paths, env values, feature
//! names, link-arg payloads) goes through [`quote`]. Flag sequences handed
//! in by the dependency stage or the caller are already rendered shell text
//! and are passed through untouched.

/// Characters that never need quoting in a POSIX shell word.
fn is_shell_neutral(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | '=' | '+' | ',' | '@' | '%')
}

/// Quote a single value for use as (part of) one shell word.
///
/// Values made entirely of neutral characters are returned as-is, so common
/// paths and flags stay readable. Anything else is single-quoted, with
/// embedded single quotes rendered as `'\''`. The empty string quotes to
/// `''`.
pub fn quote(value: &str) -> String {
    if !value.is_empty() && value.chars().all(is_shell_neutral) {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}
