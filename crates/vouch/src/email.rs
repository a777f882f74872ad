//! RFC 5322 mailbox parsing for the `email` rule.
//!
//! Accepts a bare `addr-spec` (`jane@example.com`) or a `name-addr`
//! (`Jane Doe <jane@example.com>`). Display names may use the obsolete
//! dotted form (`John Q. Public`), comments such as `(Jane Doe)` may surround
//! the address, and atoms may contain non-ASCII characters. The domain must
//! be a dot-atom of at least two labels or a bracketed domain literal, so
//! `a@b` is rejected.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

const ATEXT: &str = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-[^\x00-\x7F]]";
const QUOTED: &str = r#""(?:[^"\\\r\n]|\\[^\r\n])*""#;
const LABEL: &str =
    r"[A-Za-z0-9[^\x00-\x7F]](?:[A-Za-z0-9\-[^\x00-\x7F]]{0,61}[A-Za-z0-9[^\x00-\x7F]])?";
const LITERAL: &str = r"\[[^\[\]\\\s]*\]";

static ADDR_SPEC: LazyLock<String> = LazyLock::new(|| {
    format!(
        r"(?:{ATEXT}+(?:\.{ATEXT}+)*|{QUOTED})@(?:{LABEL}(?:\.{LABEL})+|{LITERAL})"
    )
});

static MAILBOX: LazyLock<Regex> = LazyLock::new(|| {
    let addr = ADDR_SPEC.as_str();
    let word = format!(r"(?:{ATEXT}+|{QUOTED})");
    let phrase = format!(r"{word}(?:[ \t]*(?:{word}|\.))*");
    Regex::new(&format!(r"^(?:{addr}|(?:{phrase}[ \t]*)?<{addr}>)$"))
        .expect("mailbox grammar compiles")
});

/// Whether `input` parses as a single mailbox.
pub(crate) fn is_mailbox(input: &str) -> bool {
    strip_comments(input).is_some_and(|text| MAILBOX.is_match(text.trim()))
}

/// Replaces every comment outside quoted strings and domain literals with a
/// single space. `None` when the parentheses do not balance.
fn strip_comments(input: &str) -> Option<Cow<'_, str>> {
    if !input.contains(['(', ')']) {
        return Some(Cow::Borrowed(input));
    }
    let mut out = String::with_capacity(input.len());
    let mut depth = 0usize;
    let mut quoted = false;
    let mut literal = false;
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if depth > 0 {
            match c {
                '\\' => {
                    chars.next()?;
                }
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        out.push(' ');
                    }
                }
                _ => {}
            }
            continue;
        }
        match c {
            '\\' if quoted => {
                out.push(c);
                out.push(chars.next()?);
            }
            '"' if !literal => {
                quoted = !quoted;
                out.push(c);
            }
            '[' if !quoted => {
                literal = true;
                out.push(c);
            }
            ']' if !quoted => {
                literal = false;
                out.push(c);
            }
            '(' if !quoted && !literal => depth = 1,
            ')' if !quoted && !literal => return None,
            _ => out.push(c),
        }
    }
    (depth == 0).then_some(Cow::Owned(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_addresses() {
        assert!(is_mailbox("a@b.com"));
        assert!(is_mailbox("first.last+tag@sub.example.co.uk"));
        assert!(is_mailbox("  padded@example.com \t"));
        assert!(is_mailbox(r#""quoted local"@example.com"#));
        assert!(is_mailbox("user@[192.168.0.1]"));
    }

    #[test]
    fn name_addr() {
        assert!(is_mailbox("Jane Doe <jane@example.com>"));
        assert!(is_mailbox(r#""Doe, Jane" <jane@example.com>"#));
        assert!(is_mailbox("<jane@example.com>"));
    }

    #[test]
    fn accepts_dotted_display_names() {
        assert!(is_mailbox("John Q. Public <jqp@example.com>"));
        assert!(is_mailbox("J. R. R. Tolkien <jrr@example.com>"));
        assert!(is_mailbox(r#"Dr. "Jane" Doe <jane@example.com>"#));
    }

    #[test]
    fn accepts_comments() {
        assert!(is_mailbox("jane@example.com (Jane Doe)"));
        assert!(is_mailbox("(work) jane@example.com"));
        assert!(is_mailbox("Jane (nick (nested)) Doe <jane@example.com>"));
        assert!(is_mailbox(r"jane@example.com (with \) escaped)"));
        assert!(is_mailbox(r#""a (not a comment" <jane@example.com>"#));
    }

    #[test]
    fn accepts_non_ascii() {
        assert!(is_mailbox("jos\u{e9}@example.com"));
        assert!(is_mailbox("J\u{fc}rgen <j\u{fc}rgen@b\u{fc}cher.de>"));
        assert!(is_mailbox("\u{7528}\u{6237}@\u{4f8b}\u{5b50}.\u{4e2d}\u{56fd}"));
    }

    #[test]
    fn rejects_malformed() {
        assert!(!is_mailbox("a@b"));
        assert!(!is_mailbox(""));
        assert!(!is_mailbox("plain"));
        assert!(!is_mailbox("@example.com"));
        assert!(!is_mailbox("user@"));
        assert!(!is_mailbox("two@@example.com"));
        assert!(!is_mailbox(".dot@example.com"));
        assert!(!is_mailbox("dot.@example.com"));
        assert!(!is_mailbox("a@-bad.com"));
        assert!(!is_mailbox("Jane <jane@example.com"));
        assert!(!is_mailbox("a@b.com, c@d.com"));
    }

    #[test]
    fn rejects_malformed_comments_and_single_label_domains() {
        assert!(!is_mailbox("jane@example.com (unclosed"));
        assert!(!is_mailbox("jane@example.com )"));
        assert!(!is_mailbox("(only a comment)"));
        assert!(!is_mailbox("a@b (comment)"));
        assert!(!is_mailbox("jos\u{e9}@b"));
        assert!(!is_mailbox("John Q. Public <jqp@b>"));
        assert!(!is_mailbox(". Public <jqp@example.com>"));
    }
}
