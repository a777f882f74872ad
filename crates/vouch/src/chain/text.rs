//! String rules: length bounds, pattern matching and email addresses.
//!
//! All of these only inspect string values. By default, length is measured in
//! Unicode scalar values (chars); [`Chain::count_bytes`] switches a chain to
//! byte counting.

use std::collections::HashMap;
use std::sync::LazyLock;

use parking_lot::Mutex;
use regex::Regex;

use super::{Chain, Verdict};
use crate::email;
use crate::error::{Error, Result};
use crate::value::Value;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// RULES
// ============================================================================

impl Chain {
    /// Fails when the string length is outside `min..=max`.
    ///
    /// Message: `"{name} must be between {min} and {max} characters. You
    /// entered {len} characters"`
    pub fn length(self, min: usize, max: usize) -> Self {
        self.apply("length", |chain| match measured(chain) {
            Some(len) if len < min || len > max => Verdict::Fail(format!(
                "{} must be between {min} and {max} characters. You entered {len} characters",
                chain.name
            )),
            Some(_) => Verdict::Pass,
            None => Verdict::Skip,
        })
    }

    /// Fails when the string is shorter than `min`.
    ///
    /// Message: `"The length of {name} must be at least {min} characters. You
    /// entered {len} characters."`
    pub fn min_length(self, min: usize) -> Self {
        self.apply("min_length", |chain| match measured(chain) {
            Some(len) if len < min => Verdict::Fail(format!(
                "The length of {} must be at least {min} characters. You entered {len} characters.",
                chain.name
            )),
            Some(_) => Verdict::Pass,
            None => Verdict::Skip,
        })
    }

    /// Fails when the string is longer than `max`.
    ///
    /// Message: `"The length of {name} must be {max} characters or fewer. You
    /// entered {len} characters."`
    pub fn max_length(self, max: usize) -> Self {
        self.apply("max_length", |chain| match measured(chain) {
            Some(len) if len > max => Verdict::Fail(format!(
                "The length of {} must be {max} characters or fewer. You entered {len} characters.",
                chain.name
            )),
            Some(_) => Verdict::Pass,
            None => Verdict::Skip,
        })
    }

    /// Fails when the whole string does not match `pattern`.
    ///
    /// The pattern is anchored at both ends. It is compiled only when the rule
    /// actually runs, i.e. on an active chain holding a string, and the
    /// compiled form is reused by later calls with the same pattern.
    ///
    /// Message: `"{name} is not in the correct format"`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPattern`] when `pattern` is not a valid regular
    /// expression. This aborts the validation run instead of producing a
    /// message.
    ///
    /// ```rust
    /// use vouch::begin;
    ///
    /// # fn main() -> vouch::Result<()> {
    /// let zip = begin("Zip", "1234a").regexp(r"\d{5}")?;
    /// assert_eq!(zip.messages(), ["Zip is not in the correct format"]);
    ///
    /// assert!(begin("Zip", "12345").regexp("(").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn regexp(self, pattern: &str) -> Result<Self> {
        if self.suppressed || self.value.as_str().is_none() {
            return Ok(self.skip());
        }
        let regex = anchored(pattern)?;
        Ok(self.apply("regexp", |chain| match chain.value.as_str() {
            Some(s) if regex.is_match(s) => Verdict::Pass,
            Some(_) => Verdict::Fail(format!("{} is not in the correct format", chain.name)),
            None => Verdict::Skip,
        }))
    }

    /// Fails when the string is not an RFC 5322 mailbox such as
    /// `jane@example.com` or `Jane Doe <jane@example.com>`.
    ///
    /// Message: `"{name} is not a valid email address"`
    pub fn email(self) -> Self {
        self.apply("email", |chain| match &chain.value {
            Value::String(s) if email::is_mailbox(s) => Verdict::Pass,
            Value::String(_) => {
                Verdict::Fail(format!("{} is not a valid email address", chain.name))
            }
            _ => Verdict::Skip,
        })
    }
}

fn measured(chain: &Chain) -> Option<usize> {
    chain
        .value
        .as_str()
        .map(|s| chain.length_mode.measure(s))
}

/// Anchored patterns compiled so far, keyed by the caller's pattern.
static PATTERNS: LazyLock<Mutex<HashMap<String, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Upper bound on cached patterns; the cache is cleared when it is reached.
const MAX_CACHED_PATTERNS: usize = 256;

/// The anchored form of `pattern`, compiled once per process.
fn anchored(pattern: &str) -> Result<Regex> {
    let cached = PATTERNS.lock().get(pattern).cloned();
    if let Some(regex) = cached {
        return Ok(regex);
    }
    let regex = compile_anchored(pattern)?;
    let mut cache = PATTERNS.lock();
    if cache.len() >= MAX_CACHED_PATTERNS {
        cache.clear();
    }
    cache.insert(pattern.to_owned(), regex.clone());
    Ok(regex)
}

fn compile_anchored(pattern: &str) -> Result<Regex> {
    let invalid = |source| {
        tracing::warn!(pattern, error = %source, "invalid validation pattern");
        Error::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        }
    };
    // The bare pattern is checked first so that input like `a)|(b` cannot
    // slip through once wrapped in the anchoring group.
    Regex::new(pattern).map_err(invalid)?;
    Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)
}
