//! The fluent rule chain.
//!
//! A [`Chain`] wraps one named [`Value`] and is threaded through a sequence of
//! rule methods. Each method takes the chain by value and hands it back,
//! possibly with one more message appended:
//!
//! ```rust
//! use vouch::{begin, collect};
//!
//! let password = begin("Password", "hunter2").not_empty().min_length(8);
//! let age = begin("Age", 17).greater_than_or_equal(18);
//! let nickname = begin("Nickname", "").when(false).not_empty();
//!
//! let report = collect([&password, &age, &nickname]);
//! assert_eq!(report.len(), 2);
//! assert_eq!(
//!     report[0].messages,
//!     ["The length of Password must be at least 8 characters. You entered 7 characters."]
//! );
//! assert_eq!(report[1].messages, ["Age must be greater than or equal to 18."]);
//! ```
//!
//! # Rule contract
//!
//! Every rule behaves the same way:
//!
//! - on a suppressed chain (see [`Chain::when`]) it does nothing;
//! - on a value whose [`Kind`] the rule does not cover it does nothing;
//! - otherwise it appends exactly one message when the check fails.
//!
//! Messages only ever grow. A chain can be cloned to branch it; the clones
//! evolve independently.

mod compare;
mod custom;
mod presence;
mod text;

use crate::report::ReportEntry;
use crate::value::{Kind, Value};

pub use text::LengthMode;

/// Starts a chain for the value `value` displayed as `name`.
///
/// Construction never fails; `Value::Nil` and `None` are valid inputs.
pub fn begin(name: impl Into<String>, value: impl Into<Value>) -> Chain {
    Chain::new(name, value)
}

// ============================================================================
// CHAIN
// ============================================================================

/// Validation state for one named value.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    name: String,
    value: Value,
    kind: Kind,
    messages: Vec<String>,
    suppressed: bool,
    length_mode: LengthMode,
    last: Outcome,
}

/// What the most recent rule did. Drives [`Chain::with_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Skipped,
    Passed,
    Failed,
    FailedSilently,
}

/// Result of evaluating one rule against the current value.
pub(crate) enum Verdict {
    /// The rule does not apply to this kind.
    Skip,
    Pass,
    Fail(String),
    /// Failed, but without a message to record.
    FailSilently,
}

impl Chain {
    /// Creates a chain. Same as [`begin`].
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            kind: value.kind(),
            value,
            messages: Vec::new(),
            suppressed: false,
            length_mode: LengthMode::default(),
            last: Outcome::Skipped,
        }
    }

    // ==================== Gate ====================

    /// Suppresses every following rule when `condition` is false.
    ///
    /// Once suppressed, a chain stays suppressed: a later `when(true)` does
    /// not re-enable it.
    ///
    /// ```rust
    /// use vouch::begin;
    ///
    /// let chain = begin("Company", "").when(false).not_empty().when(true).not_nil();
    /// assert!(chain.is_valid());
    /// ```
    pub fn when(mut self, condition: bool) -> Self {
        if !condition {
            self.suppressed = true;
        }
        self
    }

    // ==================== Configuration ====================

    /// Replaces the message of the rule invoked just before this call.
    ///
    /// The text is used verbatim. If that rule failed without a message (an
    /// [`is`](Chain::is) predicate returning an empty message) the override is
    /// appended instead. Passing rules, skipped rules and suppressed chains
    /// are left alone.
    ///
    /// ```rust
    /// use vouch::begin;
    ///
    /// let chain = begin("pin", "12").min_length(4).with_message("PIN is too short");
    /// assert_eq!(chain.messages(), ["PIN is too short"]);
    /// ```
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if self.suppressed {
            return self;
        }
        match self.last {
            Outcome::Failed => {
                if let Some(last) = self.messages.last_mut() {
                    *last = message.into();
                }
            }
            Outcome::FailedSilently => {
                self.messages.push(message.into());
                self.last = Outcome::Failed;
            }
            Outcome::Skipped | Outcome::Passed => {}
        }
        self
    }

    /// Sets how `length`, `min_length` and `max_length` count for the rest
    /// of the chain.
    ///
    /// ```rust
    /// use vouch::{LengthMode, begin};
    ///
    /// let chain = begin("Code", "h\u{e9}").with_length_mode(LengthMode::Bytes).max_length(2);
    /// assert_eq!(chain.length_mode(), LengthMode::Bytes);
    /// assert!(!chain.is_valid());
    /// ```
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Shorthand for `with_length_mode(LengthMode::Bytes)`.
    pub fn count_bytes(self) -> Self {
        self.with_length_mode(LengthMode::Bytes)
    }

    // ==================== Accessors ====================

    /// Display name used in messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value being validated.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Shape of the value being validated.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Messages recorded so far, in rule order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// How string lengths are currently counted.
    pub fn length_mode(&self) -> LengthMode {
        self.length_mode
    }

    /// Whether a `when(false)` has turned the remaining rules off.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// True while no rule has failed with a message.
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// The report entry for this chain, or `None` when it has no messages.
    pub fn into_entry(self) -> Option<ReportEntry> {
        if self.messages.is_empty() {
            None
        } else {
            Some(ReportEntry {
                name: self.name,
                messages: self.messages,
            })
        }
    }

    // ==================== Rule plumbing ====================

    /// Runs one rule under the chain contract.
    pub(crate) fn apply<F>(mut self, rule: &'static str, evaluate: F) -> Self
    where
        F: FnOnce(&Self) -> Verdict,
    {
        if self.suppressed {
            self.last = Outcome::Skipped;
            return self;
        }
        self.last = match evaluate(&self) {
            Verdict::Skip => Outcome::Skipped,
            Verdict::Pass => Outcome::Passed,
            Verdict::Fail(message) => {
                tracing::trace!(field = %self.name, rule, kind = %self.kind, "rule failed");
                self.messages.push(message);
                Outcome::Failed
            }
            Verdict::FailSilently => {
                tracing::trace!(field = %self.name, rule, kind = %self.kind, "rule failed without message");
                Outcome::FailedSilently
            }
        };
        self
    }

    /// Marks the last rule as a no-op without evaluating anything.
    pub(crate) fn skip(mut self) -> Self {
        self.last = Outcome::Skipped;
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn failing(chain: Chain) -> Chain {
        chain.apply("always", |c| Verdict::Fail(format!("{} failed", c.name())))
    }

    #[test]
    fn begin_classifies_value() {
        let chain = begin("x", vec![1, 2]);
        assert_eq!(chain.name(), "x");
        assert_eq!(chain.kind(), Kind::Slice);
        assert!(chain.messages().is_empty());
        assert!(!chain.is_suppressed());
    }

    #[test]
    fn begin_accepts_nil() {
        let chain = begin("x", Value::Nil);
        assert_eq!(chain.kind(), Kind::Nil);
        assert!(chain.is_valid());
    }

    #[test]
    fn apply_appends_on_failure() {
        let chain = failing(failing(begin("x", 1)));
        assert_eq!(chain.messages(), ["x failed", "x failed"]);
        assert!(!chain.is_valid());
    }

    #[test]
    fn when_false_suppresses_following_rules() {
        let chain = failing(begin("x", 1)).when(false);
        let chain = failing(chain);
        assert_eq!(chain.messages(), ["x failed"]);
        assert!(chain.is_suppressed());
    }

    #[test]
    fn when_true_never_clears_suppression() {
        let chain = begin("x", 1).when(false).when(true);
        assert!(chain.is_suppressed());
        assert!(failing(chain).is_valid());
    }

    #[test]
    fn when_true_keeps_chain_active() {
        let chain = failing(begin("x", 1).when(true));
        assert!(!chain.is_suppressed());
        assert_eq!(chain.messages().len(), 1);
    }

    #[test]
    fn with_message_replaces_last_failure() {
        let chain = failing(failing(begin("x", 1))).with_message("custom");
        assert_eq!(chain.messages(), ["x failed", "custom"]);

        let chain = chain.with_message("again");
        assert_eq!(chain.messages(), ["x failed", "again"]);
    }

    #[test]
    fn with_message_ignores_passing_and_skipped_rules() {
        let passed = begin("x", 1).apply("ok", |_| Verdict::Pass).with_message("nope");
        assert!(passed.is_valid());

        let skipped = begin("x", 1).apply("skip", |_| Verdict::Skip).with_message("nope");
        assert!(skipped.is_valid());

        let fresh = begin("x", 1).with_message("nope");
        assert!(fresh.is_valid());
    }

    #[test]
    fn with_message_after_pass_does_not_touch_earlier_failure() {
        let chain = failing(begin("x", 1))
            .apply("ok", |_| Verdict::Pass)
            .with_message("nope");
        assert_eq!(chain.messages(), ["x failed"]);
    }

    #[test]
    fn with_message_fills_silent_failure() {
        let chain = begin("x", 1)
            .apply("silent", |_| Verdict::FailSilently)
            .with_message("explained");
        assert_eq!(chain.messages(), ["explained"]);
    }

    #[test]
    fn with_message_on_suppressed_chain_is_noop() {
        let chain = failing(begin("x", 1)).when(false).with_message("custom");
        assert_eq!(chain.messages(), ["x failed"]);
    }

    #[test]
    fn into_entry() {
        assert!(begin("x", 1).into_entry().is_none());

        let entry = failing(begin("x", 1)).into_entry().unwrap();
        assert_eq!(entry.name, "x");
        assert_eq!(entry.messages, vec!["x failed".to_string()]);
    }

    #[test]
    fn clones_branch_independently() {
        let base = begin("x", 1);
        let failed = failing(base.clone());
        assert!(base.is_valid());
        assert!(!failed.is_valid());
    }
}
