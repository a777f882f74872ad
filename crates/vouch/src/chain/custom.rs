//! Caller-defined predicates and pointer unwrapping.

use super::{Chain, Verdict};
use crate::value::Value;

impl Chain {
    /// Runs a custom predicate against the value.
    ///
    /// `Ok(())` passes. `Err(message)` fails and records `message` verbatim;
    /// an empty message fails without recording anything.
    ///
    /// ```rust
    /// use vouch::begin;
    ///
    /// let even = begin("Count", 3).is(|v| match v.as_number() {
    ///     Some(vouch::Number::Int(n)) if n % 2 == 0 => Ok(()),
    ///     _ => Err("Count must be even.".to_string()),
    /// });
    /// assert_eq!(even.messages(), ["Count must be even."]);
    /// ```
    pub fn is<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&Value) -> Result<(), String>,
    {
        self.apply("is", |chain| match predicate(&chain.value) {
            Ok(()) => Verdict::Pass,
            Err(message) if message.is_empty() => Verdict::FailSilently,
            Err(message) => Verdict::Fail(message),
        })
    }

    /// Replaces a pointer with the value it points to, re-classifying the
    /// kind. Other kinds are left as they are. Never fails.
    ///
    /// ```rust
    /// use vouch::{Kind, begin};
    ///
    /// let chain = begin("Tags", Box::new(vec!["a"])).unwrap_pointer();
    /// assert_eq!(chain.kind(), Kind::Slice);
    /// ```
    pub fn unwrap_pointer(mut self) -> Self {
        if self.suppressed {
            return self.skip();
        }
        if let Value::Pointer(target) = self.value {
            self.value = *target;
            self.kind = self.value.kind();
        }
        self.apply("unwrap_pointer", |_| Verdict::Pass)
    }
}
