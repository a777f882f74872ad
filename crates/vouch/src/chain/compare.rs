//! Equality and ordering rules.
//!
//! Equality works on any kind through deep comparison of [`Value`]s. Ordering
//! rules only look at the integer, unsigned and float families and leave
//! every other kind alone.

use std::cmp::Ordering;

use super::{Chain, Verdict};
use crate::value::{Number, Value};

impl Chain {
    /// Fails unless the value deeply equals `other`.
    ///
    /// Message: `"{name} should be equal to {other}."`
    pub fn equal(self, other: impl Into<Value>) -> Self {
        let other = other.into();
        self.apply("equal", |chain| {
            if chain.value == other {
                Verdict::Pass
            } else {
                Verdict::Fail(format!("{} should be equal to {other}.", chain.name))
            }
        })
    }

    /// Fails when the value deeply equals `other`.
    ///
    /// Message: `"{name} should not be equal to {other}."`
    pub fn not_equal(self, other: impl Into<Value>) -> Self {
        let other = other.into();
        self.apply("not_equal", |chain| {
            if chain.value == other {
                Verdict::Fail(format!("{} should not be equal to {other}.", chain.name))
            } else {
                Verdict::Pass
            }
        })
    }

    /// Fails when the value is greater than or equal to `bound`.
    ///
    /// Message: `"{name} must be less than {bound}."`
    pub fn less_than(self, bound: impl Into<Number>) -> Self {
        let bound = bound.into();
        self.ordered("less_than", bound, Ordering::is_ge, |name| {
            format!("{name} must be less than {bound}.")
        })
    }

    /// Fails when the value is greater than `bound`.
    ///
    /// Message: `"{name} must be less than or equal to {bound}."`
    pub fn less_than_or_equal(self, bound: impl Into<Number>) -> Self {
        let bound = bound.into();
        self.ordered("less_than_or_equal", bound, Ordering::is_gt, |name| {
            format!("{name} must be less than or equal to {bound}.")
        })
    }

    /// Fails when the value is less than or equal to `bound`.
    ///
    /// Message: `"{name} must be greater than {bound}."`
    pub fn greater_than(self, bound: impl Into<Number>) -> Self {
        let bound = bound.into();
        self.ordered("greater_than", bound, Ordering::is_le, |name| {
            format!("{name} must be greater than {bound}.")
        })
    }

    /// Fails when the value is less than `bound`.
    ///
    /// Message: `"{name} must be greater than or equal to {bound}."`
    pub fn greater_than_or_equal(self, bound: impl Into<Number>) -> Self {
        let bound = bound.into();
        self.ordered("greater_than_or_equal", bound, Ordering::is_lt, |name| {
            format!("{name} must be greater than or equal to {bound}.")
        })
    }

    /// Fails when the value lies outside the inclusive range `min..=max`.
    ///
    /// Message: `"{name} must be between {min} and {max}."`
    pub fn between(self, min: impl Into<Number>, max: impl Into<Number>) -> Self {
        let (min, max) = (min.into(), max.into());
        self.apply("between", |chain| {
            let Some(n) = numeric(chain) else {
                return Verdict::Skip;
            };
            let below = n.compare(&min).is_some_and(Ordering::is_lt);
            let above = n.compare(&max).is_some_and(Ordering::is_gt);
            if below || above {
                Verdict::Fail(format!("{} must be between {min} and {max}.", chain.name))
            } else {
                Verdict::Pass
            }
        })
    }

    /// Shared body of the single-bound ordering rules. NaN on either side
    /// never fails.
    fn ordered<F, M>(self, rule: &'static str, bound: Number, fails: F, message: M) -> Self
    where
        F: FnOnce(Ordering) -> bool,
        M: FnOnce(&str) -> String,
    {
        self.apply(rule, |chain| {
            let Some(n) = numeric(chain) else {
                return Verdict::Skip;
            };
            match n.compare(&bound) {
                Some(ord) if fails(ord) => Verdict::Fail(message(&chain.name)),
                _ => Verdict::Pass,
            }
        })
    }
}

fn numeric(chain: &Chain) -> Option<Number> {
    if chain.kind.is_numeric() {
        chain.value.as_number()
    } else {
        None
    }
}
