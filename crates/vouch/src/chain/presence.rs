//! Presence rules: `not_nil`, `nil`, `not_empty`, `empty`.

use super::{Chain, Verdict};
use crate::value::Value;

impl Chain {
    /// Fails when the value is nil.
    ///
    /// Message: `"{name} must not be empty."`
    pub fn not_nil(self) -> Self {
        self.apply("not_nil", |chain| {
            if chain.value.is_nil() {
                Verdict::Fail(format!("{} must not be empty.", chain.name))
            } else {
                Verdict::Pass
            }
        })
    }

    /// Fails when the value is present.
    ///
    /// Message: `"{name} must be empty."`
    pub fn nil(self) -> Self {
        self.apply("nil", |chain| {
            if chain.value.is_nil() {
                Verdict::Pass
            } else {
                Verdict::Fail(format!("{} must be empty.", chain.name))
            }
        })
    }

    /// Fails when the value is nil or the zero value of its kind.
    ///
    /// Collections (and pointers to arrays) must hold at least one element,
    /// booleans must be `true`, numbers must be nonzero and strings must
    /// contain something other than whitespace. Pointers to anything else
    /// and opaque values are not checked.
    ///
    /// Message: `"{name} should not be empty."`
    pub fn not_empty(self) -> Self {
        self.apply("not_empty", |chain| match is_blank(&chain.value) {
            Some(true) => Verdict::Fail(format!("{} should not be empty.", chain.name)),
            Some(false) => Verdict::Pass,
            None => Verdict::Skip,
        })
    }

    /// Fails when the value is not the zero value of its kind.
    ///
    /// The inverse of [`not_empty`](Chain::not_empty), except for strings:
    /// any non-empty string fails, including one made only of whitespace.
    /// Nil passes.
    ///
    /// Message: `"{name} must be empty."`
    pub fn empty(self) -> Self {
        self.apply("empty", |chain| {
            let content = match &chain.value {
                Value::String(s) => Some(!s.is_empty()),
                other => is_blank(other).map(|blank| !blank),
            };
            match content {
                Some(true) => Verdict::Fail(format!("{} must be empty.", chain.name)),
                Some(false) => Verdict::Pass,
                None => Verdict::Skip,
            }
        })
    }
}

/// Whether the value counts as empty, or `None` when its kind has no notion
/// of emptiness.
fn is_blank(value: &Value) -> Option<bool> {
    match value {
        Value::Nil => Some(true),
        Value::Bool(b) => Some(!b),
        Value::Int(i) => Some(*i == 0),
        Value::Uint(u) => Some(*u == 0),
        Value::Float32(f) => Some(*f == 0.0),
        Value::Float(f) => Some(*f == 0.0),
        Value::Complex(c) => Some(c.is_zero()),
        Value::String(s) => Some(s.chars().all(char::is_whitespace)),
        Value::Array(_) | Value::Slice(_) | Value::Map(_) | Value::Channel { .. } => {
            value.collection_len().map(|len| len < 1)
        }
        // Only pointers to arrays have a length.
        Value::Pointer(_) => value.collection_len().map(|len| len < 1),
        Value::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::value::{Complex, Value};
    use crate::{Chain, begin};

    fn messages(chain: &Chain) -> Vec<&str> {
        chain.messages().iter().map(String::as_str).collect()
    }

    #[test]
    fn not_nil() {
        assert!(begin("x", "not nil").not_nil().is_valid());
        assert_eq!(messages(&begin("x", Value::Nil).not_nil()), ["x must not be empty."]);
    }

    #[test]
    fn nil() {
        assert!(begin("x", None::<i32>).nil().is_valid());
        assert_eq!(messages(&begin("x", 0).nil()), ["x must be empty."]);
    }

    #[rstest]
    #[case::nil(Value::Nil)]
    #[case::empty_string(Value::from(""))]
    #[case::whitespace(Value::from("    \n\t\r"))]
    #[case::unicode_whitespace(Value::from("\u{a0}\u{2003}"))]
    #[case::array(Value::from([0u8; 0]))]
    #[case::slice(Value::from(Vec::<String>::new()))]
    #[case::map(Value::from(HashMap::<String, String>::new()))]
    #[case::channel(Value::channel(0))]
    #[case::array_pointer(Value::from(Box::new([0u8; 0])))]
    #[case::bool(Value::from(false))]
    #[case::complex(Value::from(Complex::new(0.0, 0.0)))]
    #[case::float(Value::from(0.0))]
    #[case::int(Value::from(0))]
    #[case::uint(Value::from(0u64))]
    fn not_empty_fails(#[case] value: Value) {
        let chain = begin("x", value).not_empty();
        assert_eq!(messages(&chain), ["x should not be empty."]);
    }

    #[rstest]
    #[case::string(Value::from("not empty"))]
    #[case::padded(Value::from("  a  "))]
    #[case::array(Value::from([1]))]
    #[case::slice(Value::from(vec![""]))]
    #[case::map(Value::from(HashMap::from([("k", "v")])))]
    #[case::channel(Value::channel(1))]
    #[case::array_pointer(Value::from(Box::new([1, 2])))]
    #[case::bool(Value::from(true))]
    #[case::complex(Value::from(Complex::new(0.0, 1.0)))]
    #[case::float(Value::from(-0.5))]
    #[case::nan(Value::from(f64::NAN))]
    #[case::int(Value::from(-1))]
    #[case::uint(Value::from(1u8))]
    fn not_empty_passes(#[case] value: Value) {
        assert!(begin("x", value).not_empty().is_valid());
    }

    #[rstest]
    #[case::slice_pointer(Value::pointer(Vec::<i32>::new()))]
    #[case::int_pointer(Value::pointer(0))]
    #[case::opaque(Value::other(()))]
    fn not_empty_ignores_unsupported_kinds(#[case] value: Value) {
        assert!(begin("x", value.clone()).not_empty().is_valid());
        assert!(begin("x", value).empty().is_valid());
    }

    #[rstest]
    #[case::nil(Value::Nil)]
    #[case::empty_string(Value::from(""))]
    #[case::array(Value::from([0u8; 0]))]
    #[case::slice(Value::from(Vec::<String>::new()))]
    #[case::map(Value::from(HashMap::<String, String>::new()))]
    #[case::channel(Value::channel(0))]
    #[case::array_pointer(Value::from(Box::new([0u8; 0])))]
    #[case::bool(Value::from(false))]
    #[case::complex(Value::from(Complex::default()))]
    #[case::float(Value::from(0.0f32))]
    #[case::int(Value::from(0i16))]
    #[case::uint(Value::from(0usize))]
    fn empty_passes(#[case] value: Value) {
        assert!(begin("x", value).empty().is_valid());
    }

    #[rstest]
    #[case::string(Value::from("abc"))]
    #[case::array(Value::from([1]))]
    #[case::slice(Value::from(vec![1]))]
    #[case::map(Value::from(HashMap::from([(1, 2)])))]
    #[case::channel(Value::channel(4))]
    #[case::array_pointer(Value::from(Box::new([1])))]
    #[case::bool(Value::from(true))]
    #[case::complex(Value::from(Complex::new(1.0, 0.0)))]
    #[case::float(Value::from(0.1))]
    #[case::int(Value::from(-3))]
    #[case::uint(Value::from(3u32))]
    fn empty_fails_once(#[case] value: Value) {
        let chain = begin("x", value).empty();
        assert_eq!(messages(&chain), ["x must be empty."]);
    }

    #[test]
    fn whitespace_string_is_neither_empty_nor_filled() {
        assert_eq!(
            messages(&begin("x", "  ").not_empty()),
            ["x should not be empty."]
        );
        assert_eq!(messages(&begin("x", "  ").empty()), ["x must be empty."]);
    }
}
