//! Human-readable rendering of values, used for `{other}` in messages.

use std::cmp::Ordering;
use std::fmt;

use super::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Uint(u) => write!(f, "{u}"),
            Value::Float32(x) => write!(f, "{x}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Complex(c) => write!(f, "{c}"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) | Value::Slice(items) => {
                f.write_str("[")?;
                write_separated(f, items.iter(), |f, item| write!(f, "{item}"))?;
                f.write_str("]")
            }
            Value::Map(entries) => {
                let mut sorted: Vec<&(Value, Value)> = entries.iter().collect();
                sorted.sort_by(|(a, _), (b, _)| cmp_keys(a, b));
                f.write_str("map[")?;
                write_separated(f, sorted.into_iter(), |f, (k, v)| write!(f, "{k}:{v}"))?;
                f.write_str("]")
            }
            Value::Pointer(target) => write!(f, "&{target}"),
            Value::Channel { len } => write!(f, "chan(len={len})"),
            Value::Other(opaque) => write!(f, "{opaque:?}"),
        }
    }
}

fn write_separated<I, T, F>(f: &mut fmt::Formatter<'_>, items: I, mut write_item: F) -> fmt::Result
where
    I: Iterator<Item = T>,
    F: FnMut(&mut fmt::Formatter<'_>, T) -> fmt::Result,
{
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write_item(f, item)?;
    }
    Ok(())
}

// Numeric keys sort by value, everything else by its rendered text.
fn cmp_keys(a: &Value, b: &Value) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.compare(&y).unwrap_or(Ordering::Equal),
        _ => a.to_string().cmp(&b.to_string()),
    }
}
