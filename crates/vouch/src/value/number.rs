//! Numeric bounds for the comparison rules.
//!
//! A [`Number`] is what `less_than`, `greater_than` and `between` accept. Any
//! primitive integer or float converts into one, so a bound of the wrong
//! type is a compile error rather than a runtime failure.

use std::cmp::Ordering;
use std::fmt;

/// A number from one of the three ordered families.
///
/// `f32` keeps its own variant so that it renders the way it was written
/// (`0.1`, not the digits of its widened `f64`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Single-precision float.
    Float32(f32),
    /// Double-precision float.
    Float(f64),
}

// Exactly representable as f64.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

impl Number {
    /// Orders two numbers by mathematical value, across families.
    ///
    /// Integer/float pairs are compared exactly, without rounding the integer
    /// to the nearest float. Returns `None` when either side is NaN.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Float32(a), _) => Self::Float(f64::from(a)).compare(other),
            (_, Self::Float32(b)) => self.compare(&Self::Float(f64::from(b))),
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Uint(a), Self::Uint(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Int(a), Self::Uint(b)) => Some(cmp_int_uint(a, b)),
            (Self::Uint(a), Self::Int(b)) => Some(cmp_int_uint(b, a).reverse()),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
            (Self::Uint(a), Self::Float(b)) => cmp_uint_float(a, b),
            (Self::Float(a), Self::Uint(b)) => cmp_uint_float(b, a).map(Ordering::reverse),
        }
    }
}

fn cmp_int_uint(a: i64, b: u64) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u64).cmp(&b)
    }
}

fn cmp_int_float(a: i64, b: f64) -> Option<Ordering> {
    if b.is_nan() {
        return None;
    }
    if b >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if b < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }
    let whole = b.trunc();
    Some(a.cmp(&(whole as i64)).then_with(|| cmp_fraction(b - whole)))
}

fn cmp_uint_float(a: u64, b: f64) -> Option<Ordering> {
    if b.is_nan() {
        return None;
    }
    if b >= TWO_POW_64 {
        return Some(Ordering::Less);
    }
    if b < 0.0 {
        return Some(Ordering::Greater);
    }
    let whole = b.trunc();
    Some(a.cmp(&(whole as u64)).then_with(|| cmp_fraction(b - whole)))
}

/// Orders an integer equal to `whole` against `whole + fraction`.
fn cmp_fraction(fraction: f64) -> Ordering {
    0.0_f64.partial_cmp(&fraction).unwrap_or(Ordering::Equal)
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Float32(x) => write!(f, "{x}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Number {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn from(v: $t) -> Self {
                    Self::$variant(v as $wide)
                }
            }
        )+
    };
}

number_from!(Int as i64: i8, i16, i32, i64, isize);
number_from!(Uint as u64: u8, u16, u32, u64, usize);
number_from!(Float32 as f32: f32);
number_from!(Float as f64: f64);
