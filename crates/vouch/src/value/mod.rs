//! The type-erased value a [`Chain`](crate::Chain) validates.
//!
//! [`Value`] is a closed enum over every shape the rules understand. It is
//! built through `From` conversions from ordinary Rust data, so callers rarely
//! name a variant directly:
//!
//! ```rust
//! use vouch::{Kind, Value};
//!
//! assert_eq!(Value::from(3u8).kind(), Kind::Uint);
//! assert_eq!(Value::from(vec!["a", "b"]).kind(), Kind::Slice);
//! assert_eq!(Value::from(["a", "b"]).kind(), Kind::Array);
//! assert_eq!(Value::from(None::<i32>).kind(), Kind::Nil);
//! assert_eq!(Value::from(Box::new([0u8; 0])).kind(), Kind::Pointer);
//! ```

mod display;
#[cfg(feature = "serde")]
mod json;
mod kind;
mod number;

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

use indexmap::IndexMap;

pub use kind::Kind;
pub use number::Number;

// ============================================================================
// VALUE
// ============================================================================

/// Any value a chain can validate.
///
/// Equality is deep: collections compare element by element, maps compare as
/// unordered key/value sets and pointers compare their targets. Values of
/// different variants are never equal, so `Int(5) != Uint(5)` and an array is
/// never equal to a slice with the same elements.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Nil,
    /// Boolean.
    Bool(bool),
    /// Signed integer, widened to 64 bits.
    Int(i64),
    /// Unsigned integer, widened to 64 bits.
    Uint(u64),
    /// Single-precision float. Never equal to a [`Value::Float`].
    Float32(f32),
    /// Double-precision float.
    Float(f64),
    /// Complex number.
    Complex(Complex),
    /// Text.
    String(String),
    /// Fixed-size sequence, built from `[T; N]`.
    Array(Vec<Value>),
    /// Growable sequence, built from `Vec<T>` or `&[T]`.
    Slice(Vec<Value>),
    /// Key/value pairs in source iteration order.
    Map(Vec<(Value, Value)>),
    /// Reference to another value, built from `Box<T>`.
    Pointer(Box<Value>),
    /// Snapshot of a message queue: the number of buffered messages.
    Channel {
        /// Messages waiting in the queue.
        len: usize,
    },
    /// A value the rules cannot look inside.
    Other(Opaque),
}

impl Value {
    // ==================== Constructors ====================

    /// Wraps a value behind a pointer.
    pub fn pointer(target: impl Into<Value>) -> Self {
        Self::Pointer(Box::new(target.into()))
    }

    /// A channel holding `len` buffered messages.
    pub const fn channel(len: usize) -> Self {
        Self::Channel { len }
    }

    /// Wraps an arbitrary comparable value.
    pub fn other<T>(value: T) -> Self
    where
        T: fmt::Debug + PartialEq + Send + Sync + 'static,
    {
        Self::Other(Opaque(Arc::new(value)))
    }

    // ==================== Type queries ====================

    /// The shape of this value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Float32(_) | Self::Float(_) => Kind::Float,
            Self::Complex(_) => Kind::Complex,
            Self::String(_) => Kind::String,
            Self::Array(_) => Kind::Array,
            Self::Slice(_) => Kind::Slice,
            Self::Map(_) => Kind::Map,
            Self::Pointer(_) => Kind::Pointer,
            Self::Channel { .. } => Kind::Channel,
            Self::Other(_) => Kind::Other,
        }
    }

    /// Returns true for [`Value::Nil`].
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    // ==================== Accessors ====================

    /// Element count of a collection.
    ///
    /// Arrays, slices, maps and channels have a length, and so does a pointer
    /// whose target is an array. Everything else returns `None`.
    pub fn collection_len(&self) -> Option<usize> {
        match self {
            Self::Array(items) | Self::Slice(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            Self::Channel { len } => Some(*len),
            Self::Pointer(target) => match target.as_ref() {
                Self::Array(items) => Some(items.len()),
                _ => None,
            },
            _ => None,
        }
    }

    /// The value as an ordered number, for the integer and float families.
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Self::Int(i) => Some(Number::Int(i)),
            Self::Uint(u) => Some(Number::Uint(u)),
            Self::Float32(f) => Some(Number::Float32(f)),
            Self::Float(f) => Some(Number::Float(f)),
            _ => None,
        }
    }

    /// The text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The target of a pointer value.
    pub fn pointee(&self) -> Option<&Value> {
        match self {
            Self::Pointer(target) => Some(target),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Complex(a), Self::Complex(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) | (Self::Slice(a), Self::Slice(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => map_eq(a, b),
            (Self::Pointer(a), Self::Pointer(b)) => a == b,
            (Self::Channel { len: a }, Self::Channel { len: b }) => a == b,
            (Self::Other(a), Self::Other(b)) => a == b,
            _ => false,
        }
    }
}

// Entries are paired one-to-one.
fn map_eq(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut paired = vec![false; b.len()];
    for entry in a {
        let Some(i) = (0..b.len()).find(|&i| !paired[i] && b[i] == *entry) else {
            return false;
        };
        paired[i] = true;
    }
    true
}

// ============================================================================
// COMPLEX
// ============================================================================

/// A complex number with 64-bit parts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Creates a complex number from its parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Whether both parts are zero.
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im)
    }
}

// ============================================================================
// OPAQUE
// ============================================================================

trait OpaqueValue: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq_dyn(&self, other: &dyn OpaqueValue) -> bool;
}

impl<T> OpaqueValue for T
where
    T: fmt::Debug + PartialEq + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn OpaqueValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// Shared handle to a value of a type the rules do not know about.
///
/// Two opaque values are equal when they hold the same concrete type and that
/// type's `PartialEq` says so.
#[derive(Clone)]
pub struct Opaque(Arc<dyn OpaqueValue>);

impl Opaque {
    /// Borrows the wrapped value as `T`, if that is its type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_dyn(&*other.0)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! value_from {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn from(v: $t) -> Self {
                    Self::$variant(v as $wide)
                }
            }
        )+
    };
}

value_from!(Int as i64: i8, i16, i32, i64, isize);
value_from!(Uint as u64: u8, u16, u32, u64, usize);
value_from!(Float32 as f32: f32);
value_from!(Float as f64: f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl From<Complex> for Value {
    fn from(v: Complex) -> Self {
        Self::Complex(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::String(v.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(v: Cow<'_, str>) -> Self {
        Self::String(v.into_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Box<T>> for Value {
    fn from(v: Box<T>) -> Self {
        Self::Pointer(Box::new((*v).into()))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Slice(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Self::Slice(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
    S: BuildHasher,
{
    fn from(v: HashMap<K, V, S>) -> Self {
        Self::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, S> From<IndexMap<K, V, S>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(v: IndexMap<K, V, S>) -> Self {
        Self::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
