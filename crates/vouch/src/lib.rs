//! # vouch
//!
//! Fluent rule chains that validate named values and collect human-readable
//! messages keyed by field name.
//!
//! ## Quick Start
//!
//! ```rust
//! use vouch::prelude::*;
//!
//! # fn main() -> vouch::Result<()> {
//! let username = begin("Username", "al").not_empty().length(3, 20);
//! let email = begin("Email", "al@example").email();
//! let age = begin("Age", 42u8).between(18, 130);
//! let zip = begin("Zip", "12345").regexp(r"\d{5}")?;
//!
//! let report = collect([username, email, age, zip]);
//! assert_eq!(report.len(), 2);
//! assert_eq!(
//!     report[0].messages,
//!     ["Username must be between 3 and 20 characters. You entered 2 characters"]
//! );
//! assert_eq!(report[1].messages, ["Email is not a valid email address"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Building blocks
//!
//! - [`begin`] wraps a value in a [`Chain`]. The value's [`Kind`] is decided
//!   once, from its [`Value`] shape.
//! - Rule methods on [`Chain`] append at most one message each. Rules that do
//!   not apply to the value's kind do nothing, so numeric and string rules can
//!   share a chain.
//! - [`Chain::when`] turns every following rule off.
//! - [`collect`] keeps the chains that failed, as [`ReportEntry`] values.
//!
//! Failed rules are data, not errors. The only [`Error`] is a malformed
//! pattern passed to [`Chain::regexp`].

pub mod chain;
mod email;
pub mod error;
pub mod prelude;
pub mod report;
pub mod value;

pub use chain::{Chain, LengthMode, begin};
pub use error::{Error, Result};
pub use report::{ReportEntry, collect};
pub use value::{Complex, Kind, Number, Opaque, Value};
