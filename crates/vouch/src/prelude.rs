//! Prelude module for convenient imports.
//!
//! ```rust
//! use vouch::prelude::*;
//!
//! let report = collect([begin("Name", "").not_empty()]);
//! assert_eq!(report[0].messages, ["Name should not be empty."]);
//! ```

pub use crate::chain::{Chain, LengthMode, begin};
pub use crate::error::Error;
pub use crate::report::{ReportEntry, collect};
pub use crate::value::{Complex, Kind, Number, Value};
