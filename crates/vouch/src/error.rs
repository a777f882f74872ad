//! Error types.
//!
//! Failed rules are not errors: they append a message to the chain. This type
//! covers programming mistakes that make a rule impossible to evaluate.

/// Errors that abort a validation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `regexp` rule was given a pattern that does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as the caller wrote it.
        pattern: String,
        /// Why the regex engine rejected it.
        #[source]
        source: regex::Error,
    },
}

/// Result alias for fallible chain operations.
pub type Result<T> = std::result::Result<T, Error>;
