//! Aggregation of finished chains into a report.

use std::borrow::Borrow;

use crate::chain::Chain;

/// The failure messages recorded for one named value.
///
/// Only produced for chains with at least one message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportEntry {
    /// Display name the chain was built with.
    pub name: String,
    /// Messages in the order the rules produced them.
    pub messages: Vec<String>,
}

/// Collects the chains that have messages, in the order given.
///
/// Accepts owned chains or references. Valid chains are dropped from the
/// output; nothing is sorted or deduplicated.
///
/// ```rust
/// use vouch::{begin, collect};
///
/// let name = begin("Name", "").not_empty();
/// let email = begin("Email", "jane@example.com").email();
///
/// let report = collect([name, email]);
/// assert_eq!(report.len(), 1);
/// assert_eq!(report[0].name, "Name");
/// ```
pub fn collect<I>(chains: I) -> Vec<ReportEntry>
where
    I: IntoIterator,
    I::Item: Borrow<Chain>,
{
    let mut total = 0usize;
    let entries: Vec<ReportEntry> = chains
        .into_iter()
        .inspect(|_| total += 1)
        .filter_map(|chain| {
            let chain = chain.borrow();
            if chain.is_valid() {
                None
            } else {
                Some(ReportEntry {
                    name: chain.name().to_owned(),
                    messages: chain.messages().to_vec(),
                })
            }
        })
        .collect();
    tracing::debug!(chains = total, failed = entries.len(), "validation collected");
    entries
}
