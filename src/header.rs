//! Header resolution: the column set shared by every output row.

use std::collections::BTreeSet;

use crate::Record;

/// Sorted union of the keys of all records.
///
/// Sorting is by code point, so `"Zeta"` comes before `"alpha"`.
pub fn resolve_headers(records: &[Record]) -> Vec<String> {
    let keys: BTreeSet<&str> = records.iter().flat_map(|r| r.keys()).collect();
    keys.into_iter().map(str::to_string).collect()
}
