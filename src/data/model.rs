use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

// ---------------------------------------------------------------------------
// Core value types shared by the loaders, the catalog and the UI
// ---------------------------------------------------------------------------

/// The fixed set of physical areas a classmark's books can be shelved in.
/// Both the location loader and the location search consult it; any location
/// outside this list is rejected at load time and yields no results at
/// query time.
pub const ALLOWED_LOCATIONS: [&str; 6] = [
    "Main Library",
    "Annexe",
    "Law Library",
    "Health Library",
    "Short Loan",
    "Store",
];

/// True iff `loc` is one of [`ALLOWED_LOCATIONS`] (exact, case-sensitive).
pub fn is_allowed_location(loc: &str) -> bool {
    ALLOWED_LOCATIONS.contains(&loc)
}

/// Validated output of the subjects loader: classmark → subject set.
/// `BTreeSet` keeps each classmark's subjects deduplicated and sorted.
pub type SubjectsMap = BTreeMap<String, BTreeSet<String>>;

/// Validated output of the locations loader: classmark → location.
pub type LocationsMap = BTreeMap<String, String>;

/// One search result row.
///
/// `subjects` is sorted ascending; rows returned together are sorted
/// ascending by the literal classmark string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRow {
    pub classmark: String,
    pub location: String,
    pub subjects: Vec<String>,
}
