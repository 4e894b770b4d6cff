use std::collections::{BTreeMap, BTreeSet};

use super::model::{is_allowed_location, LocationsMap, SearchRow, SubjectsMap};

// ---------------------------------------------------------------------------
// Catalog – immutable cross-reference index over the two loaded mappings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Entry {
    /// Empty string means "no location recorded"; such entries never
    /// appear in query results.
    location: String,
    subjects: BTreeSet<String>,
}

/// Built once from the validated mappings; all queries are read-only.
/// `BTreeMap`/`BTreeSet` keys iterate in literal string order, which is the
/// required output ordering for result rows ("A" < "AB" < "B").
#[derive(Debug, Clone)]
pub struct Catalog {
    by_classmark: BTreeMap<String, Entry>,
    by_subject_lower: BTreeMap<String, BTreeSet<String>>,
    by_location: BTreeMap<String, BTreeSet<String>>,
}

impl Catalog {
    pub fn new(subjects: SubjectsMap, locations: LocationsMap) -> Self {
        let mut by_classmark: BTreeMap<String, Entry> = locations
            .into_iter()
            .map(|(mark, location)| {
                (
                    mark,
                    Entry {
                        location,
                        subjects: BTreeSet::new(),
                    },
                )
            })
            .collect();

        // A classmark may carry subjects without any location; keep it in
        // the index but invisible to every query until a location exists.
        for (mark, subs) in subjects {
            by_classmark
                .entry(mark)
                .or_insert_with(|| Entry {
                    location: String::new(),
                    subjects: BTreeSet::new(),
                })
                .subjects
                .extend(subs);
        }

        let mut by_subject_lower: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut by_location: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (mark, entry) in &by_classmark {
            for subject in &entry.subjects {
                by_subject_lower
                    .entry(subject.to_lowercase())
                    .or_default()
                    .insert(mark.clone());
            }
            if !entry.location.is_empty() {
                by_location
                    .entry(entry.location.clone())
                    .or_default()
                    .insert(mark.clone());
            }
        }

        Catalog {
            by_classmark,
            by_subject_lower,
            by_location,
        }
    }

    fn row(&self, mark: &str) -> SearchRow {
        let entry = &self.by_classmark[mark];
        SearchRow {
            classmark: mark.to_string(),
            location: entry.location.clone(),
            subjects: entry.subjects.iter().cloned().collect(),
        }
    }

    /// Substring search over all subject labels, case-insensitive.
    pub fn search_by_subject(&self, query: &str) -> Vec<SearchRow> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        let mut matches: BTreeSet<&str> = BTreeSet::new();
        for (subject, marks) in &self.by_subject_lower {
            if subject.contains(&term) {
                matches.extend(marks.iter().map(String::as_str));
            }
        }
        matches
            .into_iter()
            .filter(|mark| !self.by_classmark[*mark].location.is_empty())
            .map(|mark| self.row(mark))
            .collect()
    }

    /// Exact classmark lookup; at most one row.
    pub fn search_by_classmark(&self, mark: &str) -> Vec<SearchRow> {
        let mark = mark.trim().to_uppercase();
        if mark.is_empty() {
            return Vec::new();
        }
        match self.by_classmark.get(&mark) {
            Some(entry) if !entry.location.is_empty() => vec![self.row(&mark)],
            _ => Vec::new(),
        }
    }

    /// Every classmark shelved at `loc`.  Location comparison is exact
    /// (trimmed, case-sensitive) and restricted to the allowed set.
    pub fn search_by_location(&self, loc: &str) -> Vec<SearchRow> {
        let loc = loc.trim();
        if !is_allowed_location(loc) {
            return Vec::new();
        }
        match self.by_location.get(loc) {
            Some(marks) => marks.iter().map(|mark| self.row(mark)).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects(entries: &[(&str, &[&str])]) -> SubjectsMap {
        entries
            .iter()
            .map(|(mark, subs)| {
                (
                    mark.to_string(),
                    subs.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    fn locations(entries: &[(&str, &str)]) -> LocationsMap {
        entries
            .iter()
            .map(|(mark, loc)| (mark.to_string(), loc.to_string()))
            .collect()
    }

    fn marks(rows: &[SearchRow]) -> Vec<&str> {
        rows.iter().map(|r| r.classmark.as_str()).collect()
    }

    #[test]
    fn subject_search_matches_substring() {
        let catalog = Catalog::new(
            subjects(&[("PR", &["English", "Literature"])]),
            locations(&[("PR", "Main Library")]),
        );
        let rows = catalog.search_by_subject("lit");
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            SearchRow {
                classmark: "PR".into(),
                location: "Main Library".into(),
                subjects: vec!["English".into(), "Literature".into()],
            }
        );
    }

    #[test]
    fn subject_search_normalises_query() {
        let catalog = Catalog::new(
            subjects(&[("PR", &["English"])]),
            locations(&[("PR", "Main Library")]),
        );
        assert_eq!(catalog.search_by_subject("  ENGL  ").len(), 1);
        assert!(catalog.search_by_subject("").is_empty());
        assert!(catalog.search_by_subject("   ").is_empty());
        assert!(catalog.search_by_subject("chemistry").is_empty());
    }

    #[test]
    fn subject_search_unions_across_classmarks() {
        let catalog = Catalog::new(
            subjects(&[
                ("PR", &["English Literature"]),
                ("PS", &["American Literature"]),
            ]),
            locations(&[("PR", "Main Library"), ("PS", "Main Library")]),
        );
        assert_eq!(marks(&catalog.search_by_subject("literature")), ["PR", "PS"]);
    }

    #[test]
    fn classmarks_without_location_are_invisible() {
        let catalog = Catalog::new(subjects(&[("PR", &["English"])]), locations(&[]));
        assert!(catalog.search_by_classmark("PR").is_empty());
        assert!(catalog.search_by_subject("eng").is_empty());
    }

    #[test]
    fn classmark_search_normalises_and_filters() {
        let catalog = Catalog::new(
            subjects(&[("PR", &["English"])]),
            locations(&[("PR", "Main Library")]),
        );
        assert_eq!(marks(&catalog.search_by_classmark(" pr ")), ["PR"]);
        assert!(catalog.search_by_classmark("").is_empty());
        assert!(catalog.search_by_classmark("ZZ").is_empty());
    }

    #[test]
    fn location_search_sorts_by_literal_string() {
        let catalog = Catalog::new(
            subjects(&[]),
            locations(&[
                ("B", "Main Library"),
                ("AB", "Main Library"),
                ("A", "Main Library"),
            ]),
        );
        // "AB" sorts before "B": literal string order, not rank order.
        assert_eq!(marks(&catalog.search_by_location("Main Library")), ["A", "AB", "B"]);
    }

    #[test]
    fn location_search_rejects_unknown_locations() {
        let catalog = Catalog::new(subjects(&[]), locations(&[("A", "Main Library")]));
        assert!(catalog.search_by_location("NotAllowed").is_empty());
        assert!(catalog.search_by_location("main library").is_empty());
        // Allowed but unused location: empty, not an error.
        assert!(catalog.search_by_location("Store").is_empty());
    }

    #[test]
    fn location_search_trims_input() {
        let catalog = Catalog::new(subjects(&[]), locations(&[("A", "Store")]));
        assert_eq!(marks(&catalog.search_by_location("  Store ")), ["A"]);
    }

    #[test]
    fn entry_with_location_but_no_subjects_still_returned() {
        let catalog = Catalog::new(subjects(&[]), locations(&[("K", "Law Library")]));
        let rows = catalog.search_by_classmark("K");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].subjects.is_empty());
    }
}
