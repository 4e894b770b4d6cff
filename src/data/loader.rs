use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use thiserror::Error;

use super::classmark::{expand_range, is_valid_classmark};
use super::model::{is_allowed_location, LocationsMap, SubjectsMap, ALLOWED_LOCATIONS};

// ---------------------------------------------------------------------------
// Load-time validation error
// ---------------------------------------------------------------------------

/// The single error kind raised while loading the CSV tables.  Load is
/// all-or-nothing: the first violation aborts and no partial mapping
/// escapes.  Data rows are numbered from 2 (the header is line 1).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataValidationError {
    #[error("{path}: {reason}")]
    File { path: String, reason: String },
    #[error("{path}:{line}: {reason}")]
    Row {
        path: String,
        line: u64,
        reason: String,
    },
}

impl DataValidationError {
    fn file(path: &str, reason: impl Into<String>) -> Self {
        DataValidationError::File {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    fn row(path: &str, line: u64, reason: impl Into<String>) -> Self {
        DataValidationError::Row {
            path: path.to_string(),
            line,
            reason: reason.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// CSV plumbing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SubjectRecord {
    subject: String,
    classmark: String,
}

#[derive(Debug, Deserialize)]
struct PerRowRecord {
    classmark: String,
    location: String,
}

#[derive(Debug, Deserialize)]
struct RangedRecord {
    start_classmark: String,
    end_classmark: String,
    location: String,
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(input)
}

/// Read the header row, normalize each name (strip a UTF-8 BOM, trim,
/// lowercase) and install the normalized names back on the reader so rows
/// deserialize by field name regardless of the file's header casing.
fn normalized_headers<R: Read>(
    path: &str,
    rdr: &mut csv::Reader<R>,
) -> Result<BTreeSet<String>, DataValidationError> {
    let headers = rdr
        .headers()
        .map_err(|e| DataValidationError::file(path, format!("cannot read header row: {e}")))?;
    let normalized: Vec<String> = headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
        .collect();
    rdr.set_headers(StringRecord::from(normalized.clone()));
    Ok(normalized.into_iter().collect())
}

fn header_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Subjects loader: subject,classmark → classmark → set of subjects
// ---------------------------------------------------------------------------

/// Load a `subject,classmark` CSV file.
pub fn load_subjects(path: &Path) -> Result<SubjectsMap, DataValidationError> {
    let label = path.display().to_string();
    let file = File::open(path)
        .map_err(|e| DataValidationError::file(&label, format!("cannot open: {e}")))?;
    read_subjects(&label, file)
}

/// Parse subjects CSV from any reader; `path` only labels error messages.
pub fn read_subjects<R: Read>(path: &str, input: R) -> Result<SubjectsMap, DataValidationError> {
    let mut rdr = csv_reader(input);
    let header = normalized_headers(path, &mut rdr)?;
    if header != header_set(&["subject", "classmark"]) {
        return Err(DataValidationError::file(
            path,
            format!("expected headers 'subject,classmark'; found {header:?}"),
        ));
    }

    let mut result = SubjectsMap::new();
    for (i, record) in rdr.deserialize::<SubjectRecord>().enumerate() {
        let line = i as u64 + 2;
        let record = record
            .map_err(|e| DataValidationError::row(path, line, format!("malformed row: {e}")))?;
        let subject = record.subject;
        let classmark = record.classmark.to_uppercase();

        if subject.is_empty() {
            return Err(DataValidationError::row(path, line, "subject is empty"));
        }
        if !is_valid_classmark(&classmark) {
            return Err(DataValidationError::row(
                path,
                line,
                format!("invalid classmark {classmark:?} (must be 1-2 letters A-Z)"),
            ));
        }
        result.entry(classmark).or_default().insert(subject);
    }

    if result.is_empty() {
        return Err(DataValidationError::file(path, "no data rows"));
    }
    Ok(result)
}

// ---------------------------------------------------------------------------
// Locations loader: per-row or ranged → classmark → location
// ---------------------------------------------------------------------------

/// Load a locations CSV file (per-row or ranged schema).
pub fn load_locations(path: &Path) -> Result<LocationsMap, DataValidationError> {
    let label = path.display().to_string();
    let file = File::open(path)
        .map_err(|e| DataValidationError::file(&label, format!("cannot open: {e}")))?;
    read_locations(&label, file)
}

/// Parse locations CSV from any reader; `path` only labels error messages.
pub fn read_locations<R: Read>(path: &str, input: R) -> Result<LocationsMap, DataValidationError> {
    let mut rdr = csv_reader(input);
    let header = normalized_headers(path, &mut rdr)?;

    let per_row = header == header_set(&["classmark", "location"]);
    let ranged = header == header_set(&["start_classmark", "end_classmark", "location"]);
    if !per_row && !ranged {
        return Err(DataValidationError::file(
            path,
            format!(
                "bad headers {header:?}; expected 'classmark,location' \
                 or 'start_classmark,end_classmark,location'"
            ),
        ));
    }

    let mut mapping = LocationsMap::new();

    if per_row {
        for (i, record) in rdr.deserialize::<PerRowRecord>().enumerate() {
            let line = i as u64 + 2;
            let record = record
                .map_err(|e| DataValidationError::row(path, line, format!("malformed row: {e}")))?;
            let mark = record.classmark.to_uppercase();

            if !is_valid_classmark(&mark) {
                return Err(DataValidationError::row(
                    path,
                    line,
                    format!("invalid classmark {mark:?}"),
                ));
            }
            check_location(path, line, &record.location)?;
            assign(&mut mapping, mark, &record.location, path, line)?;
        }
    } else {
        for (i, record) in rdr.deserialize::<RangedRecord>().enumerate() {
            let line = i as u64 + 2;
            let record = record
                .map_err(|e| DataValidationError::row(path, line, format!("malformed row: {e}")))?;
            check_location(path, line, &record.location)?;

            let expanded = expand_range(&record.start_classmark, &record.end_classmark)
                .map_err(|e| {
                    DataValidationError::row(
                        path,
                        line,
                        format!(
                            "invalid range {:?}..{:?}: {e}",
                            record.start_classmark, record.end_classmark
                        ),
                    )
                })?;
            for mark in expanded {
                assign(&mut mapping, mark, &record.location, path, line)?;
            }
        }
    }

    if mapping.is_empty() {
        return Err(DataValidationError::file(path, "no data rows"));
    }
    Ok(mapping)
}

fn check_location(path: &str, line: u64, loc: &str) -> Result<(), DataValidationError> {
    if !is_allowed_location(loc) {
        return Err(DataValidationError::row(
            path,
            line,
            format!("invalid location {loc:?} (must be one of {ALLOWED_LOCATIONS:?})"),
        ));
    }
    Ok(())
}

/// Record `mark → loc`.  Re-assigning the same location is idempotent;
/// a different location for an already-mapped classmark is a conflict.
fn assign(
    mapping: &mut LocationsMap,
    mark: String,
    loc: &str,
    path: &str,
    line: u64,
) -> Result<(), DataValidationError> {
    if let Some(existing) = mapping.get(&mark) {
        if existing != loc {
            return Err(DataValidationError::row(
                path,
                line,
                format!("conflicting location for {mark:?}: {existing:?} vs {loc:?}"),
            ));
        }
    }
    mapping.insert(mark, loc.to_string());
    Ok(())
}
