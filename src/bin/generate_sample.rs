//! Write a pair of small demo CSVs (`sample_subjects.csv`,
//! `sample_locations.csv`) so the finder can be tried without real
//! library data:
//!
//! ```bash
//! cargo run --bin generate_sample
//! cargo run -- --subjects sample_subjects.csv --locations sample_locations.csv
//! ```

use std::path::Path;

use anyhow::{Context, Result};

const SUBJECTS: &[(&str, &str)] = &[
    ("General Works", "A"),
    ("Philosophy", "B"),
    ("Psychology", "BF"),
    ("Geography", "G"),
    ("Environmental Science", "GE"),
    ("Law", "K"),
    ("English Literature", "PR"),
    ("Drama", "PR"),
    ("American Literature", "PS"),
    ("Mathematics", "QA"),
    ("Physics", "QC"),
    ("Chemistry", "QD"),
    ("Medicine", "R"),
    ("Nursing", "RT"),
    ("Bibliography", "Z"),
];

// Ranged schema; ranges are disjoint so the loader sees no conflicts.
const LOCATIONS: &[(&str, &str, &str)] = &[
    ("A", "H", "Main Library"),
    ("BA", "BZ", "Annexe"),
    ("GA", "GZ", "Main Library"),
    ("K", "K", "Law Library"),
    ("PA", "PZ", "Main Library"),
    ("QA", "QZ", "Short Loan"),
    ("R", "R", "Health Library"),
    ("RA", "RZ", "Health Library"),
    ("Z", "Z", "Store"),
];

fn main() -> Result<()> {
    write_subjects(Path::new("sample_subjects.csv"))?;
    write_locations(Path::new("sample_locations.csv"))?;
    println!("Wrote sample_subjects.csv and sample_locations.csv");
    Ok(())
}

fn write_subjects(path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["subject", "classmark"])?;
    for (subject, classmark) in SUBJECTS {
        wtr.write_record([*subject, *classmark])?;
    }
    wtr.flush().context("flushing subjects CSV")?;
    Ok(())
}

fn write_locations(path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["start_classmark", "end_classmark", "location"])?;
    for (start, end, location) in LOCATIONS {
        wtr.write_record([*start, *end, *location])?;
    }
    wtr.flush().context("flushing locations CSV")?;
    Ok(())
}
