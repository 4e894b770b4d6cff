use std::io::{self, BufRead, Write};

use crate::data::catalog::Catalog;
use crate::data::model::{SearchRow, ALLOWED_LOCATIONS};

// ---------------------------------------------------------------------------
// Console menu loop
// ---------------------------------------------------------------------------

const MENU: &str = "\nSearch mode:\n  \
    [1] Subject / part-name  (e.g., \"english\" or \"enviro\")\n  \
    [2] Classmark            (e.g., PR)\n  \
    [3] Location             (one of the six areas)\n  \
    [Q] Quit\nChoice: ";

/// Run the interactive 4-choice menu until quit or EOF.
pub fn run(catalog: &Catalog) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    loop {
        out.write_all(MENU.as_bytes())?;
        out.flush()?;
        let Some(choice) = read_line(&mut input)? else {
            break;
        };

        match choice.trim().to_lowercase().as_str() {
            "q" => {
                writeln!(out, "Goodbye.")?;
                break;
            }
            "1" => {
                let Some(q) = prompt(&mut input, &mut out, "Enter subject (full or partial): ")?
                else {
                    break;
                };
                print_rows(&mut out, &catalog.search_by_subject(&q))?;
            }
            "2" => {
                let Some(q) =
                    prompt(&mut input, &mut out, "Enter classmark (1-2 letters, e.g., PR): ")?
                else {
                    break;
                };
                print_rows(&mut out, &catalog.search_by_classmark(&q))?;
            }
            "3" => {
                writeln!(out, "Locations:")?;
                for loc in ALLOWED_LOCATIONS {
                    writeln!(out, " - {loc}")?;
                }
                let Some(q) = prompt(&mut input, &mut out, "Enter location exactly as shown: ")?
                else {
                    break;
                };
                print_rows(&mut out, &catalog.search_by_location(&q))?;
            }
            _ => writeln!(out, "Please choose 1, 2, 3 or Q.")?,
        }
    }
    Ok(())
}

fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    msg: &str,
) -> io::Result<Option<String>> {
    out.write_all(msg.as_bytes())?;
    out.flush()?;
    Ok(read_line(input)?.map(|line| line.trim().to_string()))
}

/// One line of input, or `None` on EOF.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

/// Aligned `Classmark | Location | Subjects` table, or a no-match notice.
pub fn print_rows(out: &mut impl Write, rows: &[SearchRow]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No matches found.\n");
    }
    let w1 = rows
        .iter()
        .map(|r| r.classmark.len())
        .max()
        .unwrap_or(0)
        .max("Classmark".len());
    let w2 = rows
        .iter()
        .map(|r| r.location.len())
        .max()
        .unwrap_or(0)
        .max("Location".len());

    writeln!(out, "{:<w1$} | {:<w2$} | Subjects", "Classmark", "Location")?;
    writeln!(out, "{}-+-{}-+-{}", "-".repeat(w1), "-".repeat(w2), "-".repeat(40))?;
    for r in rows {
        writeln!(
            out,
            "{:<w1$} | {:<w2$} | {}",
            r.classmark,
            r.location,
            r.subjects.join(", ")
        )?;
    }
    writeln!(out)
}
