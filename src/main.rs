mod data;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use data::catalog::Catalog;
use data::loader::{self, DataValidationError};
use data::model::{LocationsMap, SubjectsMap};

/// Library classmark search over two CSV tables.
#[derive(Parser)]
#[command(name = "classmark-finder", version, about)]
struct Args {
    /// Path to the subjects CSV (header: subject,classmark)
    #[arg(long)]
    subjects: PathBuf,

    /// Path to the locations CSV (header: classmark,location or
    /// start_classmark,end_classmark,location)
    #[arg(long)]
    locations: PathBuf,
}

fn load_inputs(args: &Args) -> Result<(SubjectsMap, LocationsMap), DataValidationError> {
    let subjects = loader::load_subjects(&args.subjects)?;
    let locations = loader::load_locations(&args.locations)?;
    Ok((subjects, locations))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let (subjects, locations) = match load_inputs(&args) {
        Ok(maps) => maps,
        Err(e) => {
            log::error!("load failed: {e}");
            eprintln!("Data error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "loaded {} classmarks with subjects, {} with locations",
        subjects.len(),
        locations.len()
    );

    let catalog = Catalog::new(subjects, locations);
    if let Err(e) = ui::console::run(&catalog) {
        eprintln!("I/O error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
