use clap::Parser;
use log::debug;
use std::path::PathBuf;
use std::process;

use srms::shell::{Shell, ShellResult};
use srms::store::StudentStore;

/// Interactive student record manager backed by a CSV file
#[derive(Parser)]
#[command(name = "srms", version, about)]
struct Args {
    /// Backing CSV file for student records
    #[arg(long, default_value = "students_data.csv")]
    file: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> ShellResult<()> {
    debug!("using data file {}", args.file.display());
    let store = StudentStore::open(&args.file)?;
    let mut shell = Shell::new(store)?;
    shell.run()
}
