//! Descriptive-statistics utility.

use std::path::PathBuf;

use clap::Parser;

use textkit_cli::args::GlobalArgs;
use textkit_cli::commands::run_statistics;
use textkit_cli::logging::init_logging;
use textkit_report::FileSink;

#[derive(Parser)]
#[command(
    name = "compute-statistics",
    version,
    about = "Compute descriptive statistics (mean, median, mode, variance, \
             standard deviation) from a file of numbers"
)]
struct Cli {
    /// The file containing the list of numbers, one per line.
    #[arg(value_name = "FILENAME")]
    filename: PathBuf,

    #[command(flatten)]
    global: GlobalArgs,
}

fn main() {
    let cli = Cli::parse();
    cli.global.color.write_global();
    if let Err(error) = init_logging(&cli.global.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let mut sink = FileSink::fixed("StatisticsResults.txt");
    let exit_code = match run_statistics(&cli.filename, &mut sink) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}
