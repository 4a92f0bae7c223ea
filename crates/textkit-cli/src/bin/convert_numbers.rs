//! Decimal to binary/hexadecimal conversion utility.

use std::path::PathBuf;

use clap::Parser;

use textkit_cli::args::GlobalArgs;
use textkit_cli::commands::run_conversion;
use textkit_cli::logging::init_logging;
use textkit_report::FileSink;

#[derive(Parser)]
#[command(
    name = "convert-numbers",
    version,
    about = "Convert non-negative integers from a file to binary and hexadecimal"
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
    let mut sink = FileSink::fixed("ConversionResults.txt");
    let exit_code = match run_conversion(&cli.filename, &mut sink) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}
