//! Word-frequency counting utility.

use std::path::PathBuf;

use clap::Parser;

use textkit_cli::args::GlobalArgs;
use textkit_cli::commands::run_word_count;
use textkit_cli::logging::init_logging;
use textkit_report::FileSink;

#[derive(Parser)]
#[command(
    name = "word-count",
    version,
    about = "Count the frequency of each distinct alphabetic word in a file"
)]
struct Cli {
    /// The file containing the words.
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
    let mut sink = FileSink::fixed("WordCountResults.txt");
    let exit_code = match run_word_count(&cli.filename, &mut sink) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}
