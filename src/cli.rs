//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use ps2strip::formatter::DEFAULT_FORMATTER;
use ps2strip::output::OutputMode;

/// ps2strip - Strip TARGET_PS2 preprocessor blocks from C/C++ sources
#[derive(Parser, Debug)]
#[command(
    name = "ps2strip",
    version,
    about = "Strip TARGET_PS2 preprocessor blocks from C/C++ source trees",
    long_about = "Recursively removes #if defined(TARGET_PS2) blocks from a source tree.\n\n\
                  The #else branch content is kept when present; the PS2 branch\n\
                  and the directives are discarded. Modified files are then\n\
                  reformatted in place with clang-format when it is installed."
)]
pub struct Cli {
    /// Directory to process (defaults to the current directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Formatter binary run in-place on modified files
    #[arg(long, default_value = DEFAULT_FORMATTER)]
    pub formatter: String,

    /// Skip the formatting pass entirely
    #[arg(long)]
    pub no_format: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::strip(&cli.directory, &cli.formatter, cli.no_format, output_mode)
}
