use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments. Every flag overrides the matching config value.
#[derive(Parser, Debug, Default)]
#[command(name = "genre-sorter")]
#[command(about = "Copy audio files into folders named after their genre")]
#[command(version)]
pub struct Args {
    /// Directory to scan for audio files [default: ./music]
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Directory the genre folders are created in [default: ./organized-by-genre]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of files processed in parallel [default: 8]
    #[arg(short = 'j', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub concurrency: Option<u64>,

    /// Config file to load instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not draw a progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
