//! Run orchestration: configuration, logging, and one full organize pass.

use std::fmt::Write as _;
use std::path::Path;

use clap::Parser;
use indicatif::MultiProgress;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Args;
use crate::config::Settings;
use crate::error::RunError;
use crate::library::{AudioFile, LoftyDecoder, MetadataDecoder, TrackMetadata, scan};
use crate::organize::{PlacementResult, Summary, ensure_dir, place, run_pool};
use crate::progress::{BarAwareWriter, BarReporter, NullReporter, ProgressReporter};

mod settings;


pub fn run() -> Result<(), RunError> {
    let args = Args::parse();
    let (settings, config_warning) = settings::load_settings(&args);

    // Logs and the bar share stderr; both go through the same MultiProgress.
    let bars = MultiProgress::new();
    init_logging(&settings.logging.level, args.verbose, bars.clone());
    if let Some(msg) = config_warning {
        warn!("{msg}");
    }

    let mut reporter: Box<dyn ProgressReporter> = if settings.progress.enabled {
        Box::new(BarReporter::new(bars))
    } else {
        Box::new(NullReporter)
    };

    let results = organize_library(&settings, &LoftyDecoder, reporter.as_mut())?;

    if results.is_empty() {
        println!(
            "No supported audio files found in {}",
            settings.library.source_dir.display()
        );
    } else {
        print!("{}", render_summary(&results));
    }
    Ok(())
}

fn init_logging(level: &str, verbose: bool, bars: MultiProgress) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(BarAwareWriter::new(bars, std::io::stderr)))
        .init();
}

/// One pass over the source tree: prepare the output root, scan, then copy
/// every file on the worker pool.
///
/// Returns the per-file outcomes in scan order. An empty list means there
/// was nothing to do. Only an unusable source or output root is an error.
pub fn organize_library<D: MetadataDecoder>(
    settings: &Settings,
    decoder: &D,
    reporter: &mut dyn ProgressReporter,
) -> Result<Vec<PlacementResult>, RunError> {
    let source_dir = &settings.library.source_dir;
    let output_dir = &settings.organize.output_dir;

    ensure_dir(output_dir).map_err(RunError::Output)?;

    info!(dir = %source_dir.display(), "scanning");
    let files = scan(source_dir, &settings.library)?;

    if files.is_empty() {
        info!(dir = %source_dir.display(), "no supported audio files found");
        return Ok(Vec::new());
    }
    info!(
        count = files.len(),
        concurrency = settings.organize.concurrency,
        "found supported audio files"
    );

    reporter.start(files.len() as u64);
    let results = run_pool(
        &files,
        settings.organize.concurrency,
        |file| organize_file(file, decoder, output_dir),
        |_| reporter.increment(),
    );
    reporter.stop();

    let summary = Summary::from_results(&results);
    info!(
        copied = summary.copied,
        skipped = summary.skipped,
        failed = summary.failed,
        total = summary.total(),
        "organize finished"
    );
    Ok(results)
}

fn organize_file<D: MetadataDecoder>(file: &AudioFile, decoder: &D, output_dir: &Path) -> PlacementResult {
    let path = file.path();

    let meta: TrackMetadata = match decoder.decode(path) {
        Ok(meta) => meta,
        Err(e) => {
            warn!(path = %path.display(), error = %e.cause, "cannot read metadata");
            return PlacementResult::Failed {
                source: path.to_path_buf(),
                error: e.into(),
            };
        }
    };

    debug!(
        path = %path.display(),
        genre = meta.genre(),
        title = ?meta.title,
        artist = ?meta.artist,
        album = ?meta.album,
        duration_secs = ?meta.duration_secs,
        "decoded"
    );

    let result = place(path, meta.genre(), output_dir);
    match &result {
        PlacementResult::Copied(dest) => debug!(from = %path.display(), to = %dest.display(), "copied"),
        PlacementResult::Skipped(dest, reason) => {
            debug!(path = %dest.display(), ?reason, "skipped")
        }
        PlacementResult::Failed { error, .. } => {
            warn!(path = %path.display(), %error, "cannot place file")
        }
    }
    result
}

/// Summary line plus one line per failed file.
pub fn render_summary(results: &[PlacementResult]) -> String {
    let mut out = format!("{}\n", Summary::from_results(results));
    for result in results {
        if let PlacementResult::Failed { source, error } = result {
            let _ = writeln!(out, "  {}: {error}", source.display());
        }
    }
    out
}
