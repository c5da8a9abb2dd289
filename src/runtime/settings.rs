use crate::cli::Args;
use crate::config::Settings;

/// Load config and apply command-line overrides.
///
/// Config is optional: a file that fails to load or validate falls back to
/// defaults, and the reason is handed back so it can be logged once logging
/// is up.
pub fn load_settings(args: &Args) -> (Settings, Option<String>) {
    let (mut settings, warning) = match Settings::load(args.config.as_deref()) {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        Err(e) => (
            Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    };

    apply_args(&mut settings, args);
    (settings, warning)
}

pub fn apply_args(settings: &mut Settings, args: &Args) {
    if let Some(source) = &args.source {
        settings.library.source_dir = source.clone();
    }
    if let Some(output) = &args.output {
        settings.organize.output_dir = output.clone();
    }
    if let Some(n) = args.concurrency {
        settings.organize.concurrency = usize::try_from(n).unwrap_or(usize::MAX);
    }
    if args.no_progress {
        settings.progress.enabled = false;
    }
}
