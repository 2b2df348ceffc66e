use fern::Dispatch;
use log::LevelFilter;

/// How much of the build log reaches stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogVerbosity {
    /// Errors only.
    Quiet,
    /// Warnings about skipped files and errors.
    #[default]
    Normal,
    /// Per-file load messages, prefixed with the module that logged them.
    Verbose,
}

impl LogVerbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => LogVerbosity::Verbose,
            (false, true) => LogVerbosity::Quiet,
            (false, false) => LogVerbosity::Normal,
        }
    }

    fn level_filter(self) -> LevelFilter {
        match self {
            LogVerbosity::Quiet => LevelFilter::Error,
            LogVerbosity::Normal => LevelFilter::Warn,
            LogVerbosity::Verbose => LevelFilter::Info,
        }
    }
}

pub fn setup_logger(verbosity: LogVerbosity) {
    let show_target = verbosity == LogVerbosity::Verbose;
    let logger = Dispatch::new()
        .format(move |out, message, record| {
            let (color, reset) = match record.level() {
                log::Level::Error => ("\x1b[31m", "\x1b[0m"), // Red
                log::Level::Warn => ("\x1b[33m", "\x1b[0m"),  // Yellow
                _ => ("", ""),
            };
            if show_target {
                out.finish(format_args!(
                    "{}{}: ({}) {}{}",
                    color,
                    record.level(),
                    record.target(),
                    message,
                    reset
                ))
            } else {
                out.finish(format_args!("{}{}: {}{}", color, record.level(), message, reset))
            }
        })
        .level(verbosity.level_filter())
        .chain(std::io::stderr());

    if let Err(e) = logger.apply() {
        eprintln!("Failed to apply logger: {:?}", e);
    }
}
