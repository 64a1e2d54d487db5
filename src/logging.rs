use clap::Args;

/// Logging options. Logs go to stderr; stdout carries the generated source.
#[derive(Args, Debug)]
pub struct LogOptions {
    /// Increase log verbosity. Pass multiple times for more log output.
    ///
    /// By default only warnings and errors are shown. `-v` adds info,
    /// `-vv` debug and `-vvv` trace.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Set fancier logging filters.
    ///
    /// This is equivalent to the `RUST_LOG` environment variable.
    /// For more info, see the `env_logger` crate documentation.
    #[arg(long, global = true, env = "IMGTOOL_LOG")]
    log_filter: Option<String>,
}

impl LogOptions {
    /// Build & initialize the global logger. Call once, before any command runs.
    pub fn init_logger(&self) {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(self.verbosity_level())
            .target(env_logger::Target::Stderr);
        if let Some(filter) = &self.log_filter {
            builder.parse_filters(filter);
        }
        builder.init();
    }

    /// Convert the -vvv.. count into a log level.
    fn verbosity_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        let opts = |verbose| LogOptions { verbose, log_filter: None };
        assert_eq!(opts(0).verbosity_level(), log::LevelFilter::Warn);
        assert_eq!(opts(1).verbosity_level(), log::LevelFilter::Info);
        assert_eq!(opts(2).verbosity_level(), log::LevelFilter::Debug);
        assert_eq!(opts(9).verbosity_level(), log::LevelFilter::Trace);
    }
}
