use clap::{Parser, ValueEnum};

/// Verbosity of the console's own diagnostics.
///
/// Distinct from `domain::LogLevel`: that one is the severity *carried by*
/// routed events, this one configures the tracing infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TracingLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl TracingLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            TracingLevel::Error => "error",
            TracingLevel::Warn => "warn",
            TracingLevel::Info => "info",
            TracingLevel::Debug => "debug",
            TracingLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Drain worker events to stdout/stderr", long_about = None)]
pub struct Config {
    /// Event input: a newline-delimited JSON file, or `-` for stdin
    #[arg(long, env = "EVENT_INPUT", default_value = "-")]
    pub input: String,

    /// Diagnostic log level (diagnostics go to stderr, never the event lanes)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: TracingLevel,
}

impl Config {
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_stdin_and_warn() {
        let config = Config::parse_from(["worker-event-console"]);
        assert!(config.reads_stdin());
        assert_eq!(config.log_level, TracingLevel::Warn);
    }

    #[test]
    fn input_and_level_are_parsed() {
        let config = Config::parse_from([
            "worker-event-console",
            "--input",
            "events.ndjson",
            "--log-level",
            "debug",
        ]);
        assert!(!config.reads_stdin());
        assert_eq!(config.input, "events.ndjson");
        assert_eq!(config.log_level, TracingLevel::Debug);
    }

    #[test]
    fn tracing_level_maps_to_filter_directives() {
        assert_eq!(TracingLevel::Warn.as_str(), "warn");
        assert_eq!(TracingLevel::Trace.as_str(), "trace");
    }
}
