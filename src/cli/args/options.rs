use clap::ValueEnum;

/// Log levels accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl LogLevelArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			LogLevelArg::Off => "off",
			LogLevelArg::Error => "error",
			LogLevelArg::Warn => "warn",
			LogLevelArg::Info => "info",
			LogLevelArg::Debug => "debug",
			LogLevelArg::Trace => "trace",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
