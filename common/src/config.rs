pub struct Config {
    /// Renders reports as plain text, without ANSI styling.
    pub no_color: bool,
    /// Diagnostic verbosity. Each step raises the stderr log level by one.
    ///
    /// Does not change what is written to stdout.
    pub verbose: u8,
}

impl Config {
    /// Maps the verbosity count to a `tracing` filter directive.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
