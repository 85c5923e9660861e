/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub database: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
}

impl GlobalFlags {
    /// Log filter used when `QUARRY_LOG` is unset. `--quiet` wins over `--verbose`.
    pub const fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
