use std::fmt::Display;

/// Output sink honouring `--quiet` and `--verbose`.
pub struct Output {
    /// Suppress everything but errors.
    quiet: bool,
    /// Emit diagnostic lines.
    verbose: bool,
}

impl Output {
    /// Create from the global flags.
    pub const fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Result line on stdout.
    pub fn info_user(&self, msg: impl Display) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    /// Warning on stderr.
    pub fn warn_user(&self, msg: impl Display) {
        if !self.quiet {
            eprintln!("WARN: {msg}");
        }
    }

    /// Error on stderr, never suppressed.
    pub fn error_user(msg: impl Display) {
        eprintln!("ERROR: {msg}");
    }

    /// Diagnostic on stderr, only with `--verbose`.
    pub fn info_diag(&self, msg: impl Display) {
        if self.verbose && !self.quiet {
            eprintln!("DIAG: {msg}");
        }
    }
}
