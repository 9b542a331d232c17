//! Recoverable diagnostics collected alongside results

/// A warning generated while loading, linting, slicing or resolving.
///
/// Warnings never abort an operation. Callers decide what to do with them
/// (the CLI prints them, or fails in `--strict` mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Create a warning and trace it at debug level. Surfacing it to the
    /// user is the caller's job.
    pub(crate) fn logged(message: impl Into<String>) -> Self {
        let warning = Self::new(message);
        log::debug!("{}", warning.message);
        warning
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
