//! Process-wide verbosity and non-fatal warnings.

use core::fmt;

use zr_core::Verbosity;

/// Non-fatal conditions found during registration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error(
        "Thermal zones declare different verbosity ({requested} vs {current}). \
         Using highest declared value."
    )]
    InconsistentVerbosity {
        requested: Verbosity,
        current: Verbosity,
    },
}

/// Verbosity reconciled across all registrations, plus the warnings raised.
///
/// `verbosity` is `None` until the first registration succeeds.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    verbosity: Option<Verbosity>,
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbosity(&self) -> Option<Verbosity> {
        self.verbosity
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Compute the verbosity that results from a new request without
    /// changing anything. Returns the warning to record, if any.
    pub fn reconcile(&self, requested: Verbosity) -> (Verbosity, Option<Warning>) {
        match self.verbosity {
            None => (requested, None),
            Some(current) if current == requested => (current, None),
            Some(current) => (
                current.max(requested),
                Some(Warning::InconsistentVerbosity { requested, current }),
            ),
        }
    }

    /// Apply a result of [`Diagnostics::reconcile`].
    pub fn commit(&mut self, verbosity: Verbosity, warning: Option<Warning>) {
        self.verbosity = Some(verbosity);
        if let Some(warning) = warning {
            tracing::warn!("{}", warning);
            self.warnings.push(warning);
        }
    }

    /// True when a message at `level` passes the current verbosity.
    /// Nothing is logged before the first registration commits.
    pub fn admits_log(&self, level: Verbosity) -> bool {
        self.verbosity.is_some_and(|active| active.admits(level))
    }

    /// Emit `args` if `level` passes the current verbosity.
    pub fn write_log(&self, level: Verbosity, args: fmt::Arguments<'_>) {
        if self.admits_log(level) {
            emit(level, args);
        }
    }

    /// Emit `args` if `level` passes `active`, a verbosity computed by
    /// [`Diagnostics::reconcile`] but not yet committed.
    pub fn write_log_at(&self, active: Verbosity, level: Verbosity, args: fmt::Arguments<'_>) {
        if active.admits(level) {
            emit(level, args);
        }
    }
}

fn emit(level: Verbosity, args: fmt::Arguments<'_>) {
    match level {
        Verbosity::Fatal | Verbosity::Error => tracing::error!("{}", args),
        Verbosity::Warning => tracing::warn!("{}", args),
        Verbosity::Info => tracing::info!("{}", args),
        Verbosity::Verbose => tracing::debug!("{}", args),
        Verbosity::Debug => tracing::trace!("{}", args),
    }
}
