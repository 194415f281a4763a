// Error taxonomy for a report run.
use thiserror::Error;

/// Errors that can terminate a report run.
///
/// Every failure propagates to the top of the program and ends the run with
/// the error's display text; there is no local recovery and no partial
/// report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required setting is absent from the environment and the keyring.
    /// Fatal at startup.
    #[error("missing required setting {setting}\n{hint}")]
    Configuration { setting: &'static str, hint: String },

    /// A request against the Canvas API failed, returned a non-success
    /// status, or produced a body that could not be parsed. Aborts the
    /// in-progress fetch; no partial result is returned.
    #[error("{0}")]
    Transport(String),

    /// No observee matched the configured student name.
    #[error("no observee named \"{0}\"")]
    ObserveeNotFound(String),

    /// More than one observee matched the configured student name.
    #[error("{count} observees named \"{name}\", expected exactly one")]
    AmbiguousObservee { name: String, count: usize },
}
