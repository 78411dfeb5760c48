//! Error policy
//!
//! The scanner recovers from every lexical anomaly, so whether an anomaly is
//! user-visible is a policy decision owned by the caller, not the core.

use crate::scanning::Diagnostic;

/// Specifies what to do when the scanner reports a lexical anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnParseError {
    /// Log the anomaly as an error and abort without output.
    Fatal,
    /// Log the anomaly as a warning and continue.
    #[default]
    Warn,
    /// Continue without logging.
    Ignore,
}

impl OnParseError {
    /// Apply the policy to the diagnostics of one scan.
    pub(crate) fn apply(self, diagnostics: &[Diagnostic]) -> Result<(), Error> {
        match self {
            OnParseError::Fatal => {
                if let Some(diagnostic) = diagnostics.first() {
                    tracing::error!("{diagnostic}");
                    return Err(Error::Fatal(diagnostic.clone()));
                }
                Ok(())
            }
            OnParseError::Warn => {
                for diagnostic in diagnostics {
                    tracing::warn!("{diagnostic}");
                }
                Ok(())
            }
            OnParseError::Ignore => Ok(()),
        }
    }
}

/// Errors surfaced by the colonizer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A lexical anomaly encountered under the `Fatal` policy.
    #[error("fatal parse error: {0}")]
    Fatal(Diagnostic),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
