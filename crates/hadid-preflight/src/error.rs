use thiserror::Error;

/// Install-time failures. All of these are fatal to the installation
/// process; none are retried.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// The check subprocess could not be spawned at all (tool not on PATH,
    /// permission problem).
    #[error("could not run {tool} check: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The check subprocess ran and exited non-zero.
    #[error("{tool} check failed ({exit}): {diagnostic}")]
    CheckFailed {
        tool: String,
        /// Exit code, or `killed` when the process died to a signal.
        exit: ExitStatusDisplay,
        /// Captured subprocess output (stderr preferred), truncated.
        diagnostic: String,
    },

    /// A check list supplied through the environment could not be parsed.
    #[error("invalid check entry `{entry}` (expected `name=program arg…`)")]
    InvalidCheckSpec { entry: String },

    /// `run` was called on a bootstrapper that already reached a terminal
    /// state. The bootstrap sequence is single-shot by contract.
    #[error("bootstrapper already ran (state is terminal)")]
    AlreadyRan,
}

/// Human-readable exit status carried inside [`PreflightError::CheckFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatusDisplay(pub Option<i32>);

impl std::fmt::Display for ExitStatusDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(code) => write!(f, "exit {code}"),
            None => write!(f, "killed"),
        }
    }
}
