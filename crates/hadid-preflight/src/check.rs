//! Dependency checks executed as real subprocesses.
//!
//! Each [`DependencyCheck`] is one version probe (`gm -version`,
//! `gs --version`, …) run via [`std::process::Command`] with a blocking wait.
//! Execution is sequential with fail-fast semantics: the first failing check
//! ends the run. Captured output is truncated to [`MAX_OUTPUT_BYTES`] so a
//! misbehaving tool cannot flood the install log.

use std::process::Command;

use crate::error::{ExitStatusDisplay, PreflightError};

/// Maximum bytes of subprocess output carried into a diagnostic.
const MAX_OUTPUT_BYTES: usize = 8 * 1024;

/// Environment variable the gate binary reads to replace the default check
/// set. Format: `name=program arg…` entries separated by `;`.
pub const CHECKS_ENV: &str = "HADID_PREFLIGHT_CHECKS";

/// One host-level tool to verify, expressed as a probe command that must
/// exit 0.
#[derive(Debug, Clone)]
pub struct DependencyCheck {
    /// Human-readable tool name used in diagnostics.
    pub name: String,
    /// Program to invoke.
    pub program: String,
    /// Arguments for the probe invocation.
    pub args: Vec<String>,
}

impl DependencyCheck {
    pub fn new(name: impl Into<String>, program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.iter().map(|a| (*a).to_owned()).collect(),
        }
    }

    /// Parse a [`CHECKS_ENV`]-style check list: `name=program arg…` entries
    /// separated by `;`, blank entries ignored.
    ///
    /// # Errors
    ///
    /// [`PreflightError::InvalidCheckSpec`] for an entry without a `=`, an
    /// empty name, or an empty command.
    pub fn parse_list(spec: &str) -> Result<Vec<DependencyCheck>, PreflightError> {
        spec.split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let invalid = || PreflightError::InvalidCheckSpec {
                    entry: entry.to_owned(),
                };
                let (name, command) = entry.split_once('=').ok_or_else(invalid)?;
                let name = name.trim();
                let mut parts = command.split_whitespace();
                let program = parts.next().ok_or_else(invalid)?;
                if name.is_empty() {
                    return Err(invalid());
                }
                Ok(DependencyCheck {
                    name: name.to_owned(),
                    program: program.to_owned(),
                    args: parts.map(str::to_owned).collect(),
                })
            })
            .collect()
    }
}

/// Lifecycle of one bootstrap attempt. `Succeeded` and `Failed` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl BootstrapState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Runs the configured dependency checks exactly once, synchronously.
///
/// State machine: `Pending -> Running -> {Succeeded, Failed}`. A second
/// [`Bootstrapper::run`] on a terminal bootstrapper fails with
/// [`PreflightError::AlreadyRan`]; retrying after an environment fix means
/// re-running the installation, which constructs a fresh bootstrapper.
#[derive(Debug)]
pub struct Bootstrapper {
    checks: Vec<DependencyCheck>,
    state: BootstrapState,
}

impl Bootstrapper {
    pub fn new(checks: Vec<DependencyCheck>) -> Self {
        Self {
            checks,
            state: BootstrapState::Pending,
        }
    }

    /// Bootstrapper for the tools the document conversion stack needs:
    /// GraphicsMagick and Ghostscript.
    pub fn with_default_checks() -> Self {
        Self::new(vec![
            DependencyCheck::new("GraphicsMagick", "gm", &["-version"]),
            DependencyCheck::new("Ghostscript", "gs", &["--version"]),
        ])
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    /// Run every check, blocking until each subprocess completes.
    ///
    /// On the first spawn failure or non-zero exit the state becomes
    /// [`BootstrapState::Failed`] and the error carries the tool name plus
    /// captured diagnostic text. When all checks pass the state becomes
    /// [`BootstrapState::Succeeded`].
    pub fn run(&mut self) -> Result<(), PreflightError> {
        if self.state != BootstrapState::Pending {
            return Err(PreflightError::AlreadyRan);
        }
        self.state = BootstrapState::Running;

        for check in &self.checks {
            let output = match Command::new(&check.program).args(&check.args).output() {
                Ok(output) => output,
                Err(source) => {
                    self.state = BootstrapState::Failed;
                    return Err(PreflightError::Spawn {
                        tool: check.name.clone(),
                        source,
                    });
                }
            };

            if !output.status.success() {
                self.state = BootstrapState::Failed;
                let diagnostic = if output.stderr.is_empty() {
                    truncate_output(&output.stdout)
                } else {
                    truncate_output(&output.stderr)
                };
                return Err(PreflightError::CheckFailed {
                    tool: check.name.clone(),
                    exit: ExitStatusDisplay(output.status.code()),
                    diagnostic,
                });
            }
        }

        self.state = BootstrapState::Succeeded;
        Ok(())
    }
}

/// Converts raw bytes to a UTF-8 string, truncating at [`MAX_OUTPUT_BYTES`].
/// Lossy conversion handles non-UTF-8 output from system tools.
fn truncate_output(bytes: &[u8]) -> String {
    let limited = if bytes.len() > MAX_OUTPUT_BYTES {
        &bytes[..MAX_OUTPUT_BYTES]
    } else {
        bytes
    };
    let mut s = String::from_utf8_lossy(limited).trim_end().to_owned();
    if bytes.len() > MAX_OUTPUT_BYTES {
        s.push_str("\n... [output truncated]");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_check(name: &str, script: &str) -> DependencyCheck {
        DependencyCheck::new(name, "sh", &["-c", script])
    }

    #[test]
    fn all_checks_passing_reaches_succeeded() {
        let mut bootstrapper = Bootstrapper::new(vec![
            shell_check("first", "exit 0"),
            shell_check("second", "exit 0"),
        ]);
        assert_eq!(bootstrapper.state(), BootstrapState::Pending);

        bootstrapper.run().unwrap();
        assert_eq!(bootstrapper.state(), BootstrapState::Succeeded);
        assert!(bootstrapper.state().is_terminal());
    }

    #[test]
    fn nonzero_exit_fails_with_captured_diagnostic() {
        let mut bootstrapper = Bootstrapper::new(vec![shell_check(
            "ghostscript",
            "echo 'gs: not found' >&2; exit 3",
        )]);

        let err = bootstrapper.run().unwrap_err();
        assert_eq!(bootstrapper.state(), BootstrapState::Failed);
        match err {
            PreflightError::CheckFailed {
                tool,
                exit,
                diagnostic,
            } => {
                assert_eq!(tool, "ghostscript");
                assert_eq!(exit, ExitStatusDisplay(Some(3)));
                assert_eq!(diagnostic, "gs: not found");
            }
            other => panic!("expected CheckFailed, got {other:?}"),
        }
    }

    #[test]
    fn spawn_failure_fails_the_bootstrap() {
        let mut bootstrapper = Bootstrapper::new(vec![DependencyCheck::new(
            "missing tool",
            "hadid-no-such-binary",
            &[],
        )]);

        let err = bootstrapper.run().unwrap_err();
        assert_eq!(bootstrapper.state(), BootstrapState::Failed);
        assert!(matches!(err, PreflightError::Spawn { tool, .. } if tool == "missing tool"));
    }

    #[test]
    fn fail_fast_skips_later_checks() {
        let marker = std::env::temp_dir().join(format!(
            "hadid-preflight-marker-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&marker);
        let mut bootstrapper = Bootstrapper::new(vec![
            shell_check("failing", "exit 1"),
            shell_check("marker", &format!("touch {}", marker.display())),
        ]);
        bootstrapper.run().unwrap_err();
        assert_eq!(bootstrapper.state(), BootstrapState::Failed);
        assert!(!marker.exists());
    }

    #[test]
    fn bootstrap_is_single_shot() {
        let mut bootstrapper = Bootstrapper::new(vec![shell_check("ok", "exit 0")]);
        bootstrapper.run().unwrap();

        let err = bootstrapper.run().unwrap_err();
        assert!(matches!(err, PreflightError::AlreadyRan));
        // Terminal state is unchanged by the rejected second run.
        assert_eq!(bootstrapper.state(), BootstrapState::Succeeded);
    }

    #[test]
    fn check_list_parses_names_programs_and_args() {
        let checks = DependencyCheck::parse_list(
            "GraphicsMagick=gm -version; Ghostscript=gs --version;",
        )
        .unwrap();
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].name, "GraphicsMagick");
        assert_eq!(checks[0].program, "gm");
        assert_eq!(checks[0].args, vec!["-version"]);
        assert_eq!(checks[1].name, "Ghostscript");
    }

    #[test]
    fn malformed_check_entries_are_rejected() {
        for spec in ["no separator", "=gm -version", "name only="] {
            let err = DependencyCheck::parse_list(spec).unwrap_err();
            assert!(matches!(err, PreflightError::InvalidCheckSpec { .. }), "{spec}");
        }
    }

    #[test]
    fn diagnostic_prefers_stderr_but_falls_back_to_stdout() {
        let mut bootstrapper =
            Bootstrapper::new(vec![shell_check("stdout only", "echo 'usage: gm'; exit 2")]);
        match bootstrapper.run().unwrap_err() {
            PreflightError::CheckFailed { diagnostic, .. } => {
                assert_eq!(diagnostic, "usage: gm");
            }
            other => panic!("expected CheckFailed, got {other:?}"),
        }
    }
}
