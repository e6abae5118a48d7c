//! Install-time dependency bootstrapping for the hadid SDK.
//!
//! The SDK's document conversion path relies on host-level tools that no
//! package manager for this crate can provide (GraphicsMagick and
//! Ghostscript, used by the pdf-to-image stack). The [`Bootstrapper`] runs
//! once, before the package is considered installed, and verifies each tool
//! answers a version probe.
//!
//! The check logic lives here, in a testable unit; the `hadid-preflight`
//! binary is only the exit-code gate an install pipeline hooks into:
//! exit 0 means proceed with artifact placement, exit 1 means abort with the
//! diagnostic on stderr. The operator fixes the environment and re-runs the
//! installation; nothing is retried internally.

pub mod check;
pub mod error;

pub use check::{Bootstrapper, BootstrapState, CHECKS_ENV, DependencyCheck};
pub use error::PreflightError;
