//! Exit-code gate for install pipelines.
//!
//! Runs the dependency checks and terminates with:
//!
//! * exit 0 — every tool answered its version probe; installation may place
//!   package artifacts;
//! * exit 1 — a check failed; the diagnostic is on stderr and installation
//!   must abort before any artifact is placed.
//!
//! The check set defaults to the document conversion stack's tools and can
//! be replaced through [`CHECKS_ENV`] (`name=program arg…` entries separated
//! by `;`).

use std::env;

use hadid_preflight::{Bootstrapper, CHECKS_ENV, DependencyCheck, PreflightError};

fn bootstrapper_from_env() -> Result<Bootstrapper, PreflightError> {
    match env::var(CHECKS_ENV) {
        Ok(spec) => Ok(Bootstrapper::new(DependencyCheck::parse_list(&spec)?)),
        Err(_) => Ok(Bootstrapper::with_default_checks()),
    }
}

fn main() {
    let outcome = bootstrapper_from_env().and_then(|mut bootstrapper| bootstrapper.run());
    if let Err(err) = outcome {
        eprintln!("Pre-install check failed: {err}");
        std::process::exit(1);
    }
    println!("all system dependencies present");
}
