//! Stylesheet cross-checking and pipeline diagnostics.
//!
//! References are extracted from the stylesheet once per run and
//! reconciled against the base-size assets after they have all been
//! written.

mod references;
mod warning;

pub use references::{reconcile, resource_path, MatchMode, ReferenceExtractor, DEFAULT_PATTERN};
pub use warning::{codes, Diagnostic, Severity, ValidationResult};

use crate::output::Printer;

/// Print diagnostics through the status printer.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("  {}[{}]: {}: {}", label, d.code, d.subject, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }
}
