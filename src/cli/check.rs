//! Check command implementation.
//!
//! Validates codes given on the command line (or read from stdin with `-`)
//! and reports every problem found.

use std::io::{self, BufRead};

use clap::Args;

use crate::error::{Result, ShapezError};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_code, ValidationResult};

/// Validate shape codes without rendering
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Shape codes to check; "-" reads one code per line from stdin
    #[arg(required = true)]
    pub codes: Vec<String>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let codes = collect_codes(&args.codes)?;
    let mut total = ValidationResult::new();

    for code in &codes {
        let (_, result) = validate_code(code);
        print_diagnostics(code, &result, printer);
        total.merge(result);
    }

    let errors = total.error_count();
    let warnings = total.warning_count();
    let failed = errors > 0 || (args.strict && warnings > 0);

    let summary = format!(
        "{}: {}, {}",
        plural(codes.len(), "code", "codes"),
        plural(errors, "error", "errors"),
        plural(warnings, "warning", "warnings")
    );

    if failed {
        printer.error("Failed", &summary);
        return Err(ShapezError::Parse {
            message: format!("{} did not pass", plural(codes.len(), "code", "codes")),
            help: None,
        });
    }

    printer.status("Checked", &summary);
    Ok(())
}

fn collect_codes(args: &[String]) -> Result<Vec<String>> {
    let mut codes = Vec::new();

    for arg in args {
        if arg == "-" {
            for line in io::stdin().lock().lines() {
                let line = line.map_err(|e| ShapezError::Io {
                    path: "<stdin>".into(),
                    message: e.to_string(),
                })?;
                let line = line.trim();
                if !line.is_empty() {
                    codes.push(line.to_string());
                }
            }
        } else {
            codes.push(arg.clone());
        }
    }

    Ok(codes)
}
