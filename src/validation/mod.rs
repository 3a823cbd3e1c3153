//! Validation of shape codes.
//!
//! Used by `shapez check` and `shapez build` to report every problem in a
//! batch of codes instead of stopping at the first one.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::error::ShapeFormatError;
use crate::output::Printer;
use crate::parser::parse;
use crate::types::Shape;

/// Parse a code and run all checks on it.
///
/// Returns the shape when it parsed, along with every diagnostic found.
pub fn validate_code(code: &str) -> (Option<Shape>, ValidationResult) {
    let mut result = ValidationResult::new();

    match parse(code) {
        Ok(shape) => {
            result.merge(checks::check_colours(&shape));
            result.merge(checks::check_layer_depth(&shape));
            (Some(shape), result)
        }
        Err(err) => {
            result.push(format_diagnostic(&err));
            (None, result)
        }
    }
}

/// Turn a parse failure into an error diagnostic with a hint.
pub fn format_diagnostic(err: &ShapeFormatError) -> Diagnostic {
    let diagnostic = Diagnostic::error("shapez::format", err.message.clone());
    let message = err.message.as_str();

    let help = if message.starts_with("Shapez must have 4 corners") {
        Some("Write 1, 2 or 4 quadrant entries per layer, e.g. C(r), R(r)--, or R(r)C(g)S(b)W(y)")
    } else if message.starts_with("Empty layers") {
        Some("Every layer needs at least one filled quadrant")
    } else if message.starts_with("Invalid shape key") {
        Some("Shape letters are R, C, S and W; use -- for an empty quadrant")
    } else if message.starts_with("Invalid color count") {
        Some("Give exactly one colour per filled quadrant")
    } else if message.starts_with("Invalid color") {
        Some("Colours are 3 or 6 hex digits, or one of r g b p c y u w k")
    } else if message.starts_with("Invalid shape") {
        Some("Empty quadrants must be written as --")
    } else {
        None
    };

    match help {
        Some(help) => diagnostic.with_help(help),
        None => diagnostic,
    }
}

/// Print diagnostics for one code to stderr.
pub fn print_diagnostics(label: &str, result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let severity = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("{}[{}]: {}: {}", severity, d.code, label, d.message);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_code() {
        let (shape, result) = validate_code("R(r)C(g)S(b)W(y)");
        assert!(shape.is_some());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_invalid_code() {
        let (shape, result) = validate_code("R(r)C(g)S(b)");
        assert!(shape.is_none());
        assert!(result.has_errors());

        let d = result.iter().next().unwrap();
        assert_eq!(d.code, "shapez::format");
        assert_eq!(d.message, "Shapez must have 4 corners");
        assert!(d.help.is_some());
    }

    #[test]
    fn test_validate_warnings_only() {
        let (shape, result) = validate_code("R(xyz)");
        assert!(shape.is_some());
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 4);
    }

    #[test]
    fn test_help_for_each_error() {
        for (code, help_prefix) in [
            ("----", "Every layer"),
            ("X(r)", "Shape letters"),
            ("RRRR(f)", "Give exactly"),
            ("R(q)", "Colours are"),
            ("R(r)-C(r)S(r)", "Empty quadrants"),
        ] {
            let (_, result) = validate_code(code);
            let d = result.iter().next().unwrap();
            assert!(
                d.help.as_deref().unwrap_or("").starts_with(help_prefix),
                "{}: {:?}",
                code,
                d
            );
        }
    }
}
