//! Build command implementation.
//!
//! Reads code list files and renders every entry to `<output>/<name>.png`.
//! Invalid codes and names already used by an earlier entry are reported and
//! skipped; the command fails at the end if any entry had errors.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::discovery::scan_sources;
use crate::error::{Result, ShapezError};
use crate::output::{display_path, plural, Printer};
use crate::parser::{parse_code_list, CodeEntry};
use crate::render::{rasterize, write_png};
use crate::validation::{print_diagnostics, validate_code, Diagnostic, ValidationResult};

/// Render every code in one or more code list files
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Code list files, or directories to search for *.shapez files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory (default: from config, or "dist")
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Canvas size in pixels at full scale
    #[arg(long)]
    pub size: Option<u32>,

    /// Zoom factor applied to the size (0.25 - 1.0)
    #[arg(long)]
    pub scale: Option<f32>,
}

pub fn run(args: BuildArgs, config: &Config, printer: &Printer) -> Result<()> {
    let output_dir = args.output.clone().unwrap_or_else(|| config.output.clone());
    let size = super::canvas_size(config, args.size, args.scale);

    let files = scan_sources(&args.inputs)?;
    if files.is_empty() {
        printer.warning("Skipping", "no code lists found");
        return Ok(());
    }

    fs::create_dir_all(&output_dir).map_err(|e| ShapezError::Io {
        path: output_dir.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut built = 0;
    let mut failed = 0;
    // output name -> label of the entry that claimed it
    let mut claimed: HashMap<String, String> = HashMap::new();

    for file in &files {
        let entries = read_code_list(file)?;
        printer.status("Building", &display_path(file));

        for entry in &entries {
            let label = format!("{}:{} ({})", display_path(file), entry.line, entry.name);
            if let Some(first) = claimed.get(&entry.name) {
                print_diagnostics(&label, &duplicate_name(&entry.name, first), printer);
                failed += 1;
                continue;
            }
            claimed.insert(entry.name.clone(), label.clone());

            if build_entry(entry, &label, &output_dir, size, printer)? {
                built += 1;
            } else {
                failed += 1;
            }
        }
    }

    if failed > 0 {
        printer.error(
            "Failed",
            &format!(
                "{} built, {} with errors",
                plural(built, "shape", "shapes"),
                failed
            ),
        );
        return Err(ShapezError::Render {
            message: format!("{} invalid", plural(failed, "shape code", "shape codes")),
            help: Some("Run `shapez check` on the codes for details".to_string()),
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(built, "shape", "shapes"),
            printer.cyan(&display_path(&output_dir))
        ),
    );
    Ok(())
}

fn read_code_list(path: &Path) -> Result<Vec<CodeEntry>> {
    let source = fs::read_to_string(path).map_err(|e| ShapezError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "shape".to_string());
    parse_code_list(&source, &stem)
}

fn duplicate_name(name: &str, first: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.push(
        Diagnostic::error(
            "shapez::build::duplicate-name",
            format!("Shape '{}' is already defined at {}", name, first),
        )
        .with_help("Give one of the entries a different name with `name = code`"),
    );
    result
}

/// Render one entry. Returns `false` when its code did not parse.
fn build_entry(
    entry: &CodeEntry,
    label: &str,
    output_dir: &Path,
    size: u32,
    printer: &Printer,
) -> Result<bool> {
    let (shape, result) = validate_code(&entry.code);
    print_diagnostics(label, &result, printer);

    let Some(shape) = shape else {
        return Ok(false);
    };

    let surface = rasterize(&shape, size)?;
    let output_path = output_dir.join(format!("{}.png", entry.name));
    write_png(&surface, &output_path)?;
    printer.info("Rendered", &format!("{} -> {}", entry.name, display_path(&output_path)));

    Ok(true)
}
