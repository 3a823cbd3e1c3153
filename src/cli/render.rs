//! Render command implementation.
//!
//! Parses one shape code and writes it as a PNG, or prints the parsed
//! structure as JSON.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{Result, ShapezError};
use crate::output::{display_path, Printer};
use crate::parser::parse;
use crate::render::{rasterize, write_png};

/// Default file name when no output path is given.
const DEFAULT_FILE_NAME: &str = "shape.png";

/// Render a shape code to a PNG image
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Shape code, e.g. "R(r)C(g)--W(b):S(u)"
    pub code: String,

    /// Output file (default: <output dir>/shape.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Canvas size in pixels at full scale
    #[arg(long)]
    pub size: Option<u32>,

    /// Zoom factor applied to the size (0.25 - 1.0)
    #[arg(long)]
    pub scale: Option<f32>,

    /// Print the parsed shape as JSON instead of rendering
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RenderArgs, config: &Config, printer: &Printer) -> Result<()> {
    let shape = parse(&args.code)?;

    if args.json {
        let json = serde_json::to_string_pretty(&shape).map_err(|e| ShapezError::Render {
            message: format!("Failed to serialize shape: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.join(DEFAULT_FILE_NAME));

    super::ensure_parent_dir(&output)?;

    let size = super::canvas_size(config, args.size, args.scale);
    printer.status("Rendering", &format!("{} ({}x{})", shape, size, size));

    let surface = rasterize(&shape, size)?;
    write_png(&surface, &output)?;

    printer.status("Finished", &printer.cyan(&display_path(&output)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(code: &str, output: PathBuf) -> RenderArgs {
        RenderArgs {
            code: code.to_string(),
            output: Some(output),
            size: Some(64),
            scale: None,
            json: false,
        }
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out").join("circle.png");

        run(args("C(r)", output.clone()), &Config::default(), &Printer::new()).unwrap();

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
    }

    #[test]
    fn test_render_uses_config_scale() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("half.png");
        let config = Config {
            size: 200,
            scale: 0.5,
            ..Default::default()
        };
        let mut render_args = args("R(b)", output.clone());
        render_args.size = None;

        run(render_args, &config, &Printer::new()).unwrap();

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.width(), 100);
    }

    #[test]
    fn test_render_invalid_code() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("bad.png");

        let err = run(args("R(r)C(r)S(r)", output.clone()), &Config::default(), &Printer::new())
            .unwrap_err();

        assert!(matches!(err, ShapezError::Format(_)));
        assert_eq!(err.to_string(), "Shapez must have 4 corners");
        assert!(!output.exists());
    }

    #[test]
    fn test_render_oversized_canvas() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("huge.png");
        let mut render_args = args("C(r)", output.clone());
        render_args.size = Some(100_000);

        let err = run(render_args, &Config::default(), &Printer::new()).unwrap_err();

        assert!(matches!(err, ShapezError::Render { .. }));
        assert!(!output.exists());
    }
}
