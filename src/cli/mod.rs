pub mod build;
pub mod check;
pub mod completions;
pub mod random;
pub mod render;
pub mod share;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::{Result, ShapezError};

/// shapez - shape code viewer
#[derive(Parser, Debug)]
#[command(name = "shapez")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./shapez.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a shape code to a PNG image
    Render(render::RenderArgs),

    /// Render every code in one or more code list files
    Build(build::BuildArgs),

    /// Validate shape codes without rendering
    Check(check::CheckArgs),

    /// Print a random shape code
    Random(random::RandomArgs),

    /// Print a shareable viewer link for a shape code
    Share(share::ShareArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Cli {
    /// Load the config named on the command line, or discover one in the
    /// current directory.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Config::discover(Path::new(".")),
        }
    }
}

/// Canvas size from the config, with optional command-line overrides.
pub(crate) fn canvas_size(config: &Config, size: Option<u32>, scale: Option<f32>) -> u32 {
    Config {
        size: size.unwrap_or(config.size),
        scale: scale.unwrap_or(config.scale),
        ..config.clone()
    }
    .canvas_size()
}

/// Create the directory an output file will be written into.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ShapezError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::parse_from(["shapez", "render", "C(u)", "--size", "256", "--json"]);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.code, "C(u)");
                assert_eq!(args.size, Some(256));
                assert!(args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_canvas_size_overrides() {
        let config = Config::default();
        assert_eq!(canvas_size(&config, None, None), 512);
        assert_eq!(canvas_size(&config, Some(100), None), 100);
        assert_eq!(canvas_size(&config, None, Some(0.5)), 256);
        assert_eq!(canvas_size(&config, None, Some(4.0)), 512);
    }

    #[test]
    fn test_random_count_must_be_positive() {
        assert!(Cli::try_parse_from(["shapez", "random", "-n", "0"]).is_err());
        let cli = Cli::parse_from(["shapez", "random", "-n", "3"]);
        match cli.command {
            Commands::Random(args) => assert_eq!(args.count, 3),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ensure_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("shape.png");
        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());

        ensure_parent_dir(Path::new("shape.png")).unwrap();
    }
}
