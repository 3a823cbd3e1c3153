//! Random command implementation.

use std::path::PathBuf;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::error::Result;
use crate::generate::random_code;
use crate::output::{display_path, Printer};
use crate::parser::parse;
use crate::render::{rasterize, write_png};

/// Print a random shape code
#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Maximum number of layers (default: from config, or 4)
    #[arg(long)]
    pub layers: Option<usize>,

    /// Number of codes to print
    #[arg(long, short = 'n', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Seed for repeatable output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also render the first code to this PNG file
    #[arg(long)]
    pub render: Option<PathBuf>,
}

pub fn run(args: RandomArgs, config: &Config, printer: &Printer) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let max_layers = args.layers.unwrap_or(config.layers);

    let codes: Vec<String> = (0..args.count)
        .map(|_| random_code(&mut rng, max_layers))
        .collect();

    for code in &codes {
        println!("{}", code);
    }

    if let (Some(path), Some(code)) = (&args.render, codes.first()) {
        let shape = parse(code)?;
        let surface = rasterize(&shape, config.canvas_size())?;
        super::ensure_parent_dir(path)?;
        write_png(&surface, path)?;
        printer.status("Rendered", &printer.cyan(&display_path(path)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_random_with_render() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("renders").join("random.png");
        let args = RandomArgs {
            layers: Some(2),
            count: 3,
            seed: Some(11),
            render: Some(path.clone()),
        };
        let config = Config {
            size: 48,
            ..Default::default()
        };

        run(args, &config, &Printer::new()).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 48);
    }
}
