use clap::Parser;
use env_logger::Env;
use miette::Result;
use shapez::cli::{Cli, Commands};
use shapez::output::Printer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => shapez::cli::render::run(args, &config, &printer)?,
        Commands::Build(args) => shapez::cli::build::run(args, &config, &printer)?,
        Commands::Check(args) => shapez::cli::check::run(args, &printer)?,
        Commands::Random(args) => shapez::cli::random::run(args, &config, &printer)?,
        Commands::Share(args) => shapez::cli::share::run(args)?,
        Commands::Completions(args) => shapez::cli::completions::run(args)?,
    }

    Ok(())
}
