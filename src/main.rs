use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use course_register::{Locale, Menu, MenuConfig, OutputFormat, Registry, VERSION};

#[derive(Parser)]
#[command(name = "course-register")]
#[command(version, about = "Interactive in-memory course enrollment register")]
struct Cli {
    /// Label language for prompts and listings
    #[arg(long, value_enum, default_value_t = Locale::En)]
    lang: Locale,

    /// How listed records are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!(version = VERSION, lang = cli.lang.as_str(), "starting course register");

    let config = MenuConfig::new(cli.lang, cli.format);
    let mut registry = Registry::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut registry, stdin.lock(), stdout.lock(), config).run()?;

    Ok(())
}

/// Logs go to stderr so they never interleave with menu output
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
