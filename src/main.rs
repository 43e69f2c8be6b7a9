use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use broadsheet::config::{Config, ThemeChoice};
use broadsheet::logging::init_tracing;
use broadsheet::ui::runtime;
use broadsheet::ui::theme::Theme;

/// A newspaper-styled portfolio for the terminal.
#[derive(Debug, Parser)]
#[command(name = "broadsheet", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme to start in, overriding the config file.
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let theme = Theme::from(cli.theme.unwrap_or(config.terminal.theme));
    runtime::run(config, theme)
}
