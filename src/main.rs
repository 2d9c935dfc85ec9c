//! seobrief - heuristic SEO page classification and content briefs

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use seobrief::cli::{Cli, Commands, ConfigCommands};
use seobrief::error::Result;

mod commands;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.command.default_log_filter());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}

fn init_logging(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Clean { text, url, json } => commands::cmd_clean(&text.join(" "), url, json),
        Commands::Classify {
            url,
            title,
            h1,
            meta_description,
            fetch,
            json,
        } => commands::cmd_classify(url, title, h1, meta_description, fetch, json),
        Commands::Brief {
            input,
            url,
            intent,
            audience,
            tone,
            format,
        } => commands::cmd_brief(input, url, intent, audience, tone, format),
        Commands::Serve { bind } => commands::cmd_serve(bind),
        Commands::Config(ConfigCommands::Show { json }) => commands::cmd_config_show(json),
        Commands::Config(ConfigCommands::Path) => commands::cmd_config_path(),
        Commands::Config(ConfigCommands::Init { force }) => commands::cmd_config_init(force),
        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}
