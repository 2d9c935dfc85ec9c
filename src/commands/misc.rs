use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;

use seobrief::cli::{Cli, CompletionShell};
use seobrief::config::Config;
use seobrief::error::{Result, SeoError};

/// Print the effective configuration (file plus environment overrides)
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let client_id = config.google_client_id();
    println!("\n{}\n", "Configuration".bold());
    println!("  Bind:       {}", config.bind);
    println!("  Audience:   {}", config.default_audience);
    println!("  Tone:       {}", config.default_tone);
    if client_id.is_empty() {
        println!("  Google:     {}", "disabled".dimmed());
    } else {
        println!("  Google:     {} ({})", "enabled".green(), client_id);
    }
    println!("\n  File: {}", Config::config_path()?.display());
    Ok(())
}

pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a default config file
pub fn cmd_config_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        return Err(SeoError::ConfigError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save()?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

/// Generate shell completions
pub fn cmd_completions(shell: CompletionShell) -> Result<()> {
    let mut cmd = Cli::command();
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Fish => Shell::Fish,
        CompletionShell::Powershell => Shell::PowerShell,
    };
    generate(shell, &mut cmd, "seobrief", &mut io::stdout());
    Ok(())
}
