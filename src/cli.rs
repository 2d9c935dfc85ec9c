use clap::{Parser, Subcommand, ValueEnum};

/// Shell types for completion generation
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Output format for generated briefs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BriefFormat {
    /// Coloured summary for the terminal
    #[default]
    Text,
    /// Markdown document, ready to paste into a doc
    Markdown,
    /// JSON, same shape as GET /api/brief
    Json,
}

#[derive(Parser)]
#[command(name = "seobrief")]
#[command(author, version, about = "Heuristic SEO page classification and content briefs for SaaS sites", long_about = None)]
#[command(after_help = r#"Examples:
  seobrief brief "content marketing"                        Brief for a keyword
  seobrief brief https://acme.com/pricing --url             Brief for an existing page
  seobrief classify --url /pricing --title "Pricing Plans"  Classify from page fields
  seobrief classify --fetch https://acme.com/vs/globex      Fetch and classify a live page
  seobrief clean "What is SEO for de checklist"             Normalize a topic
  seobrief serve --bind 0.0.0.0:3000                        Run the HTTP API
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a title, keyword or URL into a topic phrase
    #[command(after_help = r#"Examples:
  seobrief clean "Pricing | Acme SaaS"          -> Pricing
  seobrief clean "How to write release notes"   -> Write Release Notes
  seobrief clean --url https://acme.com/blog/churn-reduction-tips
"#)]
    Clean {
        /// Raw text (multiple words are joined with spaces)
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,

        /// Treat the input as a URL and derive the topic from its slug
        #[arg(long)]
        url: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a page as pricing, comparison, feature or blog
    #[command(after_help = r#"Examples:
  seobrief classify --url /pricing --title "Pricing Plans"
  seobrief classify --title "Acme vs Globex" --meta-description "Compare plans"
  seobrief classify --fetch https://acme.com/features --json
"#)]
    Classify {
        /// Page URL or path
        #[arg(long, default_value = "")]
        url: String,

        /// Page title
        #[arg(long, default_value = "")]
        title: String,

        /// Main heading
        #[arg(long, default_value = "")]
        h1: String,

        /// Meta description
        #[arg(long, default_value = "")]
        meta_description: String,

        /// Fetch this URL and classify its title, h1 and meta description
        #[arg(long, value_name = "URL", conflicts_with_all = ["url", "title", "h1", "meta_description"])]
        fetch: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a content brief for a keyword or URL
    #[command(after_help = r#"Examples:
  seobrief brief "content marketing"
  seobrief brief "crm pricing" --intent transactional --tone friendly
  seobrief brief https://acme.com/blog/onboarding-emails --url --format markdown
"#)]
    Brief {
        /// Keyword or URL
        #[arg(value_name = "INPUT")]
        input: String,

        /// Treat INPUT as a URL
        #[arg(long)]
        url: bool,

        /// Search intent (defaults by page type)
        #[arg(long)]
        intent: Option<String>,

        /// Target audience (defaults to config)
        #[arg(long)]
        audience: Option<String>,

        /// Tone of voice (defaults to config)
        #[arg(long)]
        tone: Option<String>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = BriefFormat::Text)]
        format: BriefFormat,
    },

    /// Run the HTTP API (/api/brief, /api/classify, /api/auth-google-config)
    Serve {
        /// Listen address (overrides config and SEOBRIEF_BIND)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Show or initialize configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Default log filter for this command when RUST_LOG is unset
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Commands::Serve { .. } => "info,seobrief=debug,tower_http=info",
            _ => "warn",
        }
    }
}
