//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use linkfolio_access::{
    DEFAULT_DOCUMENT_PATH, featured_positions, load_document, skills_by_category, top_skills,
};
use linkfolio_core::pipeline::{ProcessConfig, ProcessResult, ProgressReporter};
use linkfolio_shared::{AppConfig, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Linkfolio: render a portfolio site's data from a LinkedIn export.
#[derive(Parser)]
#[command(
    name = "linkfolio",
    version,
    about = "Turn a LinkedIn data export into a portfolio document and inspect it.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `process` when no subcommand is given.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Process the LinkedIn export CSVs into the portfolio document.
    Process {
        /// Export directory (defaults to the configured export_dir).
        #[arg(short, long)]
        source: Option<String>,

        /// Output file (defaults to the configured output_file).
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Load a portfolio document and print its derived views.
    Show {
        /// Document path (defaults to the fixed site path).
        #[arg(long)]
        document: Option<String>,

        /// Number of top skills to print.
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "linkfolio=info",
        1 => "linkfolio=debug",
        _ => "linkfolio=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command. No subcommand means `process` with config defaults.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Command::Process {
        source: None,
        out: None,
    }) {
        Command::Process { source, out } => cmd_process(source.as_deref(), out.as_deref()),
        Command::Show { document, top } => cmd_show(document.as_deref(), top),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// process
// ---------------------------------------------------------------------------

fn cmd_process(source: Option<&str>, out: Option<&str>) -> Result<()> {
    let config = load_config()?;

    // CLI flags override config file values, which override defaults
    let source_dir = source.unwrap_or(&config.paths.export_dir);
    let output_path = out.unwrap_or(&config.paths.output_file);

    let process_config = ProcessConfig {
        source_dir: PathBuf::from(source_dir),
        output_path: PathBuf::from(output_path),
    };

    info!(source_dir, output_path, "processing LinkedIn export");

    let reporter = CliProgress::new();
    let result = linkfolio_core::pipeline::process(&process_config, &reporter)?;

    // Print summary
    println!();
    println!("  Portfolio document written!");
    println!(
        "  Profile:         {} {}",
        result.document.profile.first_name, result.document.profile.last_name
    );
    println!("  Positions:       {}", result.counts.positions);
    println!("  Skills:          {}", result.counts.skills);
    println!("  Education:       {}", result.counts.education);
    println!("  Certifications:  {}", result.counts.certifications);
    println!("  Recommendations: {}", result.counts.recommendations);
    println!("  Projects:        {}", result.counts.projects);
    println!("  Output:          {}", result.output_path.display());
    println!("  Time:            {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _result: &ProcessResult) {
        self.spinner.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn cmd_show(document_path: Option<&str>, top: usize) -> Result<()> {
    let path = document_path.unwrap_or(DEFAULT_DOCUMENT_PATH);
    let document = load_document(Path::new(path));

    println!();
    println!(
        "  {} {}",
        document.profile.first_name, document.profile.last_name
    );
    if !document.profile.headline.is_empty() {
        println!("  {}", document.profile.headline);
    }
    if !document.profile.location.is_empty() {
        println!("  {}", document.profile.location);
    }

    println!();
    println!("  Top skills:");
    for skill in top_skills(&document, Some(top)) {
        println!("    {:3}  {}", skill.endorsements, skill.name);
    }

    println!();
    println!("  Skills by category:");
    for (category, skills) in skills_by_category(&document) {
        println!("    {:28} {}", category.label(), skills.len());
    }

    println!();
    println!("  Featured positions:");
    for position in featured_positions(&document) {
        println!(
            "    {} at {} ({} to {})",
            position.title, position.company, position.start_date, position.end_date
        );
    }
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
