//! CLI entry point for configtrace.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O, and exit
//! codes. All business logic lives in the `configtrace-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use configtrace_app::{
    ExplainOutput, ReportInput, format_explanation, format_not_found, format_sections,
    run_explain, run_report, serialize_problems, write_output,
};
use configtrace_settings::Overrides;
use std::io::Read;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "CONFIGTRACE_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "configtrace",
    version,
    about = "Render configuration cache problems with their provenance"
)]
struct Cli {
    /// Path to configtrace config TOML.
    #[arg(long, global = true, default_value = "configtrace.toml")]
    config: Utf8PathBuf,

    /// Override profile (console|ci|report).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Log at debug level unless CONFIGTRACE_LOG is set.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a problem set JSON document.
    Render {
        /// Path to the problem set JSON (`-` reads stdin).
        #[arg(long)]
        input: Utf8PathBuf,

        /// Output format (text|markdown|github).
        #[arg(long)]
        format: Option<String>,

        /// Maximum number of problems to render.
        #[arg(long)]
        max_problems: Option<u32>,

        /// Keep problems equal to one already reported.
        #[arg(long)]
        no_dedupe: bool,

        /// Where to write the rendered output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,

        /// Also write the rendered problems, with fingerprints, as a problem set JSON.
        #[arg(long)]
        emit_json: Option<Utf8PathBuf>,
    },

    /// Explain a documentation section by id or anchor.
    Explain {
        /// The section id (e.g. "requirements_task_access") or its anchor.
        section: String,
    },

    /// List every documentation section with its anchor.
    Sections,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Render {
            ref input,
            ref format,
            max_problems,
            no_dedupe,
            ref output,
            ref emit_json,
        } => {
            let overrides = Overrides {
                profile: cli.profile.clone(),
                format: format.clone(),
                max_problems,
                dedupe: no_dedupe.then_some(false),
            };
            cmd_render(
                &cli.config,
                input,
                overrides,
                output.as_deref(),
                emit_json.as_deref(),
            )
        }
        Commands::Explain { ref section } => cmd_explain(section),
        Commands::Sections => {
            print!("{}", format_sections());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        debug!(%path, "config file not found, using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn read_input(path: &Utf8Path) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read problem set from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read problem set: {}", path))
}

fn cmd_render(
    config_path: &Utf8Path,
    input_path: &Utf8Path,
    overrides: Overrides,
    output: Option<&Utf8Path>,
    emit_json: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let config_text = read_config(config_path)?;
    let input_json = read_input(input_path)?;

    let out = run_report(ReportInput {
        input_json: &input_json,
        config_text: &config_text,
        overrides,
    })?;

    if let Some(path) = emit_json {
        let data = serialize_problems(&out.problems)?;
        write_output(path, &data).context("write problem set json")?;
    }

    if let Some(path) = output {
        write_output(path, out.rendered.as_bytes()).context("write rendered output")?;
    } else {
        print!("{}", out.rendered);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(section) => {
            print!("{}", format_explanation(section));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available,
        } => {
            eprint!("{}", format_not_found(&identifier, &available));
            std::process::exit(2);
        }
    }
}
