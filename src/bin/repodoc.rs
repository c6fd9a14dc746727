//! Repodoc CLI - generate project documentation in one markdown file.

use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use log::{debug, info, warn};
use repodoc::document::assemble;
use repodoc::errors::{exit_code, RepodocError};
use repodoc::policy::{FilterPolicy, Preset};
use repodoc::report::LogReporter;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "repodoc")]
#[command(about = "Generate a single markdown document of a project's tree and file contents")]
#[command(version)]
struct Cli {
    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the documentation document
    Generate {
        /// Project root to document
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output file path
        #[arg(short, long, default_value = "PROJECT_DOCUMENTATION.md")]
        output: PathBuf,

        /// Ignore preset (base, generic, flutter); auto-detected when omitted
        #[arg(long)]
        preset: Option<String>,

        /// Extra ignore entries: `.ext` for extensions, anything else for path segments
        #[arg(long = "ignore", value_name = "ENTRY")]
        ignores: Vec<String>,

        /// Report errors as JSON on stderr
        #[arg(long)]
        json: bool,
    },

    /// List known ignore presets
    Presets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn setup_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env = env_logger::Env::default().filter_or("REPODOC_LOG_LEVEL", level);
    env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    let json_output = json_flag(&cli.command);

    let result = match cli.command {
        Commands::Generate {
            path,
            output,
            preset,
            ignores,
            json: _,
        } => run_generate(path, output, preset, ignores),
        Commands::Presets { json } => run_presets(json),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "repodoc", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        if json_output {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }

            let payload = ErrorOutput {
                error: e.to_string(),
            };

            let json = serde_json::to_string(&payload)
                .unwrap_or_else(|_| "{\"error\":\"serialization failed\"}".to_string());
            eprintln!("{json}");
        } else {
            eprintln!("error: {}", e);
        }
        std::process::exit(exit_code(&e));
    }
}

fn json_flag(cmd: &Commands) -> bool {
    match cmd {
        Commands::Generate { json, .. } => *json,
        Commands::Presets { json } => *json,
        Commands::Completions { .. } => false,
    }
}

// --- Generate command ---

fn run_generate(
    path: PathBuf,
    output: PathBuf,
    preset_name: Option<String>,
    ignores: Vec<String>,
) -> Result<(), RepodocError> {
    let preset = match preset_name {
        Some(name) => name.parse::<Preset>()?,
        None => {
            let detected = Preset::detect(&path);
            debug!("no preset given, detected: {detected}");
            detected
        }
    };
    info!("using preset: {preset}");

    let policy = FilterPolicy::with_overrides(preset, &ignores);

    // A stale output file inside the project would otherwise be embedded
    // in its own replacement. Failure to delete is only a warning.
    if output.exists() {
        match fs::remove_file(&output) {
            Ok(()) => info!("deleted existing file: {}", output.display()),
            Err(err) => warn!("could not delete existing file: {err}"),
        }
    }

    let document = assemble(&path, &policy, &mut LogReporter)?;
    fs::write(&output, document)?;

    println!("documentation generated: {}", output.display());
    Ok(())
}

// --- Presets command ---

fn run_presets(json: bool) -> Result<(), RepodocError> {
    let names: Vec<String> = Preset::all().iter().map(|p| p.to_string()).collect();

    if json {
        #[derive(Serialize)]
        struct Output {
            presets: Vec<String>,
        }
        let output = Output { presets: names };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| RepodocError::Io(std::io::Error::other(e.to_string())))?;
        println!("{json}");
    } else {
        println!("Known presets:");
        for name in &names {
            println!("  {name}");
        }
    }

    Ok(())
}
