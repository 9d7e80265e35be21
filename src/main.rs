//! taglog command line tool.
//!
//! Inspects how the current `DEBUG` / `NOCOLOR` environment affects tagged
//! loggers.
//!
//! ```text
//! DEBUG="db:*,cache" taglog check db:query http
//! DEBUG="db:(*"      taglog lint
//!                    taglog palette
//! DEBUG="demo"       taglog demo demo
//! ```

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taglog::color::{colorize, PALETTE};
use taglog::config::{validate_config, DebugConfig, ALLOW_LIST_VAR};
use taglog::{logf, logln, Logger};

#[derive(Parser)]
#[command(name = "taglog")]
#[command(about = "Inspect tagged debug logging configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report which tags are enabled under the current environment
    Check {
        /// Tags to evaluate
        #[arg(required = true)]
        tags: Vec<String>,

        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Validate the DEBUG allow-list
    Lint,
    /// Print every palette color
    Palette,
    /// Log sample values under a tag
    Demo {
        tag: String,
    },
}

#[derive(Debug, Serialize)]
struct TagReport {
    tag: String,
    enabled: bool,
    color: Option<u8>,
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    config: &'a DebugConfig,
    tags: Vec<TagReport>,
}

#[derive(Debug)]
#[allow(dead_code)]
struct SampleQuery {
    table: &'static str,
    filters: Vec<(&'static str, i64)>,
    limit: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taglog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    // Same view of the environment as Logger::new, but say why it differs
    let config = DebugConfig::try_from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "treating non-unicode value as unset");
        DebugConfig::from_env()
    });

    match cli.command {
        Commands::Check { tags, json } => {
            let reports: Vec<TagReport> = tags
                .into_iter()
                .map(|tag| {
                    let logger = Logger::with_config(tag, config.clone());
                    TagReport {
                        tag: logger.tag().to_string(),
                        enabled: logger.is_enabled(),
                        color: logger.color(),
                    }
                })
                .collect();

            if json {
                let report = CheckReport {
                    config: &config,
                    tags: reports,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for r in &reports {
                    let state = if r.enabled { "enabled" } else { "disabled" };
                    match r.color {
                        Some(code) => println!("{}\t{} (color {})", r.tag, state, code),
                        None => println!("{}\t{}", r.tag, state),
                    }
                }
            }
        }
        Commands::Lint => match validate_config(&config) {
            Ok(()) => {
                tracing::info!(allow_list = %config.allow_list, "allow-list is valid");
                println!("ok");
            }
            Err(errors) => {
                for e in &errors {
                    eprintln!("{}", e);
                }
                return Err(format!("{} invalid pattern(s) in {}", errors.len(), ALLOW_LIST_VAR).into());
            }
        },
        Commands::Palette => {
            for (i, code) in PALETTE.iter().enumerate() {
                print!("{} ", colorize(*code, &format!("{code:>3}")));
                if (i + 1) % 12 == 0 {
                    println!();
                }
            }
            println!();
        }
        Commands::Demo { tag } => {
            let log = Logger::with_config(tag, config);
            if !log.is_enabled() {
                eprintln!("tag {:?} is disabled; set DEBUG to enable it", log.tag());
            }

            let query = SampleQuery {
                table: "users",
                filters: vec![("age", 30), ("active", 1)],
                limit: Some(25),
            };
            logf!(log, "starting demo for {}", log.tag());
            logln!(log, query, vec!["a", "b"], 42);
            logf!(log, "query = {:#?}", (1, "two"));
        }
    }

    Ok(())
}
