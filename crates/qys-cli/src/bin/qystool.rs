use std::fs;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use qys_cli::commands::{batch_ops, table_ops, transcribe_ops};
use qys_cli::die;
use qys_cli::trace_init::init_tracing;
use qys_core::abbreviate::AbbreviationStyle;
use qys_core::settings::{init_custom, settings};
use qys_core::{Initial, Row, Tone};

#[derive(Parser)]
#[command(name = "qystool", about = "Qieyun syllable transcription tools")]
struct Cli {
    /// Path to a custom settings TOML (replaces the embedded defaults)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Write trace events as JSON lines into this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe syllable descriptors such as 幫三東入 or 見開三A真平
    Transcribe {
        /// One or more descriptors
        #[arg(required = true)]
        descriptors: Vec<String>,
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show each derivation step for one descriptor
    Explain {
        /// Syllable descriptor
        descriptor: String,
    },

    /// Merge transcriptions of one character that differ only in tone
    Abbreviate {
        /// Transcriptions in reading order
        #[arg(required = true)]
        transcriptions: Vec<String>,
    },

    /// Transcribe JSON Lines records of character profiles
    Batch {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Print every rhyme's spelling for one initial
    Table {
        /// Initial to tabulate
        #[arg(long, default_value = "見")]
        initial: Initial,
        /// Tone to tabulate
        #[arg(long, default_value = "平")]
        tone: Tone,
        /// Row (division) to assume
        #[arg(long)]
        row: Option<Row>,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());

    if let Some(path) = &cli.settings {
        let shown = path.display();
        let content = die!(
            fs::read_to_string(path),
            "Error reading settings {shown}: {}"
        );
        die!(init_custom(content), "Error loading settings: {}");
    }

    match cli.command {
        Command::Transcribe { descriptors, json } => {
            transcribe_ops::transcribe_cmd(&descriptors, json);
        }
        Command::Explain { descriptor } => {
            transcribe_ops::explain_cmd(&descriptor);
        }
        Command::Abbreviate { transcriptions } => {
            transcribe_ops::abbreviate_cmd(&transcriptions);
        }
        Command::Batch { input } => {
            let style = AbbreviationStyle::from(&settings().abbreviation);
            let skip = settings().batch.skip_unrecognized;
            let stdout = io::stdout().lock();
            let result = match input {
                Some(path) => {
                    let file = die!(fs::File::open(&path), "Error opening input: {}");
                    batch_ops::run_batch(BufReader::new(file), stdout, &style, skip)
                }
                None => batch_ops::run_batch(io::stdin().lock(), stdout, &style, skip),
            };
            match result {
                Ok(summary) => {
                    for skipped in &summary.skipped_records {
                        eprintln!(
                            "line {} ({}): skipped: {}",
                            skipped.line, skipped.character, skipped.reason
                        );
                    }
                    if summary.skipped > 0 {
                        eprintln!(
                            "{} records written, {} skipped",
                            summary.written, summary.skipped
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Batch failed: {e}");
                    process::exit(1);
                }
            }
        }
        Command::Table { initial, tone, row } => {
            table_ops::table_cmd(initial, tone, row);
        }
    }
}
