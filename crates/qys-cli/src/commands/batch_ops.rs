//! JSON Lines batch transcription.
//!
//! Each input line is `{"char": "...", "profiles": [...]}` where every
//! profile uses the upstream field names (`initial`, `rhymeCycleHead`, ...).
//! Each output line carries the transcriptions and their abbreviation.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug_span, warn};

use qys_core::abbreviate::{abbreviate_with, AbbreviationStyle};
use qys_core::transcribe::{transcribe_raw, TranscribeError};
use qys_core::RawSyllableProfile;

#[derive(Debug, Deserialize)]
struct BatchRecord {
    #[serde(rename = "char")]
    character: String,
    profiles: Vec<RawSyllableProfile>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchResult {
    #[serde(rename = "char")]
    pub character: String,
    pub transcriptions: Vec<String>,
    pub abbreviated: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub skipped: usize,
    pub skipped_records: Vec<SkippedRecord>,
}

/// A record left out of the output because a label was unrecognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: usize,
    pub character: String,
    pub reason: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid record: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
    #[error("line {line} ({character}): {source}")]
    Transcribe {
        line: usize,
        character: String,
        source: TranscribeError,
    },
}

/// Transcribe every record of `reader` into `writer`.
///
/// Blank lines and lines starting with `#` are ignored. With
/// `skip_unrecognized`, a record containing an unknown category is skipped
/// and its line recorded in the summary instead of aborting the run.
pub fn run_batch<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    style: &AbbreviationStyle,
    skip_unrecognized: bool,
) -> Result<BatchSummary, BatchError> {
    let _span = debug_span!("run_batch", skip_unrecognized).entered();
    let mut summary = BatchSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let record: BatchRecord =
            serde_json::from_str(trimmed).map_err(|source| BatchError::Json {
                line: line_no,
                source,
            })?;

        let transcriptions: Result<Vec<String>, TranscribeError> =
            record.profiles.into_iter().map(transcribe_raw).collect();
        let transcriptions = match transcriptions {
            Ok(t) => t,
            Err(source) if skip_unrecognized => {
                warn!(line = line_no, character = %record.character, error = %source, "skipped");
                summary.skipped += 1;
                summary.skipped_records.push(SkippedRecord {
                    line: line_no,
                    character: record.character,
                    reason: source.to_string(),
                });
                continue;
            }
            Err(source) => {
                return Err(BatchError::Transcribe {
                    line: line_no,
                    character: record.character,
                    source,
                })
            }
        };

        let result = BatchResult {
            abbreviated: abbreviate_with(&transcriptions, style),
            character: record.character,
            transcriptions,
        };
        let encoded = serde_json::to_string(&result).map_err(|source| BatchError::Json {
            line: line_no,
            source,
        })?;
        writeln!(writer, "{encoded}")?;
        summary.written += 1;
    }

    writer.flush()?;
    Ok(summary)
}
