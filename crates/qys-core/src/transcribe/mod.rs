//! Syllable profile to transcription.
//!
//! A transcription is the initial's romanization, the rhyme spelling and a
//! tone mark. Two environment rules rewrite the pieces after lookup:
//! entering-tone syllables turn a nasal coda into the matching stop, and the
//! initial is adjusted for a few series/row combinations (see
//! [`InitialAdjustment`]).

mod initials;
mod rhymes;
#[cfg(test)]
mod tests;

use std::fmt;

use tracing::{debug, debug_span};

use crate::abbreviate::abbreviate;
use crate::categories::{Initial, InitialGroup, Rhyme, Row, Tone, UnrecognizedCategory};
use crate::marks::{strip_retroflex, tone_mark};
use crate::profile::{RawSyllableProfile, SyllableProfile};

pub use initials::romanize_initial;
pub use rhymes::{derive_rhyme, rule_for, takes_front_variant, RhymeRule};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscribeError {
    #[error(transparent)]
    UnrecognizedCategory(#[from] UnrecognizedCategory),
}

/// Which environment rule rewrote the initial, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialAdjustment {
    /// 莊-series before 臻, 庚 or a second-row rhyme: ṣ/ẓ lose the dot.
    StrippedRetroflex,
    /// 端-series in the second or third row: "h" is appended.
    AppendedH,
    /// 以 before a glide-initial rhyme: the initial is dropped.
    AbsorbedIntoGlide,
}

/// The pieces of a transcription, in writing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionParts {
    pub initial: String,
    pub rhyme: String,
    pub tone_mark: &'static str,
    pub adjustment: Option<InitialAdjustment>,
    /// Whether an entering tone rewrote the rhyme's nasal coda.
    pub coda_mutated: bool,
}

impl fmt::Display for TranscriptionParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.initial, self.rhyme, self.tone_mark)
    }
}

/// Transcribe one syllable.
pub fn transcribe(profile: &SyllableProfile) -> String {
    transcribe_parts(profile).to_string()
}

/// Transcribe one syllable whose categories are still plain labels.
pub fn transcribe_raw(raw: RawSyllableProfile) -> Result<String, TranscribeError> {
    let profile = SyllableProfile::try_from(raw)?;
    Ok(transcribe(&profile))
}

/// Transcribe every reading of one character and merge tone variants.
pub fn transcribe_all(profiles: &[SyllableProfile]) -> String {
    let transcriptions: Vec<String> = profiles.iter().map(transcribe).collect();
    abbreviate(&transcriptions)
}

pub fn transcribe_parts(profile: &SyllableProfile) -> TranscriptionParts {
    let _span = debug_span!("transcribe", profile = %profile).entered();

    let raw = derive_rhyme(profile);
    let entering = match profile.tone {
        Tone::入 => entering_coda(raw),
        _ => None,
    };
    let coda_mutated = entering.is_some();
    let rhyme = entering.unwrap_or_else(|| raw.to_string());

    let (initial, adjustment) = adjust_initial(profile, &rhyme);
    let parts = TranscriptionParts {
        initial,
        rhyme,
        tone_mark: tone_mark(profile.tone),
        adjustment,
        coda_mutated,
    };
    debug!(
        raw_rhyme = raw,
        coda_mutated,
        adjustment = ?parts.adjustment,
        result = %parts,
    );
    parts
}

/// Entering-tone coda: m→p, n→t, ng→k. `None` when the rhyme has no nasal coda.
pub fn entering_coda(rhyme: &str) -> Option<String> {
    if let Some(stem) = rhyme.strip_suffix('m') {
        Some(format!("{stem}p"))
    } else if let Some(stem) = rhyme.strip_suffix('n') {
        Some(format!("{stem}t"))
    } else {
        rhyme.strip_suffix("ng").map(|stem| format!("{stem}k"))
    }
}

fn adjust_initial(
    profile: &SyllableProfile,
    rhyme: &str,
) -> (String, Option<InitialAdjustment>) {
    let base = romanize_initial(profile.initial);

    let loses_retroflex = profile.rhyme == Rhyme::臻
        || profile.row == Some(Row::二)
        || profile.rhyme == Rhyme::庚;
    if profile.in_any(&[InitialGroup::莊]) && loses_retroflex {
        return (
            strip_retroflex(base),
            Some(InitialAdjustment::StrippedRetroflex),
        );
    }

    if profile.in_any(&[InitialGroup::端]) && matches!(profile.row, Some(Row::二 | Row::三)) {
        return (format!("{base}h"), Some(InitialAdjustment::AppendedH));
    }

    if profile.initial == Initial::以 && rhyme.starts_with(&['y', 'ŷ', 'ẁ'][..]) {
        return (String::new(), Some(InitialAdjustment::AbsorbedIntoGlide));
    }

    (base.to_string(), None)
}
