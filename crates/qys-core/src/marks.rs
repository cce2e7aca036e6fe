//! Character-level helpers for the transcription notation.

use crate::categories::Tone;

/// Written after a rising-tone (上聲) syllable.
pub const RISING_MARK: char = 'ˬ';
/// Written after a departing-tone (去聲) syllable.
pub const DEPARTING_MARK: char = 'ˎ';

/// Encloses the tone marks of a stem that is also attested untoned.
pub const OPEN_BRACKET: &str = "₍";
pub const CLOSE_BRACKET: &str = "₎";

pub fn is_tone_mark(c: char) -> bool {
    c == RISING_MARK || c == DEPARTING_MARK
}

/// The suffix written for `tone`; empty for 平 and 入.
pub fn tone_mark(tone: Tone) -> &'static str {
    match tone {
        Tone::上 => "ˬ",
        Tone::去 => "ˎ",
        Tone::平 | Tone::入 => "",
    }
}

/// Split a transcription into its toneless stem and trailing tone mark.
///
/// Only the last character is inspected, so a stem may itself be empty
/// (a lone "ˬ" splits into `("", "ˬ")`).
pub fn split_tone_mark(transcription: &str) -> (&str, &str) {
    match transcription.char_indices().next_back() {
        Some((i, c)) if is_tone_mark(c) => transcription.split_at(i),
        _ => (transcription, ""),
    }
}

/// Replace the retroflex sibilants ṣ/ẓ with their plain counterparts.
pub fn strip_retroflex(romanization: &str) -> String {
    romanization
        .chars()
        .map(|c| match c {
            'ṣ' => 's',
            'ẓ' => 'z',
            other => other,
        })
        .collect()
}
