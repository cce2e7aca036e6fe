//! Merge the transcriptions of one character into a compact form.
//!
//! Readings that differ only in tone share a stem, so `kin` and `kinˬ`
//! become `kin₍ˬ₎`: the bracketed marks are optional, the bare stem is
//! attested too. Without an untoned reading the marks are written plainly,
//! `kinˬˎ`.

use tracing::debug;

use crate::marks::{split_tone_mark, CLOSE_BRACKET, OPEN_BRACKET};
use crate::settings::AbbreviationSettings;

/// Glyphs used when rendering merged groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationStyle {
    pub separator: String,
    pub open_bracket: String,
    pub close_bracket: String,
}

impl Default for AbbreviationStyle {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            open_bracket: OPEN_BRACKET.to_string(),
            close_bracket: CLOSE_BRACKET.to_string(),
        }
    }
}

impl From<&AbbreviationSettings> for AbbreviationStyle {
    fn from(s: &AbbreviationSettings) -> Self {
        Self {
            separator: s.separator.clone(),
            open_bracket: s.open_bracket.clone(),
            close_bracket: s.close_bracket.clone(),
        }
    }
}

/// The tone marks seen for one toneless stem, in input order.
///
/// An untoned occurrence records an empty mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemGroup<'a> {
    pub stem: &'a str,
    pub marks: Vec<&'a str>,
}

impl StemGroup<'_> {
    fn render(&self, style: &AbbreviationStyle) -> String {
        if let [only] = self.marks.as_slice() {
            return format!("{}{}", self.stem, only);
        }
        let joined = self.marks.concat();
        if self.marks.contains(&"") {
            format!(
                "{}{}{}{}",
                self.stem, style.open_bracket, joined, style.close_bracket
            )
        } else {
            format!("{}{}", self.stem, joined)
        }
    }
}

/// Group transcriptions by toneless stem, keeping first-seen stem order.
pub fn group_by_stem<S: AsRef<str>>(transcriptions: &[S]) -> Vec<StemGroup<'_>> {
    let mut groups: Vec<StemGroup<'_>> = Vec::new();
    for t in transcriptions {
        let (stem, mark) = split_tone_mark(t.as_ref());
        match groups.iter_mut().find(|g| g.stem == stem) {
            Some(group) => group.marks.push(mark),
            None => groups.push(StemGroup {
                stem,
                marks: vec![mark],
            }),
        }
    }
    groups
}

/// Abbreviate with the default glyphs (`" "`, `"₍"`, `"₎"`).
pub fn abbreviate<S: AsRef<str>>(transcriptions: &[S]) -> String {
    abbreviate_with(transcriptions, &AbbreviationStyle::default())
}

pub fn abbreviate_with<S: AsRef<str>>(transcriptions: &[S], style: &AbbreviationStyle) -> String {
    let groups = group_by_stem(transcriptions);
    debug!(
        input_count = transcriptions.len(),
        group_count = groups.len(),
        "abbreviate"
    );
    groups
        .iter()
        .map(|g| g.render(style))
        .collect::<Vec<_>>()
        .join(&style.separator)
}
