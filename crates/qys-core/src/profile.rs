//! The syllable profile consumed by the transcriber.
//!
//! A profile is the normalized rime-dictionary description of one reading:
//! initial, rhyme cycle head, tone, rounding, row and chongniu class. It is
//! usually deserialized from an upstream record, built in code with
//! [`SyllableProfile::new`], or parsed from a compact descriptor such as
//! `見開三A真平`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::categories::{Initial, InitialGroup, Rhyme, Row, Tone, UnrecognizedCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyllableProfile {
    /// Closed mouth (合口).
    #[serde(default)]
    pub rounding: bool,
    pub initial: Initial,
    pub tone: Tone,
    /// Member of chongniu class A (重紐A類).
    #[serde(default, rename = "chongniuA", alias = "chongniu_a")]
    pub chongniu_a: bool,
    #[serde(alias = "rhymeCycleHead")]
    pub rhyme: Rhyme,
    #[serde(default, alias = "division")]
    pub row: Option<Row>,
}

impl SyllableProfile {
    /// An open-mouth, class-B profile with no row.
    pub fn new(initial: Initial, rhyme: Rhyme, tone: Tone) -> Self {
        Self {
            rounding: false,
            initial,
            tone,
            chongniu_a: false,
            rhyme,
            row: None,
        }
    }

    pub fn closed(mut self) -> Self {
        self.rounding = true;
        self
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.row = Some(row);
        self
    }

    pub fn chongniu_a(mut self) -> Self {
        self.chongniu_a = true;
        self
    }

    pub fn group(&self) -> Option<InitialGroup> {
        self.initial.group()
    }

    pub fn in_any(&self, groups: &[InitialGroup]) -> bool {
        self.initial.in_any(groups)
    }
}

/// A profile whose categories are still plain labels, as stored upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawSyllableProfile {
    #[serde(default)]
    pub rounding: bool,
    pub initial: String,
    pub tone: String,
    #[serde(default, rename = "chongniuA", alias = "chongniu_a")]
    pub chongniu_a: bool,
    #[serde(alias = "rhymeCycleHead")]
    pub rhyme: String,
    #[serde(default, alias = "division")]
    pub row: Option<String>,
}

impl TryFrom<RawSyllableProfile> for SyllableProfile {
    type Error = UnrecognizedCategory;

    fn try_from(raw: RawSyllableProfile) -> Result<Self, Self::Error> {
        let row = match raw.row.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(label) => Some(label.parse::<Row>()?),
        };
        Ok(Self {
            rounding: raw.rounding,
            initial: raw.initial.parse()?,
            tone: raw.tone.parse()?,
            chongniu_a: raw.chongniu_a,
            rhyme: raw.rhyme.parse()?,
            row,
        })
    }
}

impl From<SyllableProfile> for RawSyllableProfile {
    fn from(profile: SyllableProfile) -> Self {
        Self {
            rounding: profile.rounding,
            initial: profile.initial.to_string(),
            tone: profile.tone.to_string(),
            chongniu_a: profile.chongniu_a,
            rhyme: profile.rhyme.to_string(),
            row: profile.row.map(|r| r.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("empty descriptor")]
    Empty,
    #[error(transparent)]
    UnrecognizedCategory(#[from] UnrecognizedCategory),
    #[error("descriptor is missing its {0}")]
    Missing(&'static str),
    #[error("unexpected trailing text: {0:?}")]
    Trailing(String),
}

/// Parses `<initial><開|合>?<row>?<A|B>?<rhyme><tone>`, e.g. `幫三東入`.
impl FromStr for SyllableProfile {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars().peekable();

        let first = chars.next().ok_or(DescriptorError::Empty)?;
        let initial = Initial::from_hanzi(first)
            .ok_or_else(|| UnrecognizedCategory::new("initial", first.to_string()))?;

        let rounding = match chars.peek() {
            Some('開') => {
                chars.next();
                false
            }
            Some('合') => {
                chars.next();
                true
            }
            _ => false,
        };

        let row = chars.peek().copied().and_then(Row::from_hanzi);
        if row.is_some() {
            chars.next();
        }

        let chongniu_a = match chars.peek() {
            Some('A') => {
                chars.next();
                true
            }
            Some('B') => {
                chars.next();
                false
            }
            _ => false,
        };

        let c = chars.next().ok_or(DescriptorError::Missing("rhyme"))?;
        let rhyme =
            Rhyme::from_hanzi(c).ok_or_else(|| UnrecognizedCategory::new("rhyme", c.to_string()))?;

        let c = chars.next().ok_or(DescriptorError::Missing("tone"))?;
        let tone =
            Tone::from_hanzi(c).ok_or_else(|| UnrecognizedCategory::new("tone", c.to_string()))?;

        let rest: String = chars.collect();
        if !rest.is_empty() {
            return Err(DescriptorError::Trailing(rest));
        }

        Ok(Self {
            rounding,
            initial,
            tone,
            chongniu_a,
            rhyme,
            row,
        })
    }
}

impl fmt::Display for SyllableProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial)?;
        f.write_str(if self.rounding { "合" } else { "開" })?;
        if let Some(row) = self.row {
            write!(f, "{row}")?;
        }
        if self.chongniu_a {
            f.write_str("A")?;
        }
        write!(f, "{}{}", self.rhyme, self.tone)
    }
}
