//! Middle Chinese transcriptions for readers of Japanese on'yomi.
//!
//! A [`SyllableProfile`] holds the rime-dictionary categories of one reading.
//! [`transcribe`] turns it into a spelling such as `pūk` or `kŷenˬ`, and
//! [`abbreviate`] merges the spellings of one character that differ only in
//! tone.

pub mod abbreviate;
pub mod categories;
pub mod marks;
pub mod profile;
pub mod settings;
pub mod transcribe;

pub use abbreviate::{abbreviate, abbreviate_with, AbbreviationStyle};
pub use categories::{Initial, InitialGroup, Rhyme, Row, Tone, UnrecognizedCategory};
pub use profile::{DescriptorError, RawSyllableProfile, SyllableProfile};
pub use transcribe::{transcribe, transcribe_all, transcribe_raw, TranscribeError};
