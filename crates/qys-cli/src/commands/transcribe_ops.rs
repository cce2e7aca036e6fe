use serde::Serialize;

use qys_core::abbreviate::{abbreviate_with, AbbreviationStyle};
use qys_core::settings::settings;
use qys_core::transcribe::{derive_rhyme, rule_for, transcribe_parts, InitialAdjustment};
use qys_core::SyllableProfile;

use crate::die;

#[derive(Debug, Serialize)]
struct TranscriptionRecord<'a> {
    descriptor: &'a str,
    transcription: String,
}

fn parse_descriptor(descriptor: &str) -> SyllableProfile {
    die!(
        descriptor.parse::<SyllableProfile>(),
        "Error parsing descriptor {descriptor:?}: {}"
    )
}

pub fn transcribe_cmd(descriptors: &[String], json: bool) {
    for descriptor in descriptors {
        let profile = parse_descriptor(descriptor);
        let transcription = qys_core::transcribe(&profile);
        if json {
            let record = TranscriptionRecord {
                descriptor,
                transcription,
            };
            let line = die!(serde_json::to_string(&record), "Error encoding JSON: {}");
            println!("{line}");
        } else {
            println!("{transcription}");
        }
    }
}

/// Render the derivation of one profile, one step per line.
pub fn explain(profile: &SyllableProfile) -> String {
    let parts = transcribe_parts(profile);
    let rule = if rule_for(profile.rhyme).is_fixed() {
        "fixed"
    } else {
        "derived"
    };
    let coda = if parts.coda_mutated {
        "entering tone, nasal coda became a stop"
    } else {
        "unchanged"
    };
    let adjustment = match parts.adjustment {
        None => "none",
        Some(InitialAdjustment::StrippedRetroflex) => "retroflex sibilant made plain",
        Some(InitialAdjustment::AppendedH) => "h appended to dental",
        Some(InitialAdjustment::AbsorbedIntoGlide) => "以 absorbed into glide",
    };

    let mut lines = vec![
        format!("profile:    {profile}"),
        format!("initial:    {}", parts.initial),
        format!("raw rhyme:  {} ({rule})", derive_rhyme(profile)),
        format!("rhyme:      {}", parts.rhyme),
        format!("coda:       {coda}"),
        format!("adjustment: {adjustment}"),
    ];
    if !parts.tone_mark.is_empty() {
        lines.push(format!("tone mark:  {}", parts.tone_mark));
    }
    lines.push(format!("result:     {parts}"));
    lines.join("\n")
}

pub fn explain_cmd(descriptor: &str) {
    let profile = parse_descriptor(descriptor);
    println!("{}", explain(&profile));
}

pub fn abbreviate_cmd(transcriptions: &[String]) {
    let style = AbbreviationStyle::from(&settings().abbreviation);
    println!("{}", abbreviate_with(transcriptions, &style));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_lists_each_step() {
        let profile: SyllableProfile = "幫三東入".parse().unwrap();
        let text = explain(&profile);
        assert!(text.contains("raw rhyme:  ūng (derived)"));
        assert!(text.contains("rhyme:      ūk"));
        assert!(text.contains("nasal coda became a stop"));
        assert!(text.ends_with("result:     pūk"));
        assert!(!text.contains("tone mark"));
    }

    #[test]
    fn explain_reports_adjustment_and_mark() {
        let profile: SyllableProfile = "以開三陽上".parse().unwrap();
        let text = explain(&profile);
        assert!(text.contains("以 absorbed into glide"));
        assert!(text.contains("tone mark:  ˬ"));
        assert!(text.ends_with("result:     yangˬ"));
    }
}
