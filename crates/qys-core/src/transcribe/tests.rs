use proptest::prelude::*;

use super::*;
use crate::marks::{DEPARTING_MARK, RISING_MARK};

fn t(descriptor: &str) -> String {
    let profile: SyllableProfile = descriptor.parse().unwrap();
    transcribe(&profile)
}

/// Every representable profile, rows included (`None` too).
fn all_profiles() -> impl Iterator<Item = SyllableProfile> {
    let rows = [None, Some(Row::一), Some(Row::二), Some(Row::三), Some(Row::四)];
    Initial::ALL.iter().flat_map(move |&initial| {
        Rhyme::ALL.iter().flat_map(move |&rhyme| {
            Tone::ALL.iter().flat_map(move |&tone| {
                rows.into_iter().flat_map(move |row| {
                    [false, true].into_iter().flat_map(move |rounding| {
                        [false, true].into_iter().map(move |chongniu_a| SyllableProfile {
                            rounding,
                            initial,
                            tone,
                            chongniu_a,
                            rhyme,
                            row,
                        })
                    })
                })
            })
        })
    })
}

// ---------------------------------------------------------------------------
// Concrete spellings
// ---------------------------------------------------------------------------

#[test]
fn test_labial_dong_entering() {
    let p = SyllableProfile::new(Initial::幫, Rhyme::東, Tone::入).with_row(Row::三);
    assert_eq!(transcribe(&p), "pūk");
}

#[test]
fn test_sample_spellings() {
    assert_eq!(t("端一東平"), "tung");
    assert_eq!(t("見開三真平"), "kin");
    assert_eq!(t("見開三真上"), "kinˬ");
    assert_eq!(t("見開三A仙上"), "kŷenˬ");
    assert_eq!(t("見合三A仙平"), "kẁen");
    assert_eq!(t("匣合一桓去"), "ghwanˎ");
    assert_eq!(t("影開一寒平"), "ʼan");
    assert_eq!(t("云合三陽平"), "ywang");
    assert_eq!(t("日開三真入"), "nyit");
    assert_eq!(t("明開三A支平"), "mŷe");
    assert_eq!(t("心開四先去"), "sēnˎ");
}

#[test]
fn test_entering_codas() {
    assert_eq!(t("見開一談入"), "kap");
    assert_eq!(t("精開三仙入"), "tsyet");
    assert_eq!(t("端開一唐入"), "tak");
    // Open rhymes have no coda to change.
    assert_eq!(t("見開一歌入"), "ka");
}

#[test]
fn test_entering_coda_rule() {
    assert_eq!(entering_coda("am").as_deref(), Some("ap"));
    assert_eq!(entering_coda("ŷen").as_deref(), Some("ŷet"));
    assert_eq!(entering_coda("ūng").as_deref(), Some("ūk"));
    assert_eq!(entering_coda("ng").as_deref(), Some("k"));
    assert_eq!(entering_coda("au"), None);
    assert_eq!(entering_coda(""), None);
}

#[test]
fn test_zhuang_series_loses_retroflex() {
    assert_eq!(t("莊二庚平"), "tsăng");
    assert_eq!(t("崇開臻平"), "dzin");
    assert_eq!(t("生開二山平"), "sĕn");
    // Third row, other rhyme: the retroflex stays.
    assert_eq!(t("生開三蒸入"), "ṣïk");
    assert_eq!(t("初開三魚平"), "tṣʻyo");
}

#[test]
fn test_zhuang_with_geng_never_retroflex() {
    let zhuang: Vec<Initial> = Initial::ALL
        .iter()
        .copied()
        .filter(|i| i.group() == Some(InitialGroup::莊))
        .collect();
    assert_eq!(zhuang.len(), 5);
    for p in all_profiles().filter(|p| zhuang.contains(&p.initial) && p.rhyme == Rhyme::庚) {
        let out = transcribe(&p);
        assert!(!out.contains('ṣ') && !out.contains('ẓ'), "{p} => {out}");
        assert_eq!(
            transcribe_parts(&p).adjustment,
            Some(InitialAdjustment::StrippedRetroflex)
        );
    }
}

#[test]
fn test_dental_series_in_rows_two_and_three() {
    assert_eq!(t("定開三脂去"), "dhiˎ");
    assert_eq!(t("端開二麻平"), "thă");
    assert_eq!(t("端開四齊平"), "tēi");
    // The retroflex stop series is spelled directly.
    assert_eq!(t("知開三脂平"), "ṭi");
}

#[test]
fn test_yi_initial_absorbed_into_glide() {
    assert_eq!(t("以開三陽平"), "yang");
    assert_eq!(t("以開三支平"), "ŷe");
    assert_eq!(t("以合三仙平"), "ẁen");
    assert_eq!(t("以開三尤去"), "yūˎ");
    let parts = transcribe_parts(&"以開三陽平".parse().unwrap());
    assert_eq!(parts.initial, "");
    assert_eq!(parts.adjustment, Some(InitialAdjustment::AbsorbedIntoGlide));
}

#[test]
fn test_yi_initial_kept_before_vowel() {
    assert_eq!(t("以開三之平"), "yï");
}

#[test]
fn test_yi_absorption_holds_for_every_glide_rhyme() {
    for p in all_profiles().filter(|p| p.initial == Initial::以) {
        let out = transcribe(&p);
        let rhyme = transcribe_parts(&p).rhyme;
        if rhyme.starts_with(&['y', 'ŷ', 'ẁ'][..]) {
            assert!(out.starts_with(&rhyme), "{p} => {out}");
        } else {
            assert!(out.starts_with('y'), "{p} => {out}");
        }
    }
}

#[test]
fn test_parts_display_matches_transcribe() {
    let p: SyllableProfile = "見合三A仙去".parse().unwrap();
    let parts = transcribe_parts(&p);
    assert_eq!(parts.initial, "k");
    assert_eq!(parts.rhyme, "ẁen");
    assert_eq!(parts.tone_mark, "ˎ");
    assert_eq!(parts.adjustment, None);
    assert!(!parts.coda_mutated);
    assert_eq!(parts.to_string(), transcribe(&p));
}

#[test]
fn test_transcribe_raw() {
    let raw = RawSyllableProfile {
        initial: "幫".into(),
        tone: "入".into(),
        rhyme: "東".into(),
        row: Some("三".into()),
        ..Default::default()
    };
    assert_eq!(transcribe_raw(raw), Ok("pūk".to_string()));
}

#[test]
fn test_transcribe_raw_unrecognized() {
    let raw = RawSyllableProfile {
        initial: "幫".into(),
        tone: "入".into(),
        rhyme: "諄".into(),
        ..Default::default()
    };
    let err = transcribe_raw(raw).unwrap_err();
    assert_eq!(
        err,
        TranscribeError::UnrecognizedCategory(UnrecognizedCategory::new("rhyme", "諄"))
    );
    assert!(err.to_string().contains("諄"));
}

#[test]
fn test_transcribe_all_merges_tones() {
    let profiles: Vec<SyllableProfile> = ["見開三真平", "見開三真上", "見開三A真去"]
        .iter()
        .map(|d| d.parse().unwrap())
        .collect();
    assert_eq!(transcribe_all(&profiles), "kin₍ˬ₎ kŷinˎ");
    assert_eq!(transcribe_all(&[]), "");
}

// ---------------------------------------------------------------------------
// Exhaustive properties
// ---------------------------------------------------------------------------

#[test]
fn test_every_profile_transcribes() {
    let mut count = 0;
    for p in all_profiles() {
        let out = transcribe(&p);
        assert!(!out.is_empty(), "{p}");
        count += 1;
    }
    assert_eq!(count, 38 * 60 * 4 * 5 * 2 * 2);
}

#[test]
fn test_every_entering_nasal_becomes_stop() {
    for p in all_profiles().filter(|p| p.tone == Tone::入) {
        let raw = derive_rhyme(&p);
        let parts = transcribe_parts(&p);
        let expected_stop = if raw.ends_with('m') {
            Some('p')
        } else if raw.ends_with('n') {
            Some('t')
        } else if raw.ends_with("ng") {
            Some('k')
        } else {
            None
        };
        match expected_stop {
            Some(stop) => {
                assert!(parts.rhyme.ends_with(stop), "{p} => {}", parts.rhyme);
                assert!(!parts.rhyme.ends_with('m'), "{p}");
                assert!(!parts.rhyme.ends_with('n'), "{p}");
                assert!(!parts.rhyme.ends_with("ng"), "{p}");
                assert!(parts.coda_mutated);
            }
            None => {
                assert_eq!(parts.rhyme, raw, "{p}");
                assert!(!parts.coda_mutated);
            }
        }
    }
}

#[test]
fn test_every_tone_suffix() {
    for p in all_profiles() {
        let out = transcribe(&p);
        assert_eq!(out.ends_with(RISING_MARK), p.tone == Tone::上, "{p} => {out}");
        assert_eq!(out.ends_with(DEPARTING_MARK), p.tone == Tone::去, "{p} => {out}");
    }
}

#[test]
fn test_every_single_transcription_abbreviates_to_itself() {
    for p in all_profiles() {
        let out = transcribe(&p);
        assert_eq!(abbreviate(&[out.as_str()]), out);
    }
}

// ---------------------------------------------------------------------------
// Randomized properties
// ---------------------------------------------------------------------------

fn arb_profile() -> impl Strategy<Value = SyllableProfile> {
    (
        any::<bool>(),
        prop::sample::select(Initial::ALL),
        prop::sample::select(Tone::ALL),
        any::<bool>(),
        prop::sample::select(Rhyme::ALL),
        prop::option::of(prop::sample::select(Row::ALL)),
    )
        .prop_map(
            |(rounding, initial, tone, chongniu_a, rhyme, row)| SyllableProfile {
                rounding,
                initial,
                tone,
                chongniu_a,
                rhyme,
                row,
            },
        )
}

proptest! {
    #[test]
    fn prop_tones_of_one_syllable_share_a_stem(p in arb_profile()) {
        // 平, 上 and 去 readings of the same syllable differ only in the mark.
        let level = transcribe(&SyllableProfile { tone: Tone::平, ..p });
        let rising = transcribe(&SyllableProfile { tone: Tone::上, ..p });
        let departing = transcribe(&SyllableProfile { tone: Tone::去, ..p });
        prop_assert_eq!(&rising, &format!("{level}ˬ"));
        prop_assert_eq!(&departing, &format!("{level}ˎ"));
        prop_assert_eq!(
            abbreviate(&[level.as_str(), rising.as_str(), departing.as_str()]),
            format!("{level}₍ˬˎ₎")
        );
    }

    #[test]
    fn prop_descriptor_round_trip_preserves_transcription(p in arb_profile()) {
        let reparsed: SyllableProfile = p.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, p);
        prop_assert_eq!(transcribe(&reparsed), transcribe(&p));
    }

    #[test]
    fn prop_raw_profile_agrees(p in arb_profile()) {
        let raw = RawSyllableProfile::from(p);
        prop_assert_eq!(transcribe_raw(raw), Ok(transcribe(&p)));
    }
}
