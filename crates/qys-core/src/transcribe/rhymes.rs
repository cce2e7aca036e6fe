//! Rhyme derivation table.
//!
//! Each rhyme cycle head maps to a [`RhymeRule`]: either a fixed spelling or
//! a function of the whole profile. Derived rules branch on rounding, row,
//! the initial's series and the front-variant predicate.

use crate::categories::InitialGroup::{幫 as LABIAL, 章 as PALATAL, 莊 as RETROFLEX};
use crate::categories::{Initial, InitialGroup, Rhyme, Row};
use crate::profile::SyllableProfile;

#[derive(Clone, Copy)]
pub enum RhymeRule {
    Fixed(&'static str),
    Derived(fn(&SyllableProfile) -> &'static str),
}

impl RhymeRule {
    pub fn apply(self, profile: &SyllableProfile) -> &'static str {
        match self {
            RhymeRule::Fixed(s) => s,
            RhymeRule::Derived(f) => f(profile),
        }
    }

    pub fn is_fixed(self) -> bool {
        matches!(self, RhymeRule::Fixed(_))
    }
}

impl std::fmt::Debug for RhymeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RhymeRule::Fixed(s) => f.debug_tuple("Fixed").field(s).finish(),
            RhymeRule::Derived(_) => f.write_str("Derived"),
        }
    }
}

/// Chongniu class A under a labial, velar or laryngeal initial, or any 以
/// syllable. Selects the front (ŷ/ẁ) spelling of the chongniu rhymes.
pub fn takes_front_variant(p: &SyllableProfile) -> bool {
    (p.chongniu_a && p.in_any(&[InitialGroup::幫, InitialGroup::見, InitialGroup::影]))
        || p.initial == Initial::以
}

fn by_rounding(p: &SyllableProfile, closed: &'static str, open: &'static str) -> &'static str {
    if p.rounding {
        closed
    } else {
        open
    }
}

fn by_front(p: &SyllableProfile, front: &'static str, back: &'static str) -> &'static str {
    if takes_front_variant(p) {
        front
    } else {
        back
    }
}

/// Four-way chongniu spelling: `[closed front, closed back, open front, open back]`.
fn chongniu(p: &SyllableProfile, spellings: [&'static str; 4]) -> &'static str {
    let [closed_front, closed_back, open_front, open_back] = spellings;
    if p.rounding {
        by_front(p, closed_front, closed_back)
    } else {
        by_front(p, open_front, open_back)
    }
}

fn is_row_three(p: &SyllableProfile) -> bool {
    p.row == Some(Row::三)
}

pub fn rule_for(rhyme: Rhyme) -> RhymeRule {
    use RhymeRule::{Derived, Fixed};
    use Rhyme::*;

    match rhyme {
        東 => Derived(|p| {
            if !is_row_three(p) {
                "ung"
            } else if p.in_any(&[LABIAL]) {
                "ūng"
            } else if p.in_any(&[RETROFLEX]) {
                "ung"
            } else {
                "yung"
            }
        }),
        冬 => Fixed("ong"),
        鍾 => Derived(|p| {
            if p.in_any(&[LABIAL, RETROFLEX, PALATAL]) {
                "ŏng"
            } else {
                "yong"
            }
        }),
        江 => Fixed("ăung"),

        支 => Derived(|p| chongniu(p, ["ẁe", "ywe", "ŷe", "ye"])),
        脂 => Derived(|p| chongniu(p, ["ẁi", "wi", "ŷi", "i"])),
        之 => Fixed("ï"),
        微 => Derived(|p| by_rounding(p, "wĭ", "ĭ")),

        魚 => Fixed("yo"),
        虞 => Derived(|p| if p.in_any(&[LABIAL]) { "u" } else { "yu" }),
        模 => Fixed("o"),
        齊 => Derived(|p| by_rounding(p, "wēi", "ēi")),

        祭 => Derived(|p| chongniu(p, ["ẁei", "ywei", "ŷei", "yei"])),
        泰 => Derived(|p| by_rounding(p, "wai", "ai")),
        佳 => Derived(|p| by_rounding(p, "wăe", "ăe")),
        皆 => Derived(|p| by_rounding(p, "wĕi", "ĕi")),
        夬 => Derived(|p| by_rounding(p, "wăi", "ăi")),
        灰 => Fixed("woi"),
        咍 => Fixed("oi"),
        廢 => Derived(|p| by_rounding(p, "ywai", "yai")),

        真 => Derived(|p| chongniu(p, ["ẁin", "win", "ŷin", "in"])),
        臻 => Fixed("in"),
        文 => Derived(|p| if p.in_any(&[LABIAL]) { "un" } else { "yun" }),
        殷 => Fixed("ïn"),
        元 => Derived(|p| by_rounding(p, "ywon", "yon")),
        魂 => Derived(|p| if p.in_any(&[LABIAL]) { "on" } else { "won" }),
        痕 => Fixed("ŏn"),
        寒 => Fixed("an"),
        桓 => Derived(|p| if p.in_any(&[LABIAL]) { "an" } else { "wan" }),

        刪 => Derived(|p| by_rounding(p, "wăn", "ăn")),
        山 => Derived(|p| by_rounding(p, "wĕn", "ĕn")),
        先 => Derived(|p| by_rounding(p, "wēn", "ēn")),
        仙 => Derived(|p| chongniu(p, ["ẁen", "ywen", "ŷen", "yen"])),

        蕭 => Fixed("ēu"),
        宵 => Derived(|p| by_front(p, "ŷeu", "yeu")),
        肴 => Fixed("ău"),
        豪 => Fixed("au"),

        歌 => Derived(|p| if is_row_three(p) { "ya" } else { "a" }),
        戈 => Derived(|p| {
            if is_row_three(p) {
                by_rounding(p, "ywa", "ya")
            } else if p.in_any(&[LABIAL]) {
                "a"
            } else {
                "wa"
            }
        }),
        麻 => Derived(|p| {
            if is_row_three(p) {
                "yă"
            } else {
                by_rounding(p, "wă", "ă")
            }
        }),

        陽 => Derived(|p| by_rounding(p, "ywang", "yang")),
        唐 => Derived(|p| by_rounding(p, "wang", "ang")),

        庚 => Derived(|p| {
            if is_row_three(p) {
                by_rounding(p, "ywăng", "yăng")
            } else {
                by_rounding(p, "wăng", "ăng")
            }
        }),
        耕 => Derived(|p| by_rounding(p, "wĕng", "ĕng")),
        清 => Derived(|p| chongniu(p, ["ẁeng", "yweng", "ŷeng", "yeng"])),
        青 => Derived(|p| by_rounding(p, "wēng", "ēng")),

        蒸 => Derived(|p| {
            if p.in_any(&[RETROFLEX]) {
                "ïng"
            } else if p.rounding {
                "wing"
            } else {
                by_front(p, "ŷing", "ing")
            }
        }),
        登 => Derived(|p| by_rounding(p, "wǒng", "ǒng")),

        尤 => Derived(|p| if p.in_any(&[LABIAL]) { "ū" } else { "yū" }),
        侯 => Fixed("ou"),
        幽 => Derived(|p| by_front(p, "ŷiu", "yiu")),

        侵 => Derived(|p| by_front(p, "ŷim", "im")),

        覃 => Fixed("om"),
        談 => Fixed("am"),
        鹽 => Derived(|p| by_front(p, "ŷem", "yem")),
        添 => Fixed("ēm"),
        咸 => Fixed("ĕm"),
        銜 => Fixed("ăm"),
        嚴 => Fixed("yam"),
        凡 => Fixed("ywam"),
    }
}

/// The raw rhyme spelling for `profile`, before any entering-tone change.
pub fn derive_rhyme(profile: &SyllableProfile) -> &'static str {
    rule_for(profile.rhyme).apply(profile)
}
