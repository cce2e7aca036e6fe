//! Rime-dictionary categories of a Middle Chinese syllable.
//!
//! Every category is a closed enum whose variants are the traditional hanzi
//! labels, so `Initial::見` reads the way the rime tables print it. Labels
//! round-trip through `Display`/`FromStr` and serialize as the bare hanzi.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A label that names no variant of the expected category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {field} category: {value:?}")]
pub struct UnrecognizedCategory {
    pub field: &'static str,
    pub value: String,
}

impl UnrecognizedCategory {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

macro_rules! hanzi_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($field:literal) {
            $($variant:ident $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($(#[serde(alias = $alias)])* $variant),+
        }

        impl $name {
            /// Every variant, in traditional table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The hanzi label of this category.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            /// Look up a category by its hanzi label or a variant form of it.
            pub fn from_label(label: &str) -> Option<Self> {
                $($(
                    if label == $alias {
                        return Some($name::$variant);
                    }
                )*)+
                Self::ALL.iter().copied().find(|v| v.label() == label)
            }

            /// Look up a category by a single hanzi.
            pub fn from_hanzi(c: char) -> Option<Self> {
                let mut buf = [0u8; 4];
                Self::from_label(c.encode_utf8(&mut buf))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnrecognizedCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s.trim()).ok_or_else(|| UnrecognizedCategory::new($field, s))
            }
        }
    };
}

hanzi_enum! {
    /// The 38 initials (聲母) of the Qieyun system.
    pub enum Initial ("initial") {
        幫, 滂, 並, 明,
        端, 透, 定, 泥,
        知, 徹, 澄, 孃,
        精, 清, 從, 心, 邪,
        莊, 初, 崇, 生, 俟,
        章, 昌, 常, 書, 船,
        見, 溪, 羣 | "群", 疑,
        影, 曉, 匣, 云,
        以, 來, 日,
    }
}

hanzi_enum! {
    /// Series (組) of initials sharing a place of articulation.
    pub enum InitialGroup ("initial group") {
        幫, 端, 知, 精, 莊, 章, 見, 影,
    }
}

hanzi_enum! {
    /// The four tones (聲調).
    pub enum Tone ("tone") {
        平, 上, 去, 入,
    }
}

hanzi_enum! {
    /// Division (等) of a syllable within the rime tables.
    pub enum Row ("row") {
        一, 二, 三, 四,
    }
}

hanzi_enum! {
    /// Rhyme cycle heads (韻). 諄 is folded into 真, distinguished by rounding.
    pub enum Rhyme ("rhyme") {
        東, 冬, 鍾, 江,
        支, 脂, 之, 微,
        魚, 虞, 模, 齊,
        祭, 泰, 佳, 皆, 夬, 灰, 咍, 廢,
        真, 臻, 文, 殷, 元, 魂, 痕, 寒, 桓,
        刪, 山, 先, 仙,
        蕭, 宵, 肴, 豪,
        歌, 戈, 麻,
        陽, 唐,
        庚, 耕, 清, 青,
        蒸, 登,
        尤, 侯, 幽,
        侵,
        覃, 談, 鹽, 添, 咸, 銜, 嚴, 凡,
    }
}

impl Initial {
    /// The series this initial belongs to. 來, 日 and 以 stand alone.
    pub fn group(self) -> Option<InitialGroup> {
        use Initial::*;
        let group = match self {
            幫 | 滂 | 並 | 明 => InitialGroup::幫,
            端 | 透 | 定 | 泥 => InitialGroup::端,
            知 | 徹 | 澄 | 孃 => InitialGroup::知,
            精 | 清 | 從 | 心 | 邪 => InitialGroup::精,
            莊 | 初 | 崇 | 生 | 俟 => InitialGroup::莊,
            章 | 昌 | 常 | 書 | 船 => InitialGroup::章,
            見 | 溪 | 羣 | 疑 => InitialGroup::見,
            影 | 曉 | 匣 | 云 => InitialGroup::影,
            以 | 來 | 日 => return None,
        };
        Some(group)
    }

    /// Whether this initial belongs to any of `groups`.
    pub fn in_any(self, groups: &[InitialGroup]) -> bool {
        self.group().is_some_and(|g| groups.contains(&g))
    }
}

impl Tone {
    /// 上 and 去 carry a written mark; 平 and 入 do not.
    pub fn is_marked(self) -> bool {
        matches!(self, Tone::上 | Tone::去)
    }
}
