use crate::categories::Initial;

/// Romanization of each initial before any environment adjustment.
///
/// 影 writes the open-onset marker; 云 writes nothing.
pub fn romanize_initial(initial: Initial) -> &'static str {
    use Initial::*;
    match initial {
        幫 => "p",
        滂 => "pʻ",
        並 => "b",
        明 => "m",

        端 => "t",
        透 => "tʻ",
        定 => "d",
        泥 => "n",

        知 => "ṭ",
        徹 => "ṭʻ",
        澄 => "ḍ",
        孃 => "ṇ",

        精 => "ts",
        清 => "tsʻ",
        從 => "dz",
        心 => "s",
        邪 => "z",

        莊 => "tṣ",
        初 => "tṣʻ",
        崇 => "dẓ",
        生 => "ṣ",
        俟 => "ẓ",

        章 => "ch",
        昌 => "chʻ",
        船 => "j",
        書 => "sh",
        常 => "zh",

        見 => "k",
        溪 => "kʻ",
        羣 => "g",
        疑 => "ng",

        影 => "ʼ",
        曉 => "h",
        匣 => "gh",
        云 => "",

        以 => "y",
        來 => "l",
        日 => "ny",
    }
}
