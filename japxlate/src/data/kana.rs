/*!
The core syllable inventory and the combo (digraph) inventory.

## Ordering
Romaji to kana conversion replaces romajis globally in table order, so the
core table is laid out "biggest first": no reachable later romaji contains an
earlier one (e.g. `tsu` precedes `su`, `shi` precedes `hi`).
A later exact duplicate is unreachable and exempt, since the earlier entry
already consumes it (small `ゃ` after `や`, small `ぁ` after `あ`).

Combos are always matched before the core table, since the first character of
a combo is itself a valid core syllable.
*/

/// What a core syllable is used for, beyond plain transliteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyllableKind {
    Regular,
    /// Small vowel glides and small kana: `ぁぃぅぇぉ ゃゅょ ゎ ゕゖ`.
    Small,
    /// Historical `ゐ` and `ゑ`.
    Obsolete,
    /// `ん`
    SyllabicN,
    /// The small tsu gemination marker `っ`.
    Sokuon,
    /// `ゔ`, rarely written in hiragana.
    Extended,
}

/// One core inventory record. The three scripts at the same index denote the same syllable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Syllable {
    pub hiragana: char,
    pub katakana: char,
    /// `None` for kana without a standard romanization.
    ///
    /// The sokuon maps to [`SOKUON_PLACEHOLDER`] and is resolved by the rewrite pass.
    pub romaji: Option<&'static str>,
    pub kind: SyllableKind,
}

/// One combo inventory record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Combo {
    /// Always two code points.
    pub katakana: &'static str,
    /// Always 2~3 lowercase ASCII letters.
    pub romaji: &'static str,
}

/// Left in romanized text until the gemination rewrite.
pub const SOKUON_PLACEHOLDER: &str = "ッ";
pub const SOKUON_CHAR: char = 'ッ';
pub const LONG_VOWEL_MARK: char = 'ー';

const fn reg(hiragana: char, katakana: char, romaji: &'static str) -> Syllable {
    Syllable {
        hiragana,
        katakana,
        romaji: Some(romaji),
        kind: SyllableKind::Regular,
    }
}

const fn kind(
    hiragana: char,
    katakana: char,
    romaji: Option<&'static str>,
    kind: SyllableKind,
) -> Syllable {
    Syllable {
        hiragana,
        katakana,
        romaji,
        kind,
    }
}

const fn small(hiragana: char, katakana: char, romaji: &'static str) -> Syllable {
    kind(hiragana, katakana, Some(romaji), SyllableKind::Small)
}

const fn combo(katakana: &'static str, romaji: &'static str) -> Combo {
    Combo { katakana, romaji }
}

use SyllableKind::*;

#[rustfmt::skip]
pub static SYLLABLES: &[Syllable] = &[
    reg('が', 'ガ', "ga"), reg('ぎ', 'ギ', "gi"), reg('ぐ', 'グ', "gu"), reg('げ', 'ゲ', "ge"), reg('ご', 'ゴ', "go"),
    reg('ざ', 'ザ', "za"), reg('じ', 'ジ', "ji"), reg('ず', 'ズ', "zu"), reg('ぜ', 'ゼ', "ze"), reg('ぞ', 'ゾ', "zo"),
    reg('だ', 'ダ', "da"), reg('ぢ', 'ヂ', "di"), reg('づ', 'ヅ', "du"), reg('で', 'デ', "de"), reg('ど', 'ド', "do"),
    reg('ば', 'バ', "ba"), reg('び', 'ビ', "bi"), reg('ぶ', 'ブ', "bu"), reg('べ', 'ベ', "be"), reg('ぼ', 'ボ', "bo"),
    reg('ぱ', 'パ', "pa"), reg('ぴ', 'ピ', "pi"), reg('ぷ', 'プ', "pu"), reg('ぺ', 'ペ', "pe"), reg('ぽ', 'ポ', "po"),
    kind('ゔ', 'ヴ', Some("vu"), Extended),
    reg('か', 'カ', "ka"), reg('き', 'キ', "ki"), reg('く', 'ク', "ku"), reg('け', 'ケ', "ke"), reg('こ', 'コ', "ko"),
    // Before the sa row: `tsu` contains `su`
    reg('た', 'タ', "ta"), reg('ち', 'チ', "chi"), reg('つ', 'ツ', "tsu"), reg('て', 'テ', "te"), reg('と', 'ト', "to"),
    reg('さ', 'サ', "sa"), reg('し', 'シ', "shi"), reg('す', 'ス', "su"), reg('せ', 'セ', "se"), reg('そ', 'ソ', "so"),
    reg('な', 'ナ', "na"), reg('に', 'ニ', "ni"), reg('ぬ', 'ヌ', "nu"), reg('ね', 'ネ', "ne"), reg('の', 'ノ', "no"),
    reg('は', 'ハ', "ha"), reg('ひ', 'ヒ', "hi"), reg('ふ', 'フ', "fu"), reg('へ', 'ヘ', "he"), reg('ほ', 'ホ', "ho"),
    reg('ま', 'マ', "ma"), reg('み', 'ミ', "mi"), reg('む', 'ム', "mu"), reg('め', 'メ', "me"), reg('も', 'モ', "mo"),
    reg('や', 'ヤ', "ya"),                        reg('ゆ', 'ユ', "yu"),                        reg('よ', 'ヨ', "yo"),
    reg('ら', 'ラ', "ra"), reg('り', 'リ', "ri"), reg('る', 'ル', "ru"), reg('れ', 'レ', "re"), reg('ろ', 'ロ', "ro"),
    reg('わ', 'ワ', "wa"), kind('ゐ', 'ヰ', Some("wi"), Obsolete), kind('ゑ', 'ヱ', Some("we"), Obsolete), reg('を', 'ヲ', "wo"),
    kind('ん', 'ン', Some("n"), SyllabicN),
    kind('っ', 'ッ', Some(SOKUON_PLACEHOLDER), Sokuon),
    reg('あ', 'ア', "a"), reg('い', 'イ', "i"), reg('う', 'ウ', "u"), reg('え', 'エ', "e"), reg('お', 'オ', "o"),
    small('ゃ', 'ャ', "ya"),                          small('ゅ', 'ュ', "yu"),                          small('ょ', 'ョ', "yo"),
    small('ぁ', 'ァ', "a"), small('ぃ', 'ィ', "i"), small('ぅ', 'ゥ', "u"), small('ぇ', 'ェ', "e"), small('ぉ', 'ォ', "o"),
    small('ゎ', 'ヮ', "wa"),
    kind('ゕ', 'ヵ', None, Small), kind('ゖ', 'ヶ', None, Small),
];

#[rustfmt::skip]
pub static COMBOS: &[Combo] = &[
    combo("チャ", "cha"), combo("チュ", "chu"), combo("チェ", "che"), combo("チョ", "cho"),
    combo("シャ", "sha"), combo("シュ", "shu"), combo("シェ", "she"), combo("ショ", "sho"),
    combo("ジャ", "ja"),  combo("ジュ", "ju"),  combo("ジェ", "je"),  combo("ジョ", "jo"),
    combo("キャ", "kya"), combo("キュ", "kyu"),                       combo("キョ", "kyo"),
    combo("ギャ", "gya"), combo("ギュ", "gyu"),                       combo("ギョ", "gyo"),
    combo("リャ", "rya"), combo("リュ", "ryu"),                       combo("リョ", "ryo"),
    combo("ミャ", "mya"), combo("ミュ", "myu"),                       combo("ミョ", "myo"),
    combo("ヒャ", "hya"), combo("ヒュ", "hyu"),                       combo("ヒョ", "hyo"),
    combo("ニャ", "nya"), combo("ニュ", "nyu"),                       combo("ニョ", "nyo"),
    combo("ビャ", "bya"), combo("ビュ", "byu"),                       combo("ビョ", "byo"),
    combo("ピャ", "pya"), combo("ピュ", "pyu"),                       combo("ピョ", "pyo"),
    combo("ヂャ", "dya"), combo("ヂュ", "dyu"),                       combo("ヂョ", "dyo"),
    combo("ファ", "fa"),  combo("フィ", "fi"),  combo("フェ", "fe"),  combo("フォ", "fo"),
                          combo("ウィ", "wi"),  combo("ウェ", "we"),  combo("ウォ", "wo"),
    combo("ヴァ", "va"),  combo("ヴィ", "vi"),  combo("ヴェ", "ve"),  combo("ヴォ", "vo"),
                          combo("ティ", "ti"),
                          combo("ディ", "di"),
];

/// `(katakana, romaji)` of every combo, in table order.
pub fn combo_katakana_romaji_pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    COMBOS.iter().map(|c| (c.katakana, c.romaji))
}

/// `(romaji, katakana)` of every core syllable that has a romaji, in table order.
pub fn core_romaji_katakana_pairs() -> impl Iterator<Item = (&'static str, char)> {
    SYLLABLES
        .iter()
        .filter_map(|s| s.romaji.map(|romaji| (romaji, s.katakana)))
}

/// Find the core record of a hiragana or katakana character.
pub fn syllable(c: char) -> Option<&'static Syllable> {
    SYLLABLES
        .iter()
        .find(|s| s.hiragana == c || s.katakana == c)
}
