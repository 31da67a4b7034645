use core::fmt;

use rand::Rng;

use crate::{
    Transliterator,
    data::kana::{SYLLABLES, Syllable, SyllableKind},
};

/// The kana script a practice syllable is shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    pub fn name(self) -> &'static str {
        match self {
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A syllable to practice handwriting with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PracticeSyllable {
    pub character: char,
    pub romaji: String,
    /// Which script `character` is in.
    ///
    /// Serialized as `"script"` with the value `"hiragana"` or `"katakana"`,
    /// the same string [`Script::name()`] returns.
    pub script: Script,
}

/// Syllables worth practicing: no small kana, obsolete kana, `ん` or `っ`.
pub(crate) fn practice_syllables() -> Vec<&'static Syllable> {
    SYLLABLES
        .iter()
        .filter(|s| s.kind == SyllableKind::Regular)
        .collect()
}

impl Transliterator {
    /// Pick a random syllable for handwriting practice.
    ///
    /// The script is hiragana or katakana with equal chance,
    /// and the syllable is uniform over the practice set.
    pub fn random_practice_syllable(&self) -> PracticeSyllable {
        self.random_practice_syllable_with(&mut rand::rng())
    }

    /// [`random_practice_syllable()`](Self::random_practice_syllable) with the given RNG.
    ///
    /// ## Example
    /// ```
    /// use japxlate::Transliterator;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let t = Transliterator::default();
    /// let a = t.random_practice_syllable_with(&mut StdRng::seed_from_u64(7));
    /// let b = t.random_practice_syllable_with(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn random_practice_syllable_with<R: Rng + ?Sized>(&self, rng: &mut R) -> PracticeSyllable {
        debug_assert!(!self.practice.is_empty());
        let syllable = self.practice[rng.random_range(0..self.practice.len())];
        let (character, script) = if rng.random_bool(0.5) {
            (syllable.katakana, Script::Katakana)
        } else {
            (syllable.hiragana, Script::Hiragana)
        };
        let mut buf = [0; 4];
        PracticeSyllable {
            character,
            romaji: self.kana_to_romaji(&*character.encode_utf8(&mut buf)),
            script,
        }
    }
}
