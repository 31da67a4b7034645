//! Hiragana, katakana and romaji transliteration.
//!
//! ## Usage
//! ```rust
//! use japxlate::{hiragana_to_katakana, kana_to_romaji, romaji_to_hiragana};
//!
//! assert_eq!(hiragana_to_katakana("ひらがな"), "ヒラガナ");
//! assert_eq!(kana_to_romaji("がっこう"), "gakkou");
//! assert_eq!(kana_to_romaji("ラーメン"), "raamen");
//! assert_eq!(romaji_to_hiragana("sushi"), "すし");
//! ```
//!
//! The free functions share one lazily built [`Transliterator`].
//! Build your own with [`Transliterator::builder()`] to turn off rewrite rules.
//!
//! ## Design
//! All conversions are defined by [`substitute()`]: ordered, global replacement of
//! `(from, to)` pairs, combos before core syllables.
//!
//! For kana input, every pattern is a distinct kana and no combo overlaps another,
//! so a single leftmost-longest pass over a
//! [double-array Aho-Corasick automaton](daachorse) gives the same output in linear time.
//! Romaji patterns do contain each other (`tsu` and `su`, `shi` and `hi`),
//! so romaji input goes through [`substitute()`] itself.
//!
//! ## Romaji to kana
//! [`romaji_to_hiragana()`] does not rebuild `っ` or `ー` from doubled letters:
//! `"gakkou"` becomes `"がkこう"`, not `"がっこう"`.
//! Combo romajis also shadow some core ones, e.g. `wo` becomes `うぉ` rather than `を`.
//!
//! ## Features
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
use std::sync::LazyLock;

use bon::bon;
use daachorse::{CharwiseDoubleArrayAhoCorasick, CharwiseDoubleArrayAhoCorasickBuilder, MatchKind};
use tracing::trace;

pub mod data;
mod error;
mod practice;
mod rewrite;
mod substitute;

pub use data::kana::{Combo, Syllable, SyllableKind};
pub use error::{Error, Result};
pub use practice::{PracticeSyllable, Script};
pub use substitute::substitute;

use data::kana::{COMBOS, SYLLABLES};
use rewrite::Rewriter;

/// Leftmost-longest replacement of a fixed pattern set.
#[derive(Clone)]
struct Replacer {
    ac: CharwiseDoubleArrayAhoCorasick<u32>,
    replacements: Vec<String>,
}

impl Replacer {
    fn new<P: AsRef<str>>(pairs: impl IntoIterator<Item = (P, String)>) -> Result<Self> {
        let (patterns, replacements): (Vec<P>, Vec<String>) = pairs.into_iter().unzip();
        let ac = CharwiseDoubleArrayAhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .build(patterns)?;
        Ok(Self { ac, replacements })
    }

    fn replace_all(&self, s: &str) -> String {
        let mut buf = String::with_capacity(s.len());
        let mut last = 0;
        for m in self.ac.leftmost_find_iter(s) {
            buf.push_str(&s[last..m.start()]);
            buf.push_str(&self.replacements[m.value() as usize]);
            last = m.end();
        }
        buf.push_str(&s[last..]);
        buf
    }

    fn len(&self) -> usize {
        self.replacements.len()
    }
}

/// A prepared kana/romaji transliterator.
///
/// Building one compiles the static tables, so share it instead of rebuilding:
/// [`Transliterator::global()`] is the instance behind the free functions.
#[derive(Clone)]
pub struct Transliterator {
    hiragana_to_katakana: Replacer,
    katakana_to_hiragana: Replacer,
    /// Combos and core syllables, with `ッ` kept as a placeholder.
    katakana_to_romaji: Replacer,
    /// Combos first, then core syllables.
    romaji_to_katakana: Vec<(&'static str, String)>,
    rewriter: Rewriter,
    pub(crate) practice: Vec<&'static Syllable>,
}

#[bon]
impl Transliterator {
    /// [`Transliterator::default()`] enables every rewrite rule.
    ///
    /// - `gemination`: resolve `ッ` by doubling the following letter (`ッka` → `kka`, `ッchi` → `tchi`).
    /// - `long_vowel`: double the letter before `ー` (`kaーdo` → `kaado`).
    /// - `hyphen_long_vowel`: read a `-` between two non-digits as `ー`.
    ///
    /// ## Example
    /// ```
    /// use japxlate::Transliterator;
    ///
    /// let t = Transliterator::builder().gemination(false).build().unwrap();
    /// assert_eq!(t.kana_to_romaji("がっこう"), "gaッkou");
    /// ```
    #[builder(builder_type = TransliteratorBuilder)]
    pub fn new(
        #[builder(default = true)] gemination: bool,
        #[builder(default = true)] long_vowel: bool,
        #[builder(default = true)] hyphen_long_vowel: bool,
    ) -> Result<Self> {
        let hiragana_to_katakana = Replacer::new(
            SYLLABLES
                .iter()
                .map(|s| (s.hiragana.to_string(), s.katakana.to_string())),
        )?;
        let katakana_to_hiragana = Replacer::new(
            SYLLABLES
                .iter()
                .map(|s| (s.katakana.to_string(), s.hiragana.to_string())),
        )?;
        let katakana_to_romaji = Replacer::new(
            data::kana::combo_katakana_romaji_pairs()
                .map(|(katakana, romaji)| (katakana.to_string(), romaji.to_string()))
                .chain(SYLLABLES.iter().filter_map(|s| {
                    s.romaji
                        .map(|romaji| (s.katakana.to_string(), romaji.to_string()))
                })),
        )?;
        let romaji_to_katakana: Vec<_> = COMBOS
            .iter()
            .map(|c| (c.romaji, c.katakana.to_string()))
            .chain(
                data::kana::core_romaji_katakana_pairs()
                    .map(|(romaji, katakana)| (romaji, katakana.to_string())),
            )
            .collect();

        let rewriter = Rewriter::new(gemination, long_vowel, hyphen_long_vowel)?;
        let practice = practice::practice_syllables();

        trace!(
            kana_patterns = katakana_to_romaji.len(),
            romaji_patterns = romaji_to_katakana.len(),
            practice = practice.len(),
            "built transliterator"
        );

        Ok(Self {
            hiragana_to_katakana,
            katakana_to_hiragana,
            katakana_to_romaji,
            romaji_to_katakana,
            rewriter,
            practice,
        })
    }
}

static GLOBAL: LazyLock<Transliterator> = LazyLock::new(Transliterator::default);

impl Transliterator {
    /// The process-wide default instance.
    pub fn global() -> &'static Transliterator {
        &GLOBAL
    }

    /// Convert hiragana to katakana. Anything else is kept as is.
    pub fn hiragana_to_katakana<S: ?Sized + AsRef<str>>(&self, s: &S) -> String {
        self.hiragana_to_katakana.replace_all(s.as_ref())
    }

    /// Convert katakana to hiragana. Anything else is kept as is.
    pub fn katakana_to_hiragana<S: ?Sized + AsRef<str>>(&self, s: &S) -> String {
        self.katakana_to_hiragana.replace_all(s.as_ref())
    }

    /// Romanize hiragana and katakana, best effort.
    ///
    /// Kana without a romaji stays as katakana, and a `ッ` with no letter after it is kept.
    ///
    /// ## Example
    /// ```
    /// use japxlate::Transliterator;
    ///
    /// let t = Transliterator::global();
    /// assert_eq!(t.kana_to_romaji("キャ"), "kya");
    /// assert_eq!(t.kana_to_romaji("っち"), "tchi");
    /// assert_eq!(t.kana_to_romaji("あっ"), "aッ");
    /// ```
    pub fn kana_to_romaji<S: ?Sized + AsRef<str>>(&self, s: &S) -> String {
        let katakana = self.hiragana_to_katakana(s);
        self.rewriter.rewrite(self.romanize_katakana(&katakana))
    }

    /// Combo and core substitution only, `ッ` is left in place.
    fn romanize_katakana(&self, katakana: &str) -> String {
        self.katakana_to_romaji.replace_all(katakana)
    }

    /// Convert romaji to hiragana, best effort.
    ///
    /// Doubled letters are not turned back into `っ` or `ー`.
    ///
    /// ## Example
    /// ```
    /// use japxlate::Transliterator;
    ///
    /// let t = Transliterator::global();
    /// assert_eq!(t.romaji_to_hiragana("kyouto"), "きょうと");
    /// assert_eq!(t.romaji_to_hiragana("gakkou"), "がkこう");
    /// ```
    pub fn romaji_to_hiragana<S: ?Sized + AsRef<str>>(&self, s: &S) -> String {
        let katakana = substitute(s.as_ref(), self.romaji_to_katakana.iter().map(|(r, k)| (*r, k)));
        self.katakana_to_hiragana(&katakana)
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("built-in kana tables are valid")
    }
}

/// See [`Transliterator::hiragana_to_katakana()`].
pub fn hiragana_to_katakana<S: ?Sized + AsRef<str>>(s: &S) -> String {
    Transliterator::global().hiragana_to_katakana(s)
}

/// See [`Transliterator::katakana_to_hiragana()`].
pub fn katakana_to_hiragana<S: ?Sized + AsRef<str>>(s: &S) -> String {
    Transliterator::global().katakana_to_hiragana(s)
}

/// See [`Transliterator::kana_to_romaji()`].
pub fn kana_to_romaji<S: ?Sized + AsRef<str>>(s: &S) -> String {
    Transliterator::global().kana_to_romaji(s)
}

/// See [`Transliterator::romaji_to_hiragana()`].
pub fn romaji_to_hiragana<S: ?Sized + AsRef<str>>(s: &S) -> String {
    Transliterator::global().romaji_to_hiragana(s)
}

/// See [`Transliterator::random_practice_syllable()`].
pub fn random_practice_syllable() -> PracticeSyllable {
    Transliterator::global().random_practice_syllable()
}

/// See [`Transliterator::random_practice_syllable_with()`].
pub fn random_practice_syllable_with<R: rand::Rng + ?Sized>(rng: &mut R) -> PracticeSyllable {
    Transliterator::global().random_practice_syllable_with(rng)
}

/// Whether the string has any multibyte (non-ASCII) character.
///
/// A cheap way to tell a Japanese query from an English or romaji one.
pub fn is_multibyte(s: &str) -> bool {
    !s.is_ascii()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::kana::SOKUON_PLACEHOLDER;

    fn katakana_romaji_pairs() -> Vec<(String, String)> {
        data::kana::combo_katakana_romaji_pairs()
            .map(|(k, r)| (k.to_string(), r.to_string()))
            .chain(
                SYLLABLES
                    .iter()
                    .filter_map(|s| s.romaji.map(|r| (s.katakana.to_string(), r.to_string()))),
            )
            .collect()
    }

    const SENTENCES: &[&str] = &[
        "ひらがな",
        "カタカナ",
        "がっこう",
        "ちょっとまって",
        "コンピューター",
        "ジョジョの奇妙な冒険",
        "hello ひらがな!",
        "ヴァイオリンとヴ",
        "ゐゑヰヱゕヵ",
        "まっちゃ、ラーメン。",
        "キャキュキョ ぎゃぎゅぎょ",
        "",
    ];

    #[test]
    fn build() {
        let t = Transliterator::builder().build();
        assert!(t.is_ok());
        assert_eq!(t.unwrap().katakana_to_romaji.len(), COMBOS.len() + SYLLABLES.len() - 2);
    }

    #[test]
    fn kana_round_trip() {
        let t = Transliterator::global();
        let all: String = SYLLABLES.iter().map(|s| s.hiragana).collect();
        assert_eq!(t.katakana_to_hiragana(&t.hiragana_to_katakana(&all)), all);
        for s in SYLLABLES {
            let h = s.hiragana.to_string();
            assert_eq!(t.hiragana_to_katakana(&h), s.katakana.to_string());
            assert_eq!(t.katakana_to_hiragana(&t.hiragana_to_katakana(&h)), h);
        }
    }

    #[test]
    fn kana_passthrough() {
        assert_eq!(hiragana_to_katakana("ひらがな"), "ヒラガナ");
        assert_eq!(katakana_to_hiragana("カタカナ"), "かたかな");
        assert_eq!(hiragana_to_katakana("abc-ー、。"), "abc-ー、。");
        assert_eq!(katakana_to_hiragana("abc-ー、。"), "abc-ー、。");
        assert_eq!(hiragana_to_katakana("カタカナ"), "カタカナ");
        assert_eq!(katakana_to_hiragana("ひらがな"), "ひらがな");
        assert_eq!(hiragana_to_katakana("日本ご"), "日本ゴ");
    }

    /// The automata must agree with ordered substitution.
    #[test]
    fn automaton_matches_substitute() {
        let t = Transliterator::global();
        let to_katakana: Vec<_> = SYLLABLES
            .iter()
            .map(|s| (s.hiragana.to_string(), s.katakana.to_string()))
            .collect();
        let to_hiragana: Vec<_> = SYLLABLES
            .iter()
            .map(|s| (s.katakana.to_string(), s.hiragana.to_string()))
            .collect();
        let to_romaji = katakana_romaji_pairs();

        let all_hiragana: String = SYLLABLES.iter().map(|s| s.hiragana).collect();
        let all_katakana: String = SYLLABLES.iter().map(|s| s.katakana).collect();
        let all_combos: String = COMBOS.iter().map(|c| c.katakana).collect();
        let mut inputs: Vec<String> = SENTENCES.iter().map(|s| s.to_string()).collect();
        inputs.extend([all_hiragana, all_katakana, all_combos]);

        for input in &inputs {
            assert_eq!(
                t.hiragana_to_katakana(input),
                substitute(input, to_katakana.iter().map(|(a, b)| (a, b))),
                "{input}"
            );
            assert_eq!(
                t.katakana_to_hiragana(input),
                substitute(input, to_hiragana.iter().map(|(a, b)| (a, b))),
                "{input}"
            );
            let katakana = t.hiragana_to_katakana(input);
            assert_eq!(
                t.romanize_katakana(&katakana),
                substitute(&katakana, to_romaji.iter().map(|(a, b)| (a, b))),
                "{input}"
            );
        }
    }

    #[test]
    fn table_alignment() {
        let t = Transliterator::global();
        for s in SYLLABLES {
            let Some(romaji) = s.romaji else { continue };
            if s.kind == SyllableKind::Sokuon {
                continue;
            }
            assert_eq!(t.kana_to_romaji(&s.hiragana.to_string()), romaji, "{}", s.hiragana);
            assert_eq!(t.kana_to_romaji(&s.katakana.to_string()), romaji, "{}", s.katakana);
        }
        for c in COMBOS {
            assert_eq!(t.kana_to_romaji(c.katakana), c.romaji);
        }
    }

    #[test]
    fn kana_to_romaji_combo() {
        assert_eq!(kana_to_romaji("キャ"), "kya");
        assert_eq!(kana_to_romaji("きゃ"), "kya");
        assert_eq!(kana_to_romaji("きょう"), "kyou");
        assert_eq!(kana_to_romaji("ジョジョ"), "jojo");
        assert_eq!(kana_to_romaji("ファイル"), "fairu");
        assert_eq!(kana_to_romaji("パーティー"), "paatii");
        assert_eq!(kana_to_romaji("リャ"), "rya");
    }

    #[test]
    fn kana_to_romaji_gemination() {
        assert_eq!(kana_to_romaji("ッか"), "kka");
        assert_eq!(kana_to_romaji("ッち"), "tchi");
        assert_eq!(kana_to_romaji("がっこう"), "gakkou");
        assert_eq!(kana_to_romaji("ちょっと"), "chotto");
        assert_eq!(kana_to_romaji("ざっし"), "zasshi");
        assert_eq!(kana_to_romaji("まっちゃ"), "maccha");
        assert_eq!(kana_to_romaji("ぼっちゃん"), "bocchan");
    }

    #[test]
    fn kana_to_romaji_unresolved() {
        assert_eq!(kana_to_romaji("っ"), SOKUON_PLACEHOLDER);
        assert_eq!(kana_to_romaji("あっ"), "aッ");
        assert_eq!(kana_to_romaji("えっ!?"), "eッ!?");
        // No standard romaji
        assert_eq!(kana_to_romaji("ヵ"), "ヵ");
        assert_eq!(kana_to_romaji("ゕげつ"), "ヵgetsu");
        // Not kana at all
        assert_eq!(kana_to_romaji("日本"), "日本");
    }

    #[test]
    fn kana_to_romaji_long_vowel() {
        assert_eq!(kana_to_romaji("カード"), "kaado");
        assert_eq!(kana_to_romaji("カ-ド"), "kaado");
        assert_eq!(kana_to_romaji("ラーメン"), "raamen");
        assert_eq!(kana_to_romaji("コンピューター"), "konpyuutaa");
        assert_eq!(kana_to_romaji("ー"), "ー");
        assert_eq!(kana_to_romaji("1-2"), "1-2");
    }

    #[test]
    fn kana_to_romaji_mixed() {
        assert_eq!(kana_to_romaji("hello ひらがな!"), "hello hiragana!");
        assert_eq!(kana_to_romaji("ヴァイオリン"), "vaiorin");
        assert_eq!(kana_to_romaji("ゔ"), "vu");
    }

    #[test]
    fn romaji_round_trip() {
        let t = Transliterator::global();
        let combo_romajis: Vec<&str> = COMBOS.iter().map(|c| c.romaji).collect();
        let mut seen = Vec::new();
        for s in SYLLABLES {
            let Some(romaji) = s.romaji else { continue };
            let shadowed = seen.contains(&romaji) || combo_romajis.contains(&romaji);
            seen.push(romaji);
            if shadowed || s.kind == SyllableKind::Sokuon {
                continue;
            }
            assert_eq!(t.romaji_to_hiragana(romaji), s.hiragana.to_string(), "{romaji}");
        }
    }

    #[test]
    fn romaji_to_hiragana_words() {
        assert_eq!(romaji_to_hiragana("konnichiwa"), "こんにちわ");
        assert_eq!(romaji_to_hiragana("tsuki"), "つき");
        assert_eq!(romaji_to_hiragana("sushi"), "すし");
        assert_eq!(romaji_to_hiragana("kyou"), "きょう");
        assert_eq!(romaji_to_hiragana("arigatou"), "ありがとう");
        assert_eq!(romaji_to_hiragana("jojo"), "じょじょ");
        assert_eq!(romaji_to_hiragana("ryokan"), "りょかん");
    }

    #[test]
    fn romaji_to_hiragana_asymmetry() {
        // Doubled letters are kept
        assert_eq!(romaji_to_hiragana("gakkou"), "がkこう");
        assert_eq!(romaji_to_hiragana("kaado"), "かあど");
        // Combos shadow core syllables
        assert_eq!(romaji_to_hiragana("wo"), "うぉ");
        assert_eq!(romaji_to_hiragana("di"), "でぃ");
        // Not romaji
        assert_eq!(romaji_to_hiragana("XYZ 123"), "XYZ 123");
        assert_eq!(romaji_to_hiragana("Ka"), "Kあ");
    }

    #[test]
    fn multibyte() {
        assert!(is_multibyte("ひらがな"));
        assert!(is_multibyte("café"));
        assert!(!is_multibyte("hiragana"));
        assert!(!is_multibyte(""));
    }

    #[test]
    fn rewrite_flags() {
        let t = Transliterator::builder()
            .long_vowel(false)
            .build()
            .unwrap();
        assert_eq!(t.kana_to_romaji("カード"), "kaーdo");
        assert_eq!(t.kana_to_romaji("がっこう"), "gakkou");

        let t = Transliterator::builder()
            .hyphen_long_vowel(false)
            .build()
            .unwrap();
        assert_eq!(t.kana_to_romaji("カ-ド"), "ka-do");
        assert_eq!(t.kana_to_romaji("カード"), "kaado");
    }

    #[test]
    fn concurrent() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| kana_to_romaji("がっこう")))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "gakkou");
        }
    }
}
