/*!
Rewrite rules applied to romanized text.

- Gemination: `ッchi` becomes `tchi`, then `ッ` + a letter doubles the letter.
- Long vowels: a `-` between two non-digits is read as `ー`,
  then a letter followed by `ー` is doubled.

Anything these rules cannot resolve is left as is.
*/
use regex::Regex;
use tracing::debug;

use crate::{
    Result,
    data::kana::{LONG_VOWEL_MARK, SOKUON_CHAR},
};

#[derive(Clone, Debug)]
pub(crate) struct Rewriter {
    sokuon_chi: Regex,
    sokuon: Regex,
    hyphen: Regex,
    long_vowel: Regex,
    hyphen_replacement: String,

    gemination_enabled: bool,
    long_vowel_enabled: bool,
    hyphen_enabled: bool,
}

impl Rewriter {
    pub fn new(gemination: bool, long_vowel: bool, hyphen_long_vowel: bool) -> Result<Self> {
        Ok(Self {
            sokuon_chi: Regex::new(&format!("{SOKUON_CHAR}chi"))?,
            sokuon: Regex::new(&format!("{SOKUON_CHAR}([a-z])"))?,
            hyphen: Regex::new("([^0-9])-([^0-9])")?,
            long_vowel: Regex::new(&format!("([a-z]){LONG_VOWEL_MARK}"))?,
            hyphen_replacement: format!("${{1}}{LONG_VOWEL_MARK}${{2}}"),
            gemination_enabled: gemination,
            long_vowel_enabled: long_vowel,
            hyphen_enabled: hyphen_long_vowel,
        })
    }

    pub fn rewrite(&self, romaji: String) -> String {
        let mut romaji = romaji;
        if self.gemination_enabled {
            romaji = self.gemination(&romaji);
        }
        if self.hyphen_enabled {
            romaji = self
                .hyphen
                .replace_all(&romaji, self.hyphen_replacement.as_str())
                .into_owned();
        }
        if self.long_vowel_enabled {
            romaji = self.long_vowel.replace_all(&romaji, "${1}${1}").into_owned();
        }
        romaji
    }

    fn gemination(&self, romaji: &str) -> String {
        if !romaji.contains(SOKUON_CHAR) {
            return romaji.to_owned();
        }
        let romaji = self.sokuon_chi.replace_all(romaji, "tchi");
        let romaji = self.sokuon.replace_all(&romaji, "${1}${1}").into_owned();
        if romaji.contains(SOKUON_CHAR) {
            debug!(%romaji, "unresolved sokuon left in romaji");
        }
        romaji
    }
}
