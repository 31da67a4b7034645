/// Apply `(from, to)` pairs in order, each one globally over the whole string
/// before the next pair is tried.
///
/// This is the reference semantics of every conversion: pair order matters,
/// so callers put combos before the core syllables they start with.
/// Empty `from` patterns are skipped.
///
/// ## Example
/// ```
/// use japxlate::substitute;
///
/// assert_eq!(substitute("kyoto", [("kyo", "キョ"), ("to", "ト")]), "キョト");
/// // Order matters: "yo" eats the end of "kyo" first
/// assert_eq!(substitute("kyo", [("yo", "ヨ"), ("kyo", "キョ")]), "kヨ");
/// ```
pub fn substitute<I, F, T>(s: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (F, T)>,
    F: AsRef<str>,
    T: AsRef<str>,
{
    let mut buf = s.to_owned();
    for (from, to) in pairs {
        let from = from.as_ref();
        if from.is_empty() || !buf.contains(from) {
            continue;
        }
        buf = buf.replace(from, to.as_ref());
    }
    buf
}
