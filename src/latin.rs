/// # Latin
/// Diacritic folding: map accented and decorated letters to their plain
/// latin base, e.g. "è" -> "e".
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub trait Latinize {
    /// Copy of the text with diacritics stripped. Decomposes to NFD, drops
    /// the combining marks, then recomposes what is left.
    fn latinized(&self) -> String;
}

impl Latinize for str {
    fn latinized(&self) -> String {
        self.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
    }
}
