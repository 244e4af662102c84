/// # Ext
/// Core extensions for the `str` and `String` types: counting, splitting,
/// trimming, case conversion and character-level access.
///
/// "Character" here always means a grapheme cluster, never a byte.
use itertools::Itertools;
use unicode_segmentation::UnicodeSegmentation;

use crate::latin::Latinize;
use crate::lines::split_line_boundaries;

/// ### StrExt
/// Query and transform methods on `str`. Everything returns a new value;
/// the self-mutating variants live in [`StrExtMut`].
pub trait StrExt {
    /// Count non-overlapping occurrences of `pat`.
    /// An empty `pat` follows `str::split` semantics and yields the number
    /// of split segments minus one, i.e. `"abc".count_of("") == 4`.
    fn count_of(&self, pat: &str) -> usize;
    /// `true` if the text starts with `prefix`. The empty prefix matches everything.
    fn has_prefix(&self, prefix: &str) -> bool;
    /// `true` if the text ends with `suffix`. The empty suffix matches everything.
    fn has_suffix(&self, suffix: &str) -> bool;
    /// `true` if nothing is left after trimming whitespace and newlines.
    fn is_blank(&self) -> bool;
    /// Split on a separator character, keeping empty runs:
    /// `"a,b,,c".split_by(',') == ["a", "b", "", "c"]`.
    fn split_by(&self, sep: char) -> Vec<&str>;
    /// Copy of the text with leading and trailing whitespace and newlines removed.
    fn trimmed(&self) -> String;
    /// The first character, or `None` for empty text.
    fn first_character(&self) -> Option<&str>;
    /// The last character, or `None` for empty text.
    fn last_character(&self) -> Option<&str>;
    /// Remove every space and newline anywhere in the text, not just at the edges.
    fn without_spaces_and_newlines(&self) -> String;
    /// The character with the highest occurrence count, ignoring spaces and
    /// newlines. Ties go to whichever the count table yields first.
    fn most_common_character(&self) -> Option<String>;
    /// Camel case the text: `"Hello World"` becomes `"helloWorld"`,
    /// `"hello"` stays `"hello"`. Empty text stays empty.
    fn camel_case(&self) -> String;
    /// Split into lines on any line boundary (`\n`, `\r`, `\r\n`, vertical
    /// tab, form feed, NEL, LS, PS), excluding the terminators themselves.
    fn split_lines(&self) -> Vec<&str>;
    /// The text with its characters in reverse order.
    fn reversed(&self) -> String;
    /// Zero-based character index of the first character equal to `target`.
    /// A `target` longer than one character never matches.
    fn first_index(&self, target: &str) -> Option<usize>;
    /// Replace all non-overlapping occurrences of `search` with `with`.
    /// An empty `search` leaves the text unchanged.
    fn replace_all(&self, search: &str, with: &str) -> String;
}

impl StrExt for str {
    fn count_of(&self, pat: &str) -> usize {
        self.split(pat).count() - 1
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        self.starts_with(prefix)
    }

    fn has_suffix(&self, suffix: &str) -> bool {
        self.ends_with(suffix)
    }

    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    fn split_by(&self, sep: char) -> Vec<&str> {
        self.split(sep).collect()
    }

    fn trimmed(&self) -> String {
        self.trim().to_string()
    }

    fn first_character(&self) -> Option<&str> {
        self.graphemes(true).next()
    }

    fn last_character(&self) -> Option<&str> {
        self.graphemes(true).next_back()
    }

    fn without_spaces_and_newlines(&self) -> String {
        self.replace(' ', "").replace('\n', "")
    }

    fn most_common_character(&self) -> Option<String> {
        let stripped = self.without_spaces_and_newlines();
        stripped
            .graphemes(true)
            .counts()
            .into_iter()
            .max_by_key(|&(_, count)| count)
            .map(|(grapheme, _)| grapheme.to_string())
    }

    fn camel_case(&self) -> String {
        let source = self.to_lowercase();
        if !source.contains(' ') {
            return source;
        }
        // Title-case each word, squeeze out the separators, then push the
        // very first letter back down.
        let camel: String = source.split([' ', '\n']).map(capitalize_word).collect();
        let mut chars = camel.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn split_lines(&self) -> Vec<&str> {
        split_line_boundaries(self)
    }

    fn reversed(&self) -> String {
        self.graphemes(true).rev().collect()
    }

    fn first_index(&self, target: &str) -> Option<usize> {
        self.graphemes(true).position(|g| g == target)
    }

    fn replace_all(&self, search: &str, with: &str) -> String {
        if search.is_empty() {
            return self.to_string();
        }
        self.replace(search, with)
    }
}

/// ### StrExtMut
/// In-place variants. Each one overwrites the caller's `String` with the
/// result of the matching [`StrExt`] / [`Latinize`] method.
pub trait StrExtMut {
    /// Trim whitespace and newlines off both ends, in place.
    fn trim_in_place(&mut self);
    /// Camel case, in place.
    fn camelize(&mut self);
    /// Reverse the characters, in place.
    fn reverse_in_place(&mut self);
    /// Fold diacritics to plain latin letters, in place.
    fn latinize_in_place(&mut self);
}

impl StrExtMut for String {
    fn trim_in_place(&mut self) {
        *self = self.trimmed();
    }

    fn camelize(&mut self) {
        *self = self.camel_case();
    }

    fn reverse_in_place(&mut self) {
        *self = self.reversed();
    }

    fn latinize_in_place(&mut self) {
        *self = self.latinized();
    }
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
