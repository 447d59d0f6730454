//! Case-insensitive identifiers.
//!
//! A [`Name`] is stored as a sequence of lower-case words and rendered on
//! demand in whichever casing an emission site needs. Casing is never
//! re-derived from an already-cased string.

use std::fmt;

/// Logical identifier made of lower-case words.
///
/// The first `prefix_len` words are the API prefix (for example `ti`). The
/// prefix takes part in every casing but not in [`Display`](fmt::Display),
/// which renders the bare snake-case name as written in the IR.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    words: Vec<String>,
    prefix_len: usize,
}

impl Name {
    /// Creates a name from a snake-case identifier.
    #[must_use]
    pub fn new(snake: &str) -> Self {
        Self {
            words: split_words(snake),
            prefix_len: 0,
        }
    }

    /// Creates a name with a leading API prefix.
    #[must_use]
    pub fn with_prefix(prefix: &str, snake: &str) -> Self {
        let mut words = split_words(prefix);
        let prefix_len = words.len();
        words.extend(split_words(snake));
        Self { words, prefix_len }
    }

    /// Returns a new name with `word` appended.
    #[must_use]
    pub fn extend(&self, word: &str) -> Self {
        let mut words = self.words.clone();
        words.extend(split_words(word));
        Self {
            words,
            prefix_len: self.prefix_len,
        }
    }

    /// Returns the name without its API prefix.
    ///
    /// A name made only of prefix words is returned unchanged so that the
    /// result is never empty.
    #[must_use]
    pub fn without_prefix(&self) -> Self {
        if self.prefix_len == 0 || self.prefix_len >= self.words.len() {
            return Self {
                words: self.words.clone(),
                prefix_len: 0,
            };
        }
        Self {
            words: self.words[self.prefix_len..].to_vec(),
            prefix_len: 0,
        }
    }

    /// Renders `lower_snake_case`.
    #[must_use]
    pub fn snake_case(&self) -> String {
        self.words.join("_")
    }

    /// Renders `SCREAMING_SNAKE_CASE`.
    #[must_use]
    pub fn screaming_snake_case(&self) -> String {
        self.words
            .iter()
            .map(|w| w.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Renders `UpperCamelCase`.
    ///
    /// Every letter that follows a non-letter is capitalized, so `r8u`
    /// becomes `R8U` and `1d` becomes `1D`.
    #[must_use]
    pub fn upper_camel_case(&self) -> String {
        self.words.iter().map(|w| title_case(w)).collect()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.prefix_len.min(self.words.len());
        f.write_str(&self.words[start..].join("_"))
    }
}

fn split_words(s: &str) -> Vec<String> {
    s.split('_')
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_is_letter = false;
    for c in word.chars() {
        if c.is_ascii_alphabetic() {
            if prev_is_letter {
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c.to_ascii_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
