//! Lexical rules over a single line of text.
//!
//! Three independent rules:
//! - tokens:   `[A-Za-z][A-Za-z'\-]*`, lowercased, yielded lazily
//! - letters:  `[A-Za-z]`, one match per letter; this is the "total word count" unit
//! - sections: the literal `.`
//!
//! The letter rule deliberately counts characters, not words. Reports built on top of it
//! stay comparable with earlier runs of the text analyzer, so it must not be "fixed" to a
//! real word count.

use once_cell::sync::OnceCell;
use regex::Regex;

fn token_re() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z][a-zA-Z'\-]*").expect("token regex"))
}

fn letter_re() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z]").expect("letter regex"))
}

/// Lazily yields lowercase tokens of `line`. Digits, whitespace and punctuation other than
/// `'`/`-` inside a token are skipped.
pub fn tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    token_re()
        .find_iter(line)
        .map(|m| m.as_str().to_ascii_lowercase())
}

/// Number of ASCII letters in `line` (the reproduced "word count" quirk).
pub fn letter_count(line: &str) -> usize {
    letter_re().find_iter(line).count()
}

/// Number of `.` characters in `line`.
pub fn section_count(line: &str) -> usize {
    line.matches('.').count()
}

/// Whitespace-only lines contribute to no tally at all.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
