//! Case- and accent-insensitive ordering for result lists.
//!
//! The table is fixed rather than locale-driven:
//!
//! 1. values starting with a Latin letter sort before everything else, so
//!    digits, symbols and other scripts (Greek, Cyrillic, CJK) trail;
//! 2. values are folded with NFKD, combining marks removed, then lower-cased,
//!    so `"Apple"`/`"apple"` and `"école"`/`"ecole"` tie;
//! 3. folded characters compare by class (whitespace, then punctuation and
//!    symbols, then digits, then letters) and then by code point;
//! 4. ties keep their input order.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Alphabetic,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Symbol,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Whitespace
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else if c.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Symbol
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    group: Group,
    weights: Vec<(CharClass, char)>,
}

impl CollationKey {
    pub fn new(value: &str) -> Self {
        let weights: Vec<(CharClass, char)> = fold(value)
            .map(|c| (CharClass::of(c), c))
            .collect();
        let group = match weights.first() {
            Some((CharClass::Letter, c)) if is_latin(*c) => Group::Alphabetic,
            _ => Group::Other,
        };
        Self { group, weights }
    }
}

/// Latin letters that survive folding: ASCII plus the Latin supplement and
/// extension blocks (`ß`, `ø`, `ł`, ...).
fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c,
            '\u{00c0}'..='\u{00ff}'
            | '\u{0100}'..='\u{024f}'
            | '\u{0250}'..='\u{02af}'
            | '\u{1e00}'..='\u{1eff}'
            | '\u{2c60}'..='\u{2c7f}'
            | '\u{a720}'..='\u{a7ff}'
            | '\u{ab30}'..='\u{ab6f}')
            && c.is_alphabetic()
}

fn fold(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

pub fn compare_values(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Stable sort under the table above.
pub fn sort_values(values: Vec<String>) -> Vec<String> {
    let mut keyed: Vec<(CollationKey, String)> = values
        .into_iter()
        .map(|value| (CollationKey::new(&value), value))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, value)| value).collect()
}
