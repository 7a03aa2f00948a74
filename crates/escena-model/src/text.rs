//! Text folding for user-typed lookups.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const COMBINING_TILDE: char = '\u{303}';

/// Lowercase `value` and strip diacritics, so `"musica"` matches `"Música"`
/// whether the accent arrives precomposed or as a combining mark.
///
/// `ñ` is a letter of its own in Spanish and survives folding.
pub fn fold(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    let mut chars = value.nfd().peekable();
    while let Some(c) = chars.next() {
        if is_combining_mark(c) {
            continue;
        }
        if matches!(c, 'n' | 'N') && chars.peek() == Some(&COMBINING_TILDE) {
            chars.next();
            folded.push('ñ');
            continue;
        }
        folded.extend(c.to_lowercase());
    }
    folded
}
