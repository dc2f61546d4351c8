//! Locale-style name comparison.
//!
//! Approximates the default collation of a browser's `localeCompare` with
//! three levels, each consulted only when the previous one ties:
//!
//! 1. base letters, ignoring accents and case (`é` and `E` both compare as `e`)
//! 2. accents, unaccented first
//! 3. case, lowercase first
//!
//! Names are decomposed (NFD) so precomposed and combining-mark spellings of
//! the same name compare equal.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two names for display ordering.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let (a, b) = (elements(a), elements(b));

    a.iter()
        .map(|x| x.base)
        .cmp(b.iter().map(|x| x.base))
        .then_with(|| {
            a.iter()
                .map(|x| x.marks.as_str())
                .cmp(b.iter().map(|x| x.marks.as_str()))
        })
        .then_with(|| a.iter().map(|x| x.upper).cmp(b.iter().map(|x| x.upper)))
}

/// One letter of a name split into its collation levels.
#[derive(Debug)]
struct Element {
    base: char,
    marks: String,
    upper: bool,
}

fn elements(name: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    for c in name.nfd() {
        let upper = c.is_uppercase();
        for lower in c.to_lowercase() {
            if is_combining_mark(lower) {
                if let Some(last) = out.last_mut() {
                    last.marks.push(lower);
                }
                continue;
            }
            match fold(lower) {
                Some((bases, mark)) => {
                    out.extend(bases.chars().map(|base| Element {
                        base,
                        marks: String::new(),
                        upper,
                    }));
                    if let (Some(mark), Some(last)) = (mark, out.last_mut()) {
                        last.marks.push(mark);
                    }
                }
                None => out.push(Element {
                    base: lower,
                    marks: String::new(),
                    upper,
                }),
            }
        }
    }
    out
}

/// Latin letters with no canonical decomposition, mapped onto their base
/// letters. Stroked letters keep the stroke as an accent.
fn fold(c: char) -> Option<(&'static str, Option<char>)> {
    let folded = match c {
        'ø' => ("o", Some('\u{338}')),
        'đ' => ("d", Some('\u{335}')),
        'ħ' => ("h", Some('\u{335}')),
        'ł' => ("l", Some('\u{337}')),
        'ß' => ("ss", None),
        'æ' => ("ae", None),
        'œ' => ("oe", None),
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Banana", "cherry"), Ordering::Less);
        assert_eq!(compare_names("Zeta", "alpha"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_breaks_ties_first() {
        assert_eq!(compare_names("acme", "Acme"), Ordering::Less);
        assert_eq!(compare_names("Acme", "acme"), Ordering::Greater);
        assert_eq!(compare_names("aCme", "acMe"), Ordering::Greater);
    }

    #[test]
    fn test_equal_and_degenerate_names() {
        assert_eq!(compare_names("Acme", "Acme"), Ordering::Equal);
        assert_eq!(compare_names("", ""), Ordering::Equal);
        assert_eq!(compare_names("", "a"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_names("Acme", "Acme Labs"), Ordering::Less);
        assert_eq!(compare_names("ACME", "acme labs"), Ordering::Less);
    }

    #[test]
    fn test_accented_letters_sort_with_their_base() {
        assert_eq!(compare_names("Émile", "Zeta"), Ordering::Less);
        assert_eq!(compare_names("Ørsted", "Zeta"), Ordering::Less);
        assert_eq!(compare_names("Ørsted", "Oslo"), Ordering::Less);
        assert_eq!(compare_names("Łódź", "Madrid"), Ordering::Less);
        assert_eq!(compare_names("Ålborg", "Berlin"), Ordering::Less);
    }

    #[test]
    fn test_base_letters_outrank_earlier_accents() {
        assert_eq!(
            compare_names("Société Générale", "Societe Z"),
            Ordering::Less
        );
        assert_eq!(compare_names("Éa", "Eb"), Ordering::Less);
    }

    #[test]
    fn test_accents_break_ties_before_case() {
        assert_eq!(compare_names("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_names("résumé", "Résumé"), Ordering::Less);
        assert_eq!(compare_names("Resume", "résumé"), Ordering::Less);
        assert_eq!(compare_names("Orsted", "Ørsted"), Ordering::Less);
    }

    #[test]
    fn test_composed_and_decomposed_are_equal() {
        assert_eq!(compare_names("Caf\u{e9}", "Cafe\u{301}"), Ordering::Equal);
    }

    #[test]
    fn test_ligatures_expand() {
        assert_eq!(compare_names("Straße", "Strasse"), Ordering::Equal);
        assert_eq!(compare_names("æther", "aether"), Ordering::Equal);
        assert_eq!(compare_names("Æther", "Aeon"), Ordering::Greater);
        assert_eq!(compare_names("Straße", "Strasz"), Ordering::Less);
    }
}
