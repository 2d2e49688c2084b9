//! Locale-style ordering of plant names
//!
//! Names compare on their base letters first, ignoring case and accents.
//! Remaining ties are broken by accents (unaccented first) and then by case,
//! with lowercase ahead of uppercase at the first position where they
//! differ. A proper prefix sorts first.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two names the way a user-facing sorted list expects
///
/// # Examples
///
/// ```
/// use gardenplan::search::locale_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_cmp("Basil", "basilisk fern"), Ordering::Less);
/// assert_eq!(locale_cmp("basil", "Basil"), Ordering::Less);
/// assert_eq!(locale_cmp("Jalapeño", "Jalapenos"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(fold(b))
        .then_with(|| accents(a).cmp(&accents(b)))
        .then_with(|| case_tiebreak(a, b))
}

/// Base letters after canonical decomposition, marks dropped
fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    base_chars(s).flat_map(char::to_lowercase)
}

/// Combining marks grouped by the base letter they follow
fn accents(s: &str) -> Vec<Vec<char>> {
    let mut groups: Vec<Vec<char>> = Vec::new();
    for c in s.nfd() {
        if !is_combining_mark(c) {
            groups.push(Vec::new());
        } else if let Some(marks) = groups.last_mut() {
            marks.push(c);
        }
    }
    groups
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in base_chars(a).zip(base_chars(b)) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    base_chars(a).count().cmp(&base_chars(b).count())
}
