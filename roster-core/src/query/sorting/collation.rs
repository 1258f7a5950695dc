//! Locale-aware string ordering
//!
//! Approximates the root-locale collation used by browsers and ICU for the
//! cases a user directory meets in practice:
//!
//! 1. Letters compare case-insensitively first (`apple` < `Banana`).
//! 2. Strings equal up to case put the lowercase letter first at the first
//!    position where case differs (`andrew` < `Andrew`).
//! 3. Anything still equal falls back to code point order, so the result is
//!    a total order consistent with `Eq`.
//!
//! Accents are not folded; `é` sorts after `z`.

use std::cmp::Ordering;

/// Compare two strings by collation rules described in the module docs.
pub fn compare(a: &str, b: &str) -> Ordering {
    fold_case(a)
        .cmp(fold_case(b))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

fn fold_case(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn compare_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .filter(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
