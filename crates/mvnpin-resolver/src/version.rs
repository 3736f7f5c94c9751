//! Version comparison used to pick the winner among conflicting versions.
//!
//! The ordering is deliberately simpler than full Maven ordering:
//! - Versions are split into segments on the literal characters `.` and `_`
//! - Trailing empty segments are dropped (`"1.2."` has two segments), except
//!   that the empty version is a single empty segment
//! - Two all-digit segments compare as integers; the empty segment counts as 0
//! - Anything else compares as a case-insensitive string, so qualifiers like
//!   `-RC1` stay glued to their numeric prefix (`"0-RC1"`)
//! - When every shared position is equal, the version with more segments wins
//!
//! Mixing numeric and textual segments at the same position is not
//! transitive (`9 < 10` numerically but `"10" < "1a" < "9"` as text).
//! [`max_version`] is a stable left-to-right scan, so the winner is always
//! well defined even then.

use std::cmp::Ordering;

/// Compare two version strings.
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let left = segments(a);
    let right = segments(b);

    for (l, r) in left.iter().zip(right.iter()) {
        let ord = if is_numeric(l) && is_numeric(r) {
            compare_numeric(l, r)
        } else {
            compare_ignore_case(l, r)
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    left.len().cmp(&right.len())
}

/// Split a version into its comparable segments.
pub fn segments(version: &str) -> Vec<&str> {
    if version.is_empty() {
        return vec![""];
    }
    let mut parts: Vec<&str> = version.split(['.', '_']).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

/// The highest version, keeping the earliest one on ties.
pub fn max_version<'a, I>(versions: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut iter = versions.into_iter();
    let mut max = iter.next()?;
    for candidate in iter {
        if compare(max, candidate) == Ordering::Less {
            max = candidate;
        }
    }
    Some(max)
}

/// Zero or more ASCII digits.
fn is_numeric(segment: &str) -> bool {
    segment.bytes().all(|b| b.is_ascii_digit())
}

/// Integer comparison of digit strings of any length.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
