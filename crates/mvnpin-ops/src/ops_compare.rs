//! Operation: compare two version strings.

use std::cmp::Ordering;

use mvnpin_resolver::version;

/// Render the ordering of `a` and `b` as `a < b`, `a = b` or `a > b`.
pub fn compare(a: &str, b: &str) -> String {
    let symbol = match version::compare(a, b) {
        Ordering::Less => '<',
        Ordering::Equal => '=',
        Ordering::Greater => '>',
    };
    format!("{a} {symbol} {b}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_ordering() {
        assert_eq!(compare("1.2.0", "1.10.0"), "1.2.0 < 1.10.0");
        assert_eq!(compare("1.0", "1.0"), "1.0 = 1.0");
        assert_eq!(compare("1.0-rc2", "1.0-RC1"), "1.0-rc2 > 1.0-RC1");
    }
}
