//! Pluralization utilities.

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "route")` -> `"0 routes"`
/// - `plural_count(1, "route")` -> `"1 route"`
/// - `plural_count(5, "route")` -> `"5 routes"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "route"), "0 routes");
        assert_eq!(plural_count(1, "route"), "1 route");
        assert_eq!(plural_count(3, "service"), "3 services");
    }
}
