// Percent-encoding of expanded values

use std::borrow::Cow;

/// Percent-encode `value` for use inside a URI.
///
/// The RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`) is kept as is, every other
/// byte of the UTF-8 form is written as `%XX`. Spaces become `%20`, never `+`.
pub fn encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_percent_twenty() {
        assert_eq!(encode("New York"), "New%20York");
    }

    #[test]
    fn test_unreserved_untouched() {
        let unreserved = "AZaz09-._~";
        assert_eq!(encode(unreserved), unreserved);
        assert!(matches!(encode(unreserved), Cow::Borrowed(_)));
    }

    #[test]
    fn test_reserved_characters() {
        assert_eq!(encode("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
        assert_eq!(encode("{x}+#"), "%7Bx%7D%2B%23");
        assert_eq!(encode("100%"), "100%25");
    }

    #[test]
    fn test_utf8() {
        assert_eq!(encode("São Jorge"), "S%C3%A3o%20Jorge");
    }
}
