use url::Url;

use crate::errors::UrlSyntaxError;

/// Base that scheme-less references are resolved against; it only serves the syntax check
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Validates that a string is URL syntax: an absolute URL or a relative reference.
///
/// No scheme allow-list: `mailto:` and `file:` URLs pass just like `https:` ones,
/// and so do references like `example.com` or `/relative/path`. Control bytes are
/// rejected anywhere in the input instead of being stripped or escaped.
pub fn validate_url(url_str: &str) -> Result<Url, UrlSyntaxError> {
    if url_str.is_empty() {
        return Err(UrlSyntaxError::Empty);
    }

    if url_str.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return Err(UrlSyntaxError::ControlCharacter);
    }

    if has_scheme(url_str) {
        return Ok(Url::parse(url_str)?);
    }

    // `a:b/c` would otherwise read as a scheme
    if first_segment_has_colon(url_str) {
        return Err(UrlSyntaxError::ColonInFirstSegment);
    }

    let base = Url::parse(RELATIVE_BASE)?;
    Ok(Url::options().base_url(Some(&base)).parse(url_str)?)
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` followed by `:`
fn has_scheme(url_str: &str) -> bool {
    let Some((scheme, _)) = url_str.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn first_segment_has_colon(reference: &str) -> bool {
    let reference = reference.split_once('#').map_or(reference, |(head, _)| head);
    let reference = reference.split_once('?').map_or(reference, |(head, _)| head);
    if reference.starts_with('/') {
        return false;
    }

    let segment = reference.split_once('/').map_or(reference, |(head, _)| head);
    segment.contains(':')
}

#[cfg(test)]
mod tests {
    use url::ParseError;

    use super::*;

    #[test]
    fn test_validate_url() {
        // Valid URLs
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://example.com/path?query=value").is_ok());
        assert!(validate_url("ftp://example.com/file.txt").is_ok());
        assert!(validate_url("mailto:someone@example.com").is_ok());
        assert!(validate_url("example.com:8080").is_ok());

        // Invalid URLs
        assert_eq!(validate_url(""), Err(UrlSyntaxError::Empty));
        assert_eq!(
            validate_url("http://"),
            Err(UrlSyntaxError::Parse(ParseError::EmptyHost))
        );
        assert!(matches!(
            validate_url("http://[::1"),
            Err(UrlSyntaxError::Parse(_))
        ));
        assert!(matches!(
            validate_url("http://exa mple.com"),
            Err(UrlSyntaxError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_url_accepts_relative_references() {
        for reference in [
            "example.com",
            "www.example.com/page",
            "/relative/path",
            "not-a-url",
            "page?next=a:b",
            "docs/a:b",
            "#top",
        ] {
            assert!(validate_url(reference).is_ok(), "rejected {:?}", reference);
        }
    }

    #[test]
    fn test_validate_url_rejects_control_characters() {
        for input in [
            "http://exa\u{0}mple.com",
            "https://example.com/a\u{1}b",
            "https://example.com/a\nb",
            "https://example.com/\u{7f}",
            "\thttps://example.com",
            "https://example.com\r",
            "example.com/\u{1f}",
        ] {
            assert_eq!(
                validate_url(input),
                Err(UrlSyntaxError::ControlCharacter),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_validate_url_rejects_colon_in_first_segment() {
        for input in ["1http://example.com", " https://example.com", ":8080", "a b:c/d"] {
            assert_eq!(
                validate_url(input),
                Err(UrlSyntaxError::ColonInFirstSegment),
                "accepted {:?}",
                input
            );
        }
    }
}
